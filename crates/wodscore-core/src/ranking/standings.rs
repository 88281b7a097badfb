use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::{ScoringConfig, TiebreakMethod, TiebreakerConfig};
use crate::error::{Error, Result};
use crate::scheme::SortDirection;

use super::{Leaderboard, compare_values, competition_places};

/// An athlete's points summed over events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteTotal {
    pub competitor_id: String,
    pub total_points: i64,
    /// Event id to place in that event.
    #[serde(default)]
    pub event_placements: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub competitor_id: String,
    pub place: u32,
    pub total_points: i64,
    pub event_placements: BTreeMap<String, u32>,
}

/// Sum points per athlete across event leaderboards, in order of first appearance.
///
/// Excluded entries contribute nothing.
pub fn collect_totals(events: &[(&str, &Leaderboard)]) -> Vec<AthleteTotal> {
    let mut totals: Vec<AthleteTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (event_id, board) in events {
        for entry in &board.entries {
            let slot = *index.entry(entry.competitor_id.clone()).or_insert_with(|| {
                totals.push(AthleteTotal {
                    competitor_id: entry.competitor_id.clone(),
                    total_points: 0,
                    event_placements: BTreeMap::new(),
                });
                totals.len() - 1
            });
            let total = &mut totals[slot];
            total.total_points += entry.points;
            total
                .event_placements
                .insert((*event_id).to_string(), entry.place);
        }
    }
    totals
}

/// Order athletes by total points and break ties with the configured methods.
///
/// `direction` is `Descending` when the highest total wins (traditional) and
/// `Ascending` when the lowest does (online).
pub fn apply_tiebreakers(
    athletes: &[AthleteTotal],
    config: &TiebreakerConfig,
    direction: SortDirection,
) -> Result<Vec<StandingEntry>> {
    config.validate()?;
    let methods: Vec<TiebreakMethod> = config.methods().collect();
    let event_id = config.head_to_head_event_id.as_deref();

    let compare = |a: &AthleteTotal, b: &AthleteTotal| -> Ordering {
        let mut ordering = compare_values(a.total_points, b.total_points, direction);
        for method in &methods {
            if ordering != Ordering::Equal {
                break;
            }
            ordering = match method {
                TiebreakMethod::Countback => countback(a, b),
                TiebreakMethod::HeadToHead => head_to_head(a, b, event_id.unwrap_or_default()),
                TiebreakMethod::None => Ordering::Equal,
            };
        }
        ordering
    };

    let mut sorted: Vec<&AthleteTotal> = athletes.iter().collect();
    sorted.sort_by(|a, b| compare(*a, *b));
    let places = competition_places(&sorted, |a, b| compare(*a, *b) == Ordering::Equal);

    Ok(sorted
        .into_iter()
        .zip(places)
        .map(|(athlete, place)| StandingEntry {
            competitor_id: athlete.competitor_id.clone(),
            place,
            total_points: athlete.total_points,
            event_placements: athlete.event_placements.clone(),
        })
        .collect())
}

/// Overall standings from event leaderboards under one scoring configuration.
pub fn overall_standings(
    events: &[(&str, &Leaderboard)],
    config: &ScoringConfig,
) -> Result<Vec<StandingEntry>> {
    if let Some(event_id) = &config.tiebreaker.head_to_head_event_id
        && config
            .tiebreaker
            .methods()
            .any(|m| m == TiebreakMethod::HeadToHead)
        && !events.iter().any(|(id, _)| *id == event_id.as_str())
    {
        return Err(Error::Configuration(format!(
            "head_to_head event not found: {}",
            event_id
        )));
    }

    let direction = if config.algorithm.lower_total_wins() {
        SortDirection::Ascending
    } else {
        SortDirection::Descending
    };
    apply_tiebreakers(&collect_totals(events), &config.tiebreaker, direction)
}

/// More first places wins, then more second places, and so on.
fn countback(a: &AthleteTotal, b: &AthleteTotal) -> Ordering {
    let worst = a
        .event_placements
        .values()
        .chain(b.event_placements.values())
        .copied()
        .max()
        .unwrap_or(0);

    for place in 1..=worst {
        let count_a = a.event_placements.values().filter(|&&p| p == place).count();
        let count_b = b.event_placements.values().filter(|&&p| p == place).count();
        match count_b.cmp(&count_a) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Better place in the designated event wins; no placement loses to any placement.
fn head_to_head(a: &AthleteTotal, b: &AthleteTotal, event_id: &str) -> Ordering {
    match (
        a.event_placements.get(event_id),
        b.event_placements.get(event_id),
    ) {
        (Some(pa), Some(pb)) => pa.cmp(pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
