use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ScoringAlgorithm, ScoringConfig, StatusTreatment};
use crate::error::Result;
use crate::points::{PointsConfig, calculate_points, zero_points};
use crate::scheme::{Scheme, SchemeRegistry};
use crate::score::{DecodeOptions, ScoreCodec, ScoreStatus};

use super::{
    ComparableScore, Tiebreak, TiebreakResolver, compare_scores, competition_places, sort_scores,
};

/// One competitor's submitted result for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub competitor_id: String,
    /// Canonical value; `None` when nothing was submitted.
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub status: ScoreStatus,
    #[serde(default)]
    pub tiebreak: Option<Tiebreak>,
    /// Reps completed at the cap for a capped `time-with-cap` result.
    #[serde(default)]
    pub secondary: Option<i64>,
}

impl ScoreEntry {
    pub fn scored(competitor_id: impl Into<String>, value: i64) -> Self {
        Self {
            competitor_id: competitor_id.into(),
            value: Some(value),
            status: ScoreStatus::Scored,
            tiebreak: None,
            secondary: None,
        }
    }

    pub fn with_status(competitor_id: impl Into<String>, status: ScoreStatus) -> Self {
        Self {
            competitor_id: competitor_id.into(),
            value: None,
            status,
            tiebreak: None,
            secondary: None,
        }
    }

    pub fn tiebreak(mut self, scheme: Scheme, value: i64) -> Self {
        self.tiebreak = Some(Tiebreak::new(scheme, value));
        self
    }

    pub fn secondary(mut self, reps: i64) -> Self {
        self.secondary = Some(reps);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub competitor_id: String,
    pub place: u32,
    pub points: i64,
    pub display_score: String,
    pub tiebreak_display: Option<String>,
    pub status: ScoreStatus,
}

/// Why an entry was left off the ranked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ExclusionReason {
    MissingValue,
    InvalidValue(String),
    Status(ScoreStatus),
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue => write!(f, "no score submitted"),
            Self::InvalidValue(msg) => write!(f, "invalid score: {}", msg),
            Self::Status(status) => write!(f, "status {}", status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedEntry {
    pub competitor_id: String,
    pub reason: ExclusionReason,
}

/// Ranked, pointed results of one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub scheme: Scheme,
    pub algorithm: ScoringAlgorithm,
    /// In rank order.
    pub entries: Vec<LeaderboardEntry>,
    pub excluded: Vec<ExcludedEntry>,
}

impl Leaderboard {
    pub fn entry(&self, competitor_id: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.competitor_id == competitor_id)
    }

    pub fn is_excluded(&self, competitor_id: &str) -> bool {
        self.excluded.iter().any(|e| e.competitor_id == competitor_id)
    }
}

/// Turns unordered event results into a leaderboard.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    registry: &'a SchemeRegistry,
}

struct Active<'s> {
    entry: &'s ScoreEntry,
    comparable: ComparableScore,
}

impl<'a> Ranker<'a> {
    pub fn new(registry: &'a SchemeRegistry) -> Self {
        Self { registry }
    }

    /// Rank with traditional points and the default status handling.
    pub fn rank(
        &self,
        scores: &[ScoreEntry],
        scheme: Scheme,
        points: &PointsConfig,
    ) -> Result<Leaderboard> {
        let config = ScoringConfig {
            algorithm: ScoringAlgorithm::Traditional,
            traditional: *points,
            ..Default::default()
        };
        self.rank_with(scores, scheme, &config)
    }

    /// Rank under a full scoring configuration.
    ///
    /// Fails only on configuration problems (unregistered scheme or tiebreak
    /// scheme). Bad rows are reported in `excluded`.
    pub fn rank_with(
        &self,
        scores: &[ScoreEntry],
        scheme: Scheme,
        config: &ScoringConfig,
    ) -> Result<Leaderboard> {
        self.registry.spec(scheme)?;
        for tb in scores.iter().filter_map(|s| s.tiebreak) {
            self.registry.spec(tb.scheme)?;
        }

        let resolver = TiebreakResolver::new(self.registry);
        let codec = ScoreCodec::new(self.registry);

        let mut active = Vec::new();
        let mut inactive = Vec::new();
        let mut excluded = Vec::new();

        for entry in scores {
            match config.status_handling.treatment(entry.status) {
                Some(StatusTreatment::Exclude) => {
                    debug!("Excluding {}: status {}", entry.competitor_id, entry.status);
                    excluded.push(ExcludedEntry {
                        competitor_id: entry.competitor_id.clone(),
                        reason: ExclusionReason::Status(entry.status),
                    });
                }
                Some(treatment) => inactive.push((entry, treatment)),
                None => match check_rankable(entry, scheme) {
                    Ok(()) => {
                        let comparable = resolver.comparable(
                            entry.value,
                            entry.status,
                            entry.secondary,
                            entry.tiebreak,
                            scheme,
                        )?;
                        active.push(Active { entry, comparable });
                    }
                    Err(reason) => {
                        debug!("Excluding {}: {}", entry.competitor_id, reason);
                        excluded.push(ExcludedEntry {
                            competitor_id: entry.competitor_id.clone(),
                            reason,
                        });
                    }
                },
            }
        }

        active.sort_by(|a, b| sort_scores(&a.comparable, &b.comparable));
        let places = competition_places(&active, |a, b| {
            compare_scores(&a.comparable, &b.comparable) == Ordering::Equal
        });

        let participants = active.len() + inactive.len();
        let mut entries = Vec::with_capacity(participants);

        for (item, place) in active.iter().zip(places) {
            let entry = item.entry;
            entries.push(LeaderboardEntry {
                competitor_id: entry.competitor_id.clone(),
                place,
                points: calculate_points(config.algorithm, i64::from(place), &config.traditional),
                display_score: codec.display(entry.value, entry.status, entry.secondary, scheme)?,
                tiebreak_display: tiebreak_display(&codec, entry.tiebreak)?,
                status: entry.status,
            });
        }

        // Stable: keeps input order within a status group.
        inactive.sort_by_key(|(entry, _)| entry.status.sort_order());
        let inactive_place = active.len() as u32 + 1;
        for (entry, treatment) in inactive {
            let points = match treatment {
                StatusTreatment::LastPlace => calculate_points(
                    config.algorithm,
                    i64::from(inactive_place),
                    &config.traditional,
                ),
                _ => zero_points(config.algorithm, participants),
            };
            entries.push(LeaderboardEntry {
                competitor_id: entry.competitor_id.clone(),
                place: inactive_place,
                points,
                display_score: entry.status.label().to_string(),
                tiebreak_display: None,
                status: entry.status,
            });
        }

        Ok(Leaderboard {
            scheme,
            algorithm: config.algorithm,
            entries,
            excluded,
        })
    }
}

/// Whether an active entry carries what it needs to be compared and shown.
fn check_rankable(entry: &ScoreEntry, scheme: Scheme) -> std::result::Result<(), ExclusionReason> {
    let capped_on_reps = entry.status == ScoreStatus::Cap && scheme == Scheme::TimeWithCap;
    match entry.value {
        None if !capped_on_reps => return Err(ExclusionReason::MissingValue),
        Some(v) if v < 0 => {
            return Err(ExclusionReason::InvalidValue(format!("negative value {}", v)));
        }
        _ => {}
    }
    if let Some(reps) = entry.secondary
        && reps < 0
    {
        return Err(ExclusionReason::InvalidValue(format!(
            "negative reps at cap {}",
            reps
        )));
    }
    if let Some(tb) = entry.tiebreak
        && tb.value < 0
    {
        return Err(ExclusionReason::InvalidValue(format!(
            "negative tiebreak {}",
            tb.value
        )));
    }
    Ok(())
}

fn tiebreak_display(codec: &ScoreCodec<'_>, tiebreak: Option<Tiebreak>) -> Result<Option<String>> {
    tiebreak
        .map(|tb| codec.decode(tb.value, tb.scheme, DecodeOptions::bare()))
        .transpose()
}
