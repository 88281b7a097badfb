use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

use crate::error::Result;
use crate::ranking::{
    ScoreEntry, TiebreakResolver, compare_scores, competition_places, sort_scores,
};
use crate::scheme::{Scheme, SchemeRegistry, SortDirection};
use crate::score::ScoreStatus;

/// Which part of the field the median is taken from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MedianField {
    /// The last athlete of the top half of the ranked field.
    #[default]
    TopHalf,
    /// The median of every active result.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PScoreConfig {
    /// Results below the median may score under zero.
    pub allow_negatives: bool,
    pub median_field: MedianField,
}

impl Default for PScoreConfig {
    fn default() -> Self {
        Self {
            allow_negatives: true,
            median_field: MedianField::TopHalf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PScoreResult {
    pub competitor_id: String,
    pub place: u32,
    pub pscore: f64,
    pub status: ScoreStatus,
}

/// Performance score: 100 for the best result, 50 at the median, linear between.
///
/// Results are returned sorted by place. Active entries without a usable value
/// are left out.
pub fn calculate_pscore(
    registry: &SchemeRegistry,
    scores: &[ScoreEntry],
    scheme: Scheme,
    config: &PScoreConfig,
) -> Result<Vec<PScoreResult>> {
    let direction = registry.direction(scheme)?;
    let resolver = TiebreakResolver::new(registry);

    let mut active = Vec::new();
    let mut inactive = Vec::new();
    let mut withdrawn = Vec::new();

    for entry in scores {
        match entry.status {
            ScoreStatus::Scored | ScoreStatus::Cap => match entry.value {
                Some(value) if value >= 0 => {
                    let comparable = resolver.comparable(
                        entry.value,
                        entry.status,
                        entry.secondary,
                        entry.tiebreak,
                        scheme,
                    )?;
                    active.push((entry, value, comparable));
                }
                _ => debug!("Skipping {}: no usable value", entry.competitor_id),
            },
            ScoreStatus::Withdrawn => withdrawn.push(entry),
            ScoreStatus::Dnf | ScoreStatus::Dns | ScoreStatus::Dq => inactive.push(entry),
        }
    }

    active.sort_by(|a, b| sort_scores(&a.2, &b.2));
    let places = competition_places(&active, |a, b| compare_scores(&a.2, &b.2) == Ordering::Equal);

    let values: Vec<i64> = active.iter().map(|(_, value, _)| *value).collect();
    let mut results: Vec<PScoreResult> = Vec::with_capacity(scores.len());

    if let Some(&best) = values.first() {
        let median = median(&values, config.median_field);
        for ((entry, value, _), place) in active.iter().zip(places) {
            results.push(PScoreResult {
                competitor_id: entry.competitor_id.clone(),
                place,
                pscore: pscore(*value, best, median, direction, config.allow_negatives),
                status: entry.status,
            });
        }
    }

    let worst_active = results
        .iter()
        .map(|r| r.pscore)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.min(p))))
        .unwrap_or(0.0);

    let inactive_place = active.len() as u32 + 1;
    inactive.sort_by_key(|entry| entry.status.sort_order());
    for entry in &inactive {
        let pscore = match entry.status {
            ScoreStatus::Dnf => worst_active,
            _ => 0.0,
        };
        results.push(PScoreResult {
            competitor_id: entry.competitor_id.clone(),
            place: inactive_place,
            pscore,
            status: entry.status,
        });
    }

    let withdrawn_place = inactive_place + inactive.len() as u32;
    for entry in withdrawn {
        results.push(PScoreResult {
            competitor_id: entry.competitor_id.clone(),
            place: withdrawn_place,
            pscore: 0.0,
            status: entry.status,
        });
    }

    Ok(results)
}

/// Median of a field already sorted best first.
fn median(sorted: &[i64], field: MedianField) -> f64 {
    match field {
        MedianField::TopHalf => {
            let index = sorted.len().div_ceil(2).saturating_sub(1);
            sorted[index] as f64
        }
        MedianField::All => {
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
            } else {
                sorted[mid] as f64
            }
        }
    }
}

fn pscore(value: i64, best: i64, median: f64, direction: SortDirection, allow_negatives: bool) -> f64 {
    let (distance, spread) = match direction {
        SortDirection::Ascending => (value as f64 - best as f64, median - best as f64),
        SortDirection::Descending | SortDirection::Boolean => {
            (best as f64 - value as f64, best as f64 - median)
        }
    };

    let raw = if spread == 0.0 {
        if value == best { 100.0 } else { 50.0 }
    } else {
        100.0 - distance * 50.0 / spread
    };

    let rounded = (raw * 100.0).round() / 100.0;
    if !allow_negatives && rounded < 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(values: &[(&str, i64)]) -> Vec<ScoreEntry> {
        values
            .iter()
            .map(|(id, v)| ScoreEntry::scored(*id, *v))
            .collect()
    }

    fn score_of(results: &[PScoreResult], id: &str) -> f64 {
        results
            .iter()
            .find(|r| r.competitor_id == id)
            .map(|r| r.pscore)
            .unwrap()
    }

    fn run(scores: &[ScoreEntry], scheme: Scheme, config: PScoreConfig) -> Vec<PScoreResult> {
        let registry = SchemeRegistry::standard();
        calculate_pscore(&registry, scores, scheme, &config).unwrap()
    }

    #[test]
    fn test_best_gets_100_and_median_50() {
        let scores = field(&[("1", 300), ("2", 360), ("3", 420), ("4", 480)]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert_eq!(score_of(&results, "1"), 100.0);
        assert_eq!(score_of(&results, "2"), 50.0);
        assert_eq!(score_of(&results, "4"), -50.0);
        assert_eq!(results[0].place, 1);
    }

    #[test]
    fn test_between_best_and_median() {
        let scores = field(&[
            ("1", 300),
            ("2", 330),
            ("3", 360),
            ("4", 400),
            ("5", 450),
            ("6", 500),
        ]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert_eq!(score_of(&results, "2"), 75.0);
        assert_eq!(score_of(&results, "3"), 50.0);
    }

    #[test]
    fn test_descending_schemes() {
        let scores = field(&[
            ("1", 100_000),
            ("2", 90_000),
            ("3", 80_000),
            ("4", 70_000),
            ("5", 60_000),
            ("6", 50_000),
        ]);
        let results = run(&scores, Scheme::Load, PScoreConfig::default());
        assert_eq!(score_of(&results, "1"), 100.0);
        assert_eq!(score_of(&results, "2"), 75.0);
    }

    #[test]
    fn test_clamp_when_negatives_disallowed() {
        let scores = field(&[("1", 300), ("2", 360), ("3", 420), ("4", 480)]);
        let config = PScoreConfig {
            allow_negatives: false,
            ..Default::default()
        };
        let results = run(&scores, Scheme::Time, config);
        assert_eq!(score_of(&results, "4"), 0.0);
    }

    #[test]
    fn test_median_of_all() {
        let scores = field(&[("1", 300), ("2", 360), ("3", 420), ("4", 480)]);
        let config = PScoreConfig {
            median_field: MedianField::All,
            ..Default::default()
        };
        let results = run(&scores, Scheme::Time, config);
        // Median (360 + 420) / 2 = 390.
        assert_eq!(score_of(&results, "1"), 100.0);
        assert_eq!(score_of(&results, "2"), 66.67);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let scores = field(&[
            ("1", 300),
            ("2", 340),
            ("3", 360),
            ("4", 400),
            ("5", 450),
            ("6", 500),
        ]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert_eq!(score_of(&results, "2"), 66.67);
    }

    #[test]
    fn test_ties_and_identical_field() {
        let scores = field(&[("1", 300), ("2", 300), ("3", 360), ("4", 420)]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert_eq!(score_of(&results, "1"), 100.0);
        assert_eq!(score_of(&results, "2"), 100.0);
        assert_eq!(results[0].place, 1);
        assert_eq!(results[1].place, 1);

        let scores = field(&[("1", 300), ("2", 300), ("3", 300)]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert!(results.iter().all(|r| r.pscore == 100.0 && r.place == 1));
    }

    #[test]
    fn test_two_athletes() {
        let scores = field(&[("1", 300), ("2", 360)]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        assert_eq!(score_of(&results, "1"), 100.0);
        assert_eq!(score_of(&results, "2"), 50.0);
    }

    #[test]
    fn test_status_handling() {
        let mut scores = field(&[("1", 300), ("2", 360), ("4", 420)]);
        scores.push(ScoreEntry::with_status("dns", ScoreStatus::Dns));
        scores.push(ScoreEntry::with_status("dnf", ScoreStatus::Dnf));
        scores.push(ScoreEntry::with_status("wd", ScoreStatus::Withdrawn));
        let results = run(&scores, Scheme::Time, PScoreConfig::default());

        let dns = results.iter().find(|r| r.competitor_id == "dns").unwrap();
        assert_eq!(dns.pscore, 0.0);
        assert_eq!(dns.place, 4);

        // Worst active: 100 - 120 * 50 / 60 = 0.
        let dnf = results.iter().find(|r| r.competitor_id == "dnf").unwrap();
        assert_eq!(dnf.pscore, score_of(&results, "4"));
        assert_eq!(dnf.place, 4);

        let wd = results.iter().find(|r| r.competitor_id == "wd").unwrap();
        assert_eq!(wd.pscore, 0.0);
        assert_eq!(wd.place, 6);
        assert_eq!(results.last().unwrap().competitor_id, "wd");
    }

    #[test]
    fn test_capped_athlete_after_finishers() {
        let mut scores = field(&[("1", 300), ("2", 360), ("4", 420)]);
        let mut capped = ScoreEntry::with_status("3", ScoreStatus::Cap).secondary(90);
        capped.value = Some(500);
        scores.insert(2, capped);
        let results = run(&scores, Scheme::TimeWithCap, PScoreConfig::default());
        let capped = results.iter().find(|r| r.competitor_id == "3").unwrap();
        assert_eq!(capped.place, 4);
    }

    #[test]
    fn test_results_sorted_by_place() {
        let scores = field(&[("4", 480), ("1", 300), ("3", 420), ("2", 360)]);
        let results = run(&scores, Scheme::Time, PScoreConfig::default());
        let ids: Vec<&str> = results.iter().map(|r| r.competitor_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_field() {
        let results = run(&[], Scheme::Time, PScoreConfig::default());
        assert!(results.is_empty());

        let only_dnf = vec![ScoreEntry::with_status("dnf", ScoreStatus::Dnf)];
        let results = run(&only_dnf, Scheme::Points, PScoreConfig::default());
        assert_eq!(results[0].pscore, 0.0);
        assert_eq!(results[0].place, 1);
    }
}
