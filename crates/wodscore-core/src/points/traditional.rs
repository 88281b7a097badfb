use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Linear-decay placement points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    pub first_place_points: i64,
    /// Points deducted per place after first.
    pub step: i64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            first_place_points: defaults::FIRST_PLACE_POINTS,
            step: defaults::STEP,
        }
    }
}

impl PointsConfig {
    pub fn new(first_place_points: i64, step: i64) -> Self {
        Self {
            first_place_points,
            step,
        }
    }
}

/// Points for a 1-indexed place: `first_place_points - (place - 1) * step`,
/// never below zero. Places below 1 count as first.
pub fn calculate_traditional_points(place: i64, config: &PointsConfig) -> i64 {
    let place = place.max(1);
    let deduction = (place - 1).saturating_mul(config.step);
    config.first_place_points.saturating_sub(deduction).max(0)
}
