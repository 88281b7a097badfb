use crate::config::ScoringAlgorithm;

use super::{PointsConfig, calculate_traditional_points};

/// Online scoring: points equal the place, lowest total wins.
pub fn calculate_online_points(place: i64) -> i64 {
    place.max(1)
}

/// Points for `place` under `algorithm`.
pub fn calculate_points(algorithm: ScoringAlgorithm, place: i64, config: &PointsConfig) -> i64 {
    match algorithm {
        ScoringAlgorithm::Traditional => calculate_traditional_points(place, config),
        ScoringAlgorithm::Online => calculate_online_points(place),
    }
}

/// Points given to an athlete whose status earns nothing.
///
/// Under online scoring "nothing" is the worst possible score, one past the field.
pub fn zero_points(algorithm: ScoringAlgorithm, participants: usize) -> i64 {
    match algorithm {
        ScoringAlgorithm::Traditional => 0,
        ScoringAlgorithm::Online => participants as i64 + 1,
    }
}
