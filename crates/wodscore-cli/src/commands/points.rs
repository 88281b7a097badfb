//! Points command.

use anyhow::Result;
use wodscore_core::points::calculate_points;
use wodscore_core::{PointsConfig, ScoringAlgorithm};

pub fn run(place: i64, first: i64, step: i64, online: bool) -> Result<()> {
    let algorithm = if online {
        ScoringAlgorithm::Online
    } else {
        ScoringAlgorithm::Traditional
    };
    let config = PointsConfig::new(first, step);
    println!("{}", calculate_points(algorithm, place, &config));
    Ok(())
}
