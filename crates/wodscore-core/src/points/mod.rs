//! Placement points.
//!
//! This module contains:
//! - `PointsConfig` and traditional linear-decay points
//! - Online points (points equal place)
//! - P-Score, a performance-relative score

mod online;
mod pscore;
mod traditional;

pub use online::*;
pub use pscore::*;
pub use traditional::*;
