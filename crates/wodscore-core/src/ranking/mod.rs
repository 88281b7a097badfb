//! Ranking.
//!
//! This module contains:
//! - `TiebreakResolver` - comparator with tiebreak fallback
//! - `Ranker` - event leaderboard with places, points and exclusions
//! - Overall standings with countback / head-to-head tiebreakers

mod leaderboard;
mod places;
mod standings;
mod tiebreak;

pub use leaderboard::*;
pub use places::*;
pub use standings::*;
pub use tiebreak::*;
