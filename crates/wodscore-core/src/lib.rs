//! Score normalization and leaderboard ranking for functional fitness competitions.
//!
//! Results of every workout type are encoded into one canonical integer per
//! scheme, compared in the scheme's better direction, placed with standard
//! competition ranking and converted into placement points.

pub mod config;
pub mod error;
pub mod points;
pub mod ranking;
pub mod scheme;
pub mod score;

pub use config::{
    ScoringAlgorithm, ScoringConfig, StatusHandling, StatusTreatment, TiebreakMethod,
    TiebreakerConfig,
};
pub use error::{Error, Result};
pub use points::{
    MedianField, PScoreConfig, PScoreResult, PointsConfig, calculate_online_points,
    calculate_pscore, calculate_traditional_points,
};
pub use ranking::{
    AthleteTotal, ExcludedEntry, ExclusionReason, Leaderboard, LeaderboardEntry, Ranker,
    ScoreEntry, StandingEntry, Tiebreak, TiebreakResolver, apply_tiebreakers, collect_totals,
    overall_standings,
};
pub use scheme::{Scheme, SchemeRegistry, SchemeSpec, ScoreType, SortDirection, Unit, WeightUnit};
pub use score::{
    DecodeOptions, ParsedScore, RawScore, ScoreCodec, ScoreRound, ScoreStatus,
    convert_legacy_fractional_rounds_reps, convert_legacy_to_new, convert_new_to_fractional_rounds_reps,
    convert_new_to_legacy, parse_score, parse_tiebreak,
};
