//! Configuration and encoding constants.
//!
//! This module contains:
//! - `ScoringConfig` - per-competition scoring configuration (algorithm, tiebreakers, statuses)
//! - Canonical encoding constants shared by the codec and the legacy adapter
//! - Default points configuration

mod scoring;

pub use scoring::*;

/// Canonical encoding constants.
///
/// Every canonical score is an integer in the scheme's smallest unit so that
/// two scores of the same scheme compare directly.
pub mod encoding {
    /// Milliseconds per second (time schemes).
    pub const MS_PER_SECOND: i64 = 1_000;

    /// Rounds-reps encoding: `rounds * ROUNDS_MULTIPLIER + reps`.
    pub const ROUNDS_MULTIPLIER: i64 = 100_000;

    /// Largest rep count representable within one round.
    pub const MAX_REPS_PER_ROUND: i64 = ROUNDS_MULTIPLIER - 1;

    /// Grams per pound (load).
    pub const GRAMS_PER_POUND: f64 = 453.592;

    /// Grams per kilogram (load).
    pub const GRAMS_PER_KILOGRAM: f64 = 1_000.0;

    /// Millimeters per meter (distance).
    pub const MM_PER_METER: f64 = 1_000.0;

    /// Millimeters per foot (distance).
    pub const MM_PER_FOOT: f64 = 304.8;
}

/// Encoding used before the canonical scale was introduced.
pub mod legacy {
    /// Legacy rounds-reps encoding: `rounds * LEGACY_ROUNDS_MULTIPLIER + reps`.
    pub const LEGACY_ROUNDS_MULTIPLIER: i64 = 1_000;

    /// Legacy "rounds.reps" notation stores reps as hundredths.
    pub const FRACTIONAL_REPS_SCALE: i64 = 100;

    /// Decimal places kept when converting grams/millimeters back to legacy units.
    pub const UNIT_DECIMALS: i32 = 2;
}

/// Default scoring values.
pub mod defaults {
    /// Points awarded to first place under the traditional algorithm.
    pub const FIRST_PLACE_POINTS: i64 = 100;

    /// Points deducted per place under the traditional algorithm.
    pub const STEP: i64 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_constants() {
        assert_eq!(encoding::MS_PER_SECOND, 1000);
        assert_eq!(encoding::MAX_REPS_PER_ROUND, 99_999);
        assert_eq!((225.0 * encoding::GRAMS_PER_POUND).round() as i64, 102_058);
    }

    #[test]
    fn test_legacy_constants() {
        assert_eq!(legacy::LEGACY_ROUNDS_MULTIPLIER, 1000);
        assert_eq!(legacy::FRACTIONAL_REPS_SCALE, 100);
    }

    #[test]
    fn test_default_points() {
        assert_eq!(defaults::FIRST_PLACE_POINTS, 100);
        assert_eq!(defaults::STEP, 5);
    }
}
