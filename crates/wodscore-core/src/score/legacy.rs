//! Conversion between the legacy storage encoding and the canonical one.
//!
//! Legacy values were stored in entry units: seconds, `rounds * 1000 + reps`,
//! pounds, meters/feet and plain counts. Time and rounds-reps convert back
//! losslessly; load and distance come back rounded to two decimals.

use tracing::trace;

use crate::config::{encoding, legacy};
use crate::error::{Error, Result};
use crate::scheme::Scheme;

/// Legacy value to canonical integer.
pub fn convert_legacy_to_new(value: f64, scheme: Scheme) -> Result<i64> {
    check_legacy(value, scheme)?;

    let converted = match scheme {
        Scheme::Time | Scheme::TimeWithCap => {
            (value * encoding::MS_PER_SECOND as f64).round() as i64
        }
        Scheme::RoundsReps => {
            let packed = whole(value, scheme)?;
            let rounds = packed / legacy::LEGACY_ROUNDS_MULTIPLIER;
            let reps = packed % legacy::LEGACY_ROUNDS_MULTIPLIER;
            rounds
                .checked_mul(encoding::ROUNDS_MULTIPLIER)
                .and_then(|v| v.checked_add(reps))
                .ok_or_else(|| Error::validation(scheme, "value", "out of range"))?
        }
        Scheme::Load => (value * encoding::GRAMS_PER_POUND).round() as i64,
        Scheme::Meters => (value * encoding::MM_PER_METER).round() as i64,
        Scheme::Feet => (value * encoding::MM_PER_FOOT).round() as i64,
        Scheme::Reps | Scheme::Calories | Scheme::Points => whole(value, scheme)?,
        Scheme::PassFail => match whole(value, scheme)? {
            flag @ (0 | 1) => flag,
            other => {
                return Err(Error::validation(
                    scheme,
                    "value",
                    format!("pass-fail must be 0 or 1, got {}", other),
                ));
            }
        },
    };

    trace!("legacy {} {} -> {}", scheme, value, converted);
    Ok(converted)
}

/// Canonical integer back to the legacy encoding.
pub fn convert_new_to_legacy(value: i64, scheme: Scheme) -> Result<f64> {
    if value < 0 {
        return Err(Error::validation(scheme, "value", "must not be negative"));
    }

    let converted = match scheme {
        Scheme::Time | Scheme::TimeWithCap => value as f64 / encoding::MS_PER_SECOND as f64,
        Scheme::RoundsReps => {
            let rounds = value / encoding::ROUNDS_MULTIPLIER;
            let reps = value % encoding::ROUNDS_MULTIPLIER;
            if reps >= legacy::LEGACY_ROUNDS_MULTIPLIER {
                return Err(Error::validation(
                    scheme,
                    "reps",
                    format!(
                        "{} reps cannot be stored in the legacy encoding (max {})",
                        reps,
                        legacy::LEGACY_ROUNDS_MULTIPLIER - 1
                    ),
                ));
            }
            (rounds * legacy::LEGACY_ROUNDS_MULTIPLIER + reps) as f64
        }
        Scheme::Load => round_decimals(value as f64 / encoding::GRAMS_PER_POUND),
        Scheme::Meters => round_decimals(value as f64 / encoding::MM_PER_METER),
        Scheme::Feet => round_decimals(value as f64 / encoding::MM_PER_FOOT),
        Scheme::Reps | Scheme::Calories | Scheme::Points | Scheme::PassFail => value as f64,
    };

    trace!("canonical {} {} -> legacy {}", scheme, value, converted);
    Ok(converted)
}

/// Legacy "rounds.reps" decimal (`5.12` = 5 rounds + 12 reps, `0.5` = 50 reps)
/// to canonical rounds-reps.
pub fn convert_legacy_fractional_rounds_reps(value: f64) -> Result<i64> {
    let scheme = Scheme::RoundsReps;
    check_legacy(value, scheme)?;

    let hundredths = (value * legacy::FRACTIONAL_REPS_SCALE as f64).round() as i64;
    let rounds = hundredths / legacy::FRACTIONAL_REPS_SCALE;
    let reps = hundredths % legacy::FRACTIONAL_REPS_SCALE;
    let converted = rounds * encoding::ROUNDS_MULTIPLIER + reps;

    trace!("legacy fractional {} -> {}", value, converted);
    Ok(converted)
}

/// Canonical rounds-reps to the legacy "rounds.reps" decimal.
pub fn convert_new_to_fractional_rounds_reps(value: i64) -> Result<f64> {
    let scheme = Scheme::RoundsReps;
    if value < 0 {
        return Err(Error::validation(scheme, "value", "must not be negative"));
    }

    let rounds = value / encoding::ROUNDS_MULTIPLIER;
    let reps = value % encoding::ROUNDS_MULTIPLIER;
    if reps >= legacy::FRACTIONAL_REPS_SCALE {
        return Err(Error::validation(
            scheme,
            "reps",
            format!("{} reps cannot be written as rounds.reps", reps),
        ));
    }

    let hundredths = rounds * legacy::FRACTIONAL_REPS_SCALE + reps;
    Ok(hundredths as f64 / legacy::FRACTIONAL_REPS_SCALE as f64)
}

fn check_legacy(value: f64, scheme: Scheme) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::validation(scheme, "value", "must be a finite number"));
    }
    if value < 0.0 {
        return Err(Error::validation(scheme, "value", "must not be negative"));
    }
    if value >= i64::MAX as f64 / encoding::ROUNDS_MULTIPLIER as f64 {
        return Err(Error::validation(scheme, "value", "out of range"));
    }
    Ok(())
}

fn whole(value: f64, scheme: Scheme) -> Result<i64> {
    if value.fract() != 0.0 {
        return Err(Error::validation(scheme, "value", "must be a whole number"));
    }
    Ok(value as i64)
}

fn round_decimals(value: f64) -> f64 {
    let factor = 10f64.powi(legacy::UNIT_DECIMALS);
    (value * factor).round() / factor
}
