//! Legacy conversion command.

use anyhow::{Result, bail};
use wodscore_core::{
    Scheme, SchemeRegistry, convert_legacy_fractional_rounds_reps, convert_legacy_to_new,
    convert_new_to_fractional_rounds_reps, convert_new_to_legacy,
};

/// Convert one value between the legacy and canonical encodings.
pub fn run(value: f64, scheme_id: &str, reverse: bool, fractional: bool) -> Result<()> {
    let scheme = SchemeRegistry::standard().resolve(scheme_id)?;
    if fractional && scheme != Scheme::RoundsReps {
        bail!("--fractional only applies to rounds-reps");
    }

    if reverse {
        if value.fract() != 0.0 {
            bail!("canonical values are whole numbers, got {}", value);
        }
        let canonical = value as i64;
        let legacy = if fractional {
            convert_new_to_fractional_rounds_reps(canonical)?
        } else {
            convert_new_to_legacy(canonical, scheme)?
        };
        println!("{}", legacy);
    } else {
        let canonical = if fractional {
            convert_legacy_fractional_rounds_reps(value)?
        } else {
            convert_legacy_to_new(value, scheme)?
        };
        println!("{}", canonical);
    }
    Ok(())
}
