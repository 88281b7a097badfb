//! Encode command.

use anyhow::Result;
use wodscore_core::{ParsedScore, SchemeRegistry, ScoreCodec};

use super::weight_unit;

/// Print the canonical value of an entered score, or its status.
pub fn run(raw: &str, scheme_id: &str, kg: bool) -> Result<()> {
    let registry = SchemeRegistry::standard();
    let scheme = registry.resolve(scheme_id)?;
    let codec = ScoreCodec::new(&registry).with_weight_unit(weight_unit(kg));

    match codec.parse(raw, scheme)? {
        ParsedScore::Scored(value) => println!("{}", value),
        ParsedScore::Status(status) => println!("{}", status),
    }
    Ok(())
}
