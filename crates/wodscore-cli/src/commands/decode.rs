//! Decode command.

use anyhow::Result;
use wodscore_core::{DecodeOptions, SchemeRegistry, ScoreCodec};

use super::weight_unit;

pub fn run(value: i64, scheme_id: &str, unit: bool, kg: bool) -> Result<()> {
    let registry = SchemeRegistry::standard();
    let codec = ScoreCodec::new(&registry).with_weight_unit(weight_unit(kg));
    let options = DecodeOptions { include_unit: unit };
    println!("{}", codec.decode_id(value, scheme_id, options)?);
    Ok(())
}
