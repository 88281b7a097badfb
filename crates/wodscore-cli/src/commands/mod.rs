//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod decode;
pub mod encode;
pub mod legacy;
pub mod points;
pub mod rank;

use wodscore_core::WeightUnit;

fn weight_unit(kg: bool) -> WeightUnit {
    if kg { WeightUnit::Kg } else { WeightUnit::Lbs }
}
