//! Scheme catalog.
//!
//! This module contains:
//! - `Scheme` - the closed set of workout measurement types
//! - `SortDirection`, `Unit`, `WeightUnit`, `ScoreType` - per-scheme properties
//! - `SchemeRegistry` - immutable lookup table from scheme to encoding rule

mod registry;
mod types;

pub use registry::*;
pub use types::*;
