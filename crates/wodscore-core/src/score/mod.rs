//! Score values.
//!
//! This module contains:
//! - `ScoreCodec` - canonical encoding and display decoding
//! - `ParsedScore` - parsing of entered score strings
//! - `ScoreStatus` - scored / cap / dq / dnf / dns / withdrawn
//! - Legacy encoding conversion
//! - Round (set) assembly and aggregation

mod codec;
mod legacy;
mod parse;
mod rounds;
mod status;

pub use codec::*;
pub use legacy::*;
pub use parse::*;
pub use rounds::*;
pub use status::*;
