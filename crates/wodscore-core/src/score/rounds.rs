use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scheme::{Scheme, SchemeRegistry, ScoreType};

use super::{DecodeOptions, ParsedScore, ScoreCodec};

/// One stored round (set) of a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRound {
    /// 1-indexed, unique within the parent score.
    pub round_number: i32,
    pub value: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A round ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSet {
    pub round_number: i32,
    pub value: i64,
    pub display_value: String,
    pub notes: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledRounds {
    pub sets: Vec<FormattedSet>,
    pub total_rounds: usize,
}

/// Order a score's rounds by round number and format each with the parent scheme.
///
/// Gaps in numbering are allowed; numbers below 1 and duplicates are rejected.
pub fn assemble_rounds(
    codec: &ScoreCodec<'_>,
    rows: &[ScoreRound],
    scheme: Scheme,
    options: DecodeOptions,
) -> Result<AssembledRounds> {
    let mut seen = HashSet::new();
    for row in rows {
        if row.round_number < 1 {
            return Err(Error::validation(
                scheme,
                "round_number",
                format!("round number {} is not 1-indexed", row.round_number),
            ));
        }
        if !seen.insert(row.round_number) {
            return Err(Error::validation(
                scheme,
                "round_number",
                format!("duplicate round number {}", row.round_number),
            ));
        }
    }

    let mut ordered: Vec<&ScoreRound> = rows.iter().collect();
    ordered.sort_by_key(|row| row.round_number);

    let sets = ordered
        .into_iter()
        .map(|row| {
            Ok(FormattedSet {
                round_number: row.round_number,
                value: row.value,
                display_value: codec.decode(row.value, scheme, options)?,
                notes: row.notes.clone(),
                status: row.status.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AssembledRounds {
        total_rounds: sets.len(),
        sets,
    })
}

/// Display strings of a score's rounds, in round order.
pub fn format_rounds(
    codec: &ScoreCodec<'_>,
    rows: &[ScoreRound],
    scheme: Scheme,
    options: DecodeOptions,
) -> Result<Vec<String>> {
    let assembled = assemble_rounds(codec, rows, scheme, options)?;
    Ok(assembled
        .sets
        .into_iter()
        .map(|set| set.display_value)
        .collect())
}

/// Aggregation the registry configures for multi-round scores of `scheme`.
pub fn default_score_type(registry: &SchemeRegistry, scheme: Scheme) -> Result<ScoreType> {
    Ok(registry.spec(scheme)?.default_score_type)
}

/// Collapse per-round values into one score. `None` for no rounds.
pub fn aggregate_values(values: &[i64], score_type: ScoreType) -> Option<i64> {
    let first = *values.first()?;
    let value = match score_type {
        ScoreType::Min => values.iter().copied().min().unwrap_or(first),
        ScoreType::Max => values.iter().copied().max().unwrap_or(first),
        ScoreType::Sum => values.iter().copied().fold(0i64, i64::saturating_add),
        ScoreType::Average => {
            let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
            let count = values.len() as i128;
            let quotient = sum / count;
            let remainder = sum % count;
            // Half away from zero.
            let rounded = if remainder.abs() * 2 >= count {
                quotient + sum.signum()
            } else {
                quotient
            };
            rounded as i64
        }
        ScoreType::First => first,
        ScoreType::Last => *values.last().unwrap_or(&first),
    };
    Some(value)
}

/// A raw round as entered, optionally in a different scheme than its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    pub raw: String,
    #[serde(default)]
    pub scheme_override: Option<Scheme>,
}

impl RoundInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            scheme_override: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRounds {
    pub rounds: Vec<i64>,
    pub aggregated: Option<i64>,
}

/// Parse each entered round and aggregate the valid ones.
///
/// Rounds that fail to parse or carry only a status are skipped. An
/// unregistered scheme still fails the whole call.
pub fn encode_rounds(
    codec: &ScoreCodec<'_>,
    inputs: &[RoundInput],
    scheme: Scheme,
    score_type: ScoreType,
) -> Result<EncodedRounds> {
    let mut rounds = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let round_scheme = input.scheme_override.unwrap_or(scheme);
        match codec.parse(&input.raw, round_scheme) {
            Ok(ParsedScore::Scored(value)) => rounds.push(value),
            Ok(ParsedScore::Status(status)) => {
                debug!("Skipping round {}: status {}", index + 1, status);
            }
            Err(e) if e.is_validation() => {
                debug!("Skipping round {}: {}", index + 1, e);
            }
            Err(e) => return Err(e),
        }
    }

    let aggregated = aggregate_values(&rounds, score_type);
    Ok(EncodedRounds { rounds, aggregated })
}
