//! Parsing of judge-entered score strings.

use crate::error::{Error, Result};
use crate::scheme::{Scheme, SchemeRegistry, Unit, WeightUnit};

use super::{RawScore, ScoreCodec, ScoreStatus};

/// Result of parsing one entered score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedScore {
    /// Canonical value.
    Scored(i64),
    /// A status keyword (`dnf`, `cap`, ...) entered instead of a value.
    Status(ScoreStatus),
}

impl ParsedScore {
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Scored(v) => Some(*v),
            Self::Status(_) => None,
        }
    }

    pub fn status(&self) -> ScoreStatus {
        match self {
            Self::Scored(_) => ScoreStatus::Scored,
            Self::Status(s) => *s,
        }
    }
}

impl ScoreCodec<'_> {
    /// Parse an entered score string into a canonical value or a status.
    pub fn parse(&self, input: &str, scheme: Scheme) -> Result<ParsedScore> {
        let spec = self.registry().spec(scheme)?;
        let text = input.trim().to_ascii_lowercase();
        if text.is_empty() {
            return Err(Error::validation(scheme, "value", "empty score"));
        }

        match text.as_str() {
            "dns" => return Ok(ParsedScore::Status(ScoreStatus::Dns)),
            "dnf" => return Ok(ParsedScore::Status(ScoreStatus::Dnf)),
            "dq" => return Ok(ParsedScore::Status(ScoreStatus::Dq)),
            "cap" | "c" => {
                if scheme.is_time() {
                    return Ok(ParsedScore::Status(ScoreStatus::Cap));
                }
                return Err(Error::validation(
                    scheme,
                    "status",
                    "cap is only valid for timed workouts",
                ));
            }
            _ => {}
        }

        let value = match spec.unit {
            Unit::Milliseconds => parse_time(&text, scheme)?,
            Unit::RoundsReps => {
                let (rounds, reps) = match text.split_once('+') {
                    Some((rounds, reps)) => (
                        parse_integer(rounds, scheme, "rounds")?,
                        parse_integer(reps, scheme, "reps")?,
                    ),
                    None => (parse_integer(&text, scheme, "rounds")?, 0),
                };
                self.encode(RawScore::RoundsReps { rounds, reps }, scheme)?
            }
            Unit::Grams => {
                let (number, unit) = if let Some(n) = text.strip_suffix("lbs") {
                    (n, WeightUnit::Lbs)
                } else if let Some(n) = text.strip_suffix("lb") {
                    (n, WeightUnit::Lbs)
                } else if let Some(n) = text.strip_suffix("kg") {
                    (n, WeightUnit::Kg)
                } else {
                    (text.as_str(), self.weight_unit())
                };
                let amount = parse_number(number, scheme)?;
                self.with_weight_unit(unit).encode(amount, scheme)?
            }
            Unit::Millimeters => {
                let number = strip_distance_suffix(&text, scheme)?;
                self.encode(parse_number(number, scheme)?, scheme)?
            }
            Unit::Count => self.encode(parse_integer(&text, scheme, "value")? as f64, scheme)?,
            Unit::Boolean => match text.as_str() {
                "pass" | "p" | "1" => 1,
                "fail" | "f" | "0" => 0,
                _ => {
                    return Err(Error::validation(
                        scheme,
                        "value",
                        format!("expected pass or fail, got '{}'", input.trim()),
                    ));
                }
            },
        };
        Ok(ParsedScore::Scored(value))
    }

    /// Parse a tiebreak value; statuses are not accepted.
    pub fn parse_tiebreak(&self, input: &str, scheme: Scheme) -> Result<i64> {
        match self.parse(input, scheme)? {
            ParsedScore::Scored(value) => Ok(value),
            ParsedScore::Status(status) => Err(Error::validation(
                scheme,
                "tiebreak",
                format!("status '{}' is not a tiebreak value", status),
            )),
        }
    }
}

/// Parse against the standard scheme catalog.
pub fn parse_score(input: &str, scheme: Scheme, weight_unit: WeightUnit) -> Result<ParsedScore> {
    let registry = SchemeRegistry::standard();
    ScoreCodec::new(&registry)
        .with_weight_unit(weight_unit)
        .parse(input, scheme)
}

/// Parse a tiebreak against the standard scheme catalog.
pub fn parse_tiebreak(input: &str, scheme: Scheme) -> Result<i64> {
    let registry = SchemeRegistry::standard();
    ScoreCodec::new(&registry).parse_tiebreak(input, scheme)
}

/// `ss`, `m:ss` or `h:mm:ss`, each with up to three fractional digits.
fn parse_time(text: &str, scheme: Scheme) -> Result<i64> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    let millis = match fraction {
        None => 0,
        Some(f) if !f.is_empty() && f.len() <= 3 && f.bytes().all(|b| b.is_ascii_digit()) => {
            let padded = format!("{:0<3}", f);
            parse_integer(&padded, scheme, "value")?
        }
        Some(_) => {
            return Err(Error::validation(
                scheme,
                "value",
                "fractional seconds must have 1 to 3 digits",
            ));
        }
    };

    let parts: Vec<&str> = whole.split(':').collect();
    let seconds = match parts.as_slice() {
        [s] => Some(parse_integer(s, scheme, "seconds")?),
        [m, s] => {
            let minutes = parse_integer(m, scheme, "minutes")?;
            let seconds = sexagesimal(s, scheme, "seconds")?;
            minutes.checked_mul(60).and_then(|v| v.checked_add(seconds))
        }
        [h, m, s] => {
            let hours = parse_integer(h, scheme, "hours")?;
            let minutes = sexagesimal(m, scheme, "minutes")?;
            let seconds = sexagesimal(s, scheme, "seconds")?;
            hours
                .checked_mul(60)
                .and_then(|v| v.checked_add(minutes))
                .and_then(|v| v.checked_mul(60))
                .and_then(|v| v.checked_add(seconds))
        }
        _ => {
            return Err(Error::validation(
                scheme,
                "value",
                format!("unrecognized time '{}'", text),
            ));
        }
    };

    seconds
        .and_then(|s| s.checked_mul(1000))
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| Error::validation(scheme, "value", "out of range"))
}

fn sexagesimal(text: &str, scheme: Scheme, field: &'static str) -> Result<i64> {
    let value = parse_integer(text, scheme, field)?;
    if value >= 60 {
        return Err(Error::validation(scheme, field, "must be less than 60"));
    }
    Ok(value)
}

fn parse_integer(text: &str, scheme: Scheme, field: &'static str) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::validation(
            scheme,
            field,
            format!("expected a whole number, got '{}'", text),
        ));
    }
    text.parse()
        .map_err(|_| Error::validation(scheme, field, "out of range"))
}

fn parse_number(text: &str, scheme: Scheme) -> Result<f64> {
    let text = text.trim();
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::validation(scheme, "value", format!("expected a number, got '{}'", text)))
}

fn strip_distance_suffix(text: &str, scheme: Scheme) -> Result<&str> {
    let (number, suffix) = if let Some(n) = text.strip_suffix("ft") {
        (n, Some(Scheme::Feet))
    } else if let Some(n) = text.strip_suffix('m') {
        (n, Some(Scheme::Meters))
    } else {
        (text, None)
    };
    match suffix {
        Some(unit) if unit != scheme => Err(Error::validation(
            scheme,
            "unit",
            format!("unit does not match scheme {}", scheme),
        )),
        _ => Ok(number),
    }
}
