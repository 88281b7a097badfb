//! Canonical score encoding and display formatting.
//!
//! Encoding turns a human-entered value into the scheme's canonical integer
//! (milliseconds, `rounds * 100000 + reps`, grams, millimeters, counts, 0/1).
//! Decoding turns a canonical integer back into a display string and never
//! fails for a registered scheme.

use crate::config::encoding;
use crate::error::{Error, Result};
use crate::scheme::{Scheme, SchemeRegistry, SchemeSpec, Unit, WeightUnit};

use super::ScoreStatus;

/// A raw value as entered by an athlete or judge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawScore {
    /// Seconds for time, whole rounds for rounds-reps, weight unit for load,
    /// meters/feet for distance, a count, or 0/1 for pass-fail.
    Number(f64),
    RoundsReps { rounds: i64, reps: i64 },
    PassFail(bool),
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for RawScore {
    fn from(value: bool) -> Self {
        Self::PassFail(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Append the unit suffix ("lbs", "m", "reps", ...) where the scheme has one.
    pub include_unit: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { include_unit: true }
    }
}

impl DecodeOptions {
    pub fn bare() -> Self {
        Self {
            include_unit: false,
        }
    }
}

/// Encoder/decoder bound to a scheme registry.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCodec<'a> {
    registry: &'a SchemeRegistry,
    weight_unit: WeightUnit,
}

impl<'a> ScoreCodec<'a> {
    pub fn new(registry: &'a SchemeRegistry) -> Self {
        Self {
            registry,
            weight_unit: WeightUnit::default(),
        }
    }

    /// Unit that raw load values are entered in and decoded loads are shown in.
    pub fn with_weight_unit(mut self, weight_unit: WeightUnit) -> Self {
        self.weight_unit = weight_unit;
        self
    }

    pub fn registry(&self) -> &'a SchemeRegistry {
        self.registry
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// Encode a raw value into the canonical integer for `scheme`.
    pub fn encode(&self, raw: impl Into<RawScore>, scheme: Scheme) -> Result<i64> {
        let spec = self.registry.spec(scheme)?;
        match raw.into() {
            RawScore::Number(value) => self.encode_number(value, spec),
            RawScore::RoundsReps { rounds, reps } => {
                if spec.unit != Unit::RoundsReps {
                    return Err(Error::validation(
                        scheme,
                        "value",
                        "rounds+reps is only valid for rounds-reps",
                    ));
                }
                encode_rounds_reps(rounds, reps, spec)
            }
            RawScore::PassFail(passed) => {
                if spec.unit != Unit::Boolean {
                    return Err(Error::validation(
                        scheme,
                        "value",
                        "pass/fail is only valid for pass-fail",
                    ));
                }
                Ok(i64::from(passed))
            }
        }
    }

    fn encode_number(&self, value: f64, spec: &SchemeSpec) -> Result<i64> {
        let scheme = spec.scheme;
        if !value.is_finite() {
            return Err(Error::validation(scheme, "value", "must be a finite number"));
        }
        if value < 0.0 {
            return Err(Error::validation(scheme, "value", "must not be negative"));
        }

        match spec.unit {
            Unit::Milliseconds | Unit::Millimeters => scale(value, spec.multiplier, scheme),
            Unit::Grams => scale(value, self.grams_per_unit(spec), scheme),
            Unit::RoundsReps => {
                let rounds = whole(value, scheme, "rounds")?;
                encode_rounds_reps(rounds, 0, spec)
            }
            Unit::Count => whole(value, scheme, "value"),
            Unit::Boolean => match whole(value, scheme, "value")? {
                v @ (0 | 1) => Ok(v),
                _ => Err(Error::validation(scheme, "value", "must be 0 (fail) or 1 (pass)")),
            },
        }
    }

    fn grams_per_unit(&self, spec: &SchemeSpec) -> f64 {
        match self.weight_unit {
            WeightUnit::Lbs => spec.multiplier,
            WeightUnit::Kg => encoding::GRAMS_PER_KILOGRAM,
        }
    }

    /// Format a canonical value for display.
    ///
    /// Only fails when `scheme` is missing from the registry.
    pub fn decode(&self, value: i64, scheme: Scheme, options: DecodeOptions) -> Result<String> {
        let spec = self.registry.spec(scheme)?;
        Ok(self.format(value, spec, options))
    }

    /// Decode with a scheme id taken from stored configuration.
    pub fn decode_id(&self, value: i64, scheme_id: &str, options: DecodeOptions) -> Result<String> {
        let scheme = self.registry.resolve(scheme_id)?;
        self.decode(value, scheme, options)
    }

    fn format(&self, value: i64, spec: &SchemeSpec, options: DecodeOptions) -> String {
        match spec.unit {
            Unit::Milliseconds => format_duration_ms(value),
            Unit::RoundsReps => format_rounds_reps(value, spec.multiplier as i64),
            Unit::Grams => {
                let amount = value as f64 / self.grams_per_unit(spec);
                let suffix = match self.weight_unit {
                    WeightUnit::Lbs => spec.display_suffix.unwrap_or("lbs"),
                    WeightUnit::Kg => WeightUnit::Kg.suffix(),
                };
                with_suffix(format_decimal(amount), suffix, " ", options)
            }
            Unit::Millimeters => {
                let amount = value as f64 / spec.multiplier;
                match spec.display_suffix {
                    Some(suffix) => with_suffix(format_decimal(amount), suffix, "", options),
                    None => format_decimal(amount),
                }
            }
            Unit::Count => match spec.display_suffix {
                Some(suffix) => with_suffix(value.to_string(), suffix, " ", options),
                None => value.to_string(),
            },
            Unit::Boolean => {
                if value != 0 {
                    "Pass".to_string()
                } else {
                    "Fail".to_string()
                }
            }
        }
    }

    /// Display string for a result that may carry a non-scored status.
    ///
    /// `secondary` is the rep count reached at the cap for `time-with-cap`.
    pub fn display(
        &self,
        value: Option<i64>,
        status: ScoreStatus,
        secondary: Option<i64>,
        scheme: Scheme,
    ) -> Result<String> {
        let spec = self.registry.spec(scheme)?;
        let options = DecodeOptions::default();
        let text = match status {
            ScoreStatus::Cap if scheme == Scheme::TimeWithCap => match secondary {
                Some(reps) => format!("CAP ({} reps)", reps),
                None => ScoreStatus::Cap.label().to_string(),
            },
            ScoreStatus::Scored | ScoreStatus::Cap => match value {
                Some(v) => self.format(v, spec, options),
                None => status.label().to_string(),
            },
            _ => status.label().to_string(),
        };
        Ok(text)
    }

    /// Primary value followed by its tiebreak, e.g. `12:34 (TB: 150)`.
    pub fn decode_with_tiebreak(
        &self,
        value: i64,
        scheme: Scheme,
        tiebreak: Option<(i64, Scheme)>,
    ) -> Result<String> {
        let primary = self.decode(value, scheme, DecodeOptions::bare())?;
        match tiebreak {
            Some((tb_value, tb_scheme)) => {
                let tb = self.decode(tb_value, tb_scheme, DecodeOptions::bare())?;
                Ok(format!("{} (TB: {})", primary, tb))
            }
            None => Ok(primary),
        }
    }
}

fn scale(value: f64, factor: f64, scheme: Scheme) -> Result<i64> {
    let scaled = (value * factor).round();
    if scaled >= i64::MAX as f64 {
        return Err(Error::validation(scheme, "value", "out of range"));
    }
    Ok(scaled as i64)
}

fn whole(value: f64, scheme: Scheme, field: &'static str) -> Result<i64> {
    if value.fract() != 0.0 {
        return Err(Error::validation(scheme, field, "must be a whole number"));
    }
    if value >= i64::MAX as f64 {
        return Err(Error::validation(scheme, field, "out of range"));
    }
    Ok(value as i64)
}

fn encode_rounds_reps(rounds: i64, reps: i64, spec: &SchemeSpec) -> Result<i64> {
    let scheme = spec.scheme;
    let multiplier = spec.multiplier as i64;
    if rounds < 0 {
        return Err(Error::validation(scheme, "rounds", "must not be negative"));
    }
    if reps < 0 {
        return Err(Error::validation(scheme, "reps", "must not be negative"));
    }
    if reps >= multiplier {
        return Err(Error::validation(
            scheme,
            "reps",
            format!("must be at most {}", multiplier - 1),
        ));
    }
    rounds
        .checked_mul(multiplier)
        .and_then(|v| v.checked_add(reps))
        .ok_or_else(|| Error::validation(scheme, "rounds", "out of range"))
}

/// `m:ss` below one hour, `h:mm:ss` above, with `.mmm` when milliseconds are present.
pub fn format_duration_ms(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let ms = value.unsigned_abs();
    let millis = ms % 1000;
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut text = if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        format!("{}{}:{:02}", sign, minutes, seconds)
    };
    if millis > 0 {
        text.push_str(&format!(".{:03}", millis));
    }
    text
}

fn format_rounds_reps(value: i64, multiplier: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let multiplier = multiplier.unsigned_abs().max(1);
    format!("{}{}+{}", sign, abs / multiplier, abs % multiplier)
}

/// Up to two decimals, trailing zeros dropped.
fn format_decimal(amount: f64) -> String {
    let text = format!("{:.2}", amount);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn with_suffix(number: String, suffix: &str, separator: &str, options: DecodeOptions) -> String {
    if options.include_unit {
        format!("{}{}{}", number, separator, suffix)
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(registry: &SchemeRegistry) -> ScoreCodec<'_> {
        ScoreCodec::new(registry)
    }

    #[test]
    fn test_encode_time() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        assert_eq!(codec.encode(754.0, Scheme::Time).unwrap(), 754_000);
        assert_eq!(codec.encode(83.456, Scheme::TimeWithCap).unwrap(), 83_456);
        assert_eq!(codec.encode(0.0, Scheme::Time).unwrap(), 0);
    }

    #[test]
    fn test_encode_rounds_reps() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let raw = RawScore::RoundsReps { rounds: 5, reps: 12 };
        assert_eq!(codec.encode(raw, Scheme::RoundsReps).unwrap(), 500_012);
        assert_eq!(codec.encode(7.0, Scheme::RoundsReps).unwrap(), 700_000);

        let too_many = RawScore::RoundsReps {
            rounds: 1,
            reps: 100_000,
        };
        let err = codec.encode(too_many, Scheme::RoundsReps).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "reps", .. }));

        let err = codec.encode(5.5, Scheme::RoundsReps).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "rounds", .. }));
    }

    #[test]
    fn test_encode_load() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        assert_eq!(codec.encode(225.0, Scheme::Load).unwrap(), 102_058);
        assert_eq!(codec.encode(100.0, Scheme::Load).unwrap(), 45_359);

        let kg = codec.with_weight_unit(WeightUnit::Kg);
        assert_eq!(kg.encode(102.5, Scheme::Load).unwrap(), 102_500);
    }

    #[test]
    fn test_encode_distance() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        assert_eq!(codec.encode(400.0, Scheme::Meters).unwrap(), 400_000);
        assert_eq!(codec.encode(100.0, Scheme::Feet).unwrap(), 30_480);
        assert_eq!(codec.encode(1.5, Scheme::Feet).unwrap(), 457);
    }

    #[test]
    fn test_encode_counts_and_pass_fail() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        assert_eq!(codec.encode(150.0, Scheme::Reps).unwrap(), 150);
        assert_eq!(codec.encode(42.0, Scheme::Calories).unwrap(), 42);
        assert_eq!(codec.encode(true, Scheme::PassFail).unwrap(), 1);
        assert_eq!(codec.encode(false, Scheme::PassFail).unwrap(), 0);
        assert_eq!(codec.encode(1.0, Scheme::PassFail).unwrap(), 1);
        assert!(codec.encode(2.0, Scheme::PassFail).is_err());
        assert!(codec.encode(10.5, Scheme::Reps).is_err());
        assert!(codec.encode(true, Scheme::Reps).is_err());
    }

    #[test]
    fn test_encode_rejects_invalid_numbers() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        for bad in [f64::NAN, f64::INFINITY, -1.0] {
            let err = codec.encode(bad, Scheme::Time).unwrap_err();
            match err {
                Error::Validation { scheme, field, .. } => {
                    assert_eq!(scheme, Scheme::Time);
                    assert_eq!(field, "value");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_encode_unregistered_scheme() {
        let registry = SchemeRegistry::with_specs([]);
        let err = codec(&registry).encode(1.0, Scheme::Reps).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_decode_time() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let opts = DecodeOptions::default();
        assert_eq!(codec.decode(754_000, Scheme::Time, opts).unwrap(), "12:34");
        assert_eq!(codec.decode(510_000, Scheme::Time, opts).unwrap(), "8:30");
        assert_eq!(codec.decode(510_567, Scheme::Time, opts).unwrap(), "8:30.567");
        assert_eq!(codec.decode(0, Scheme::Time, opts).unwrap(), "0:00");
        assert_eq!(codec.decode(3_661_000, Scheme::Time, opts).unwrap(), "1:01:01");
        assert_eq!(codec.decode(3_600_000, Scheme::TimeWithCap, opts).unwrap(), "1:00:00");
    }

    #[test]
    fn test_decode_other_schemes() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let opts = DecodeOptions::default();
        assert_eq!(codec.decode(500_012, Scheme::RoundsReps, opts).unwrap(), "5+12");
        assert_eq!(codec.decode(102_058, Scheme::Load, opts).unwrap(), "225 lbs");
        assert_eq!(codec.decode(46_493, Scheme::Load, opts).unwrap(), "102.5 lbs");
        assert_eq!(codec.decode(1_000_000, Scheme::Meters, opts).unwrap(), "1000m");
        assert_eq!(codec.decode(30_480, Scheme::Feet, opts).unwrap(), "100ft");
        assert_eq!(codec.decode(150, Scheme::Reps, opts).unwrap(), "150 reps");
        assert_eq!(codec.decode(1, Scheme::PassFail, opts).unwrap(), "Pass");
        assert_eq!(codec.decode(0, Scheme::PassFail, opts).unwrap(), "Fail");
    }

    #[test]
    fn test_decode_without_unit() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let opts = DecodeOptions::bare();
        assert_eq!(codec.decode(102_058, Scheme::Load, opts).unwrap(), "225");
        assert_eq!(codec.decode(400_000, Scheme::Meters, opts).unwrap(), "400");
        assert_eq!(codec.decode(85, Scheme::Points, opts).unwrap(), "85");
    }

    #[test]
    fn test_decode_kg() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry).with_weight_unit(WeightUnit::Kg);
        let text = codec
            .decode(102_500, Scheme::Load, DecodeOptions::default())
            .unwrap();
        assert_eq!(text, "102.5 kg");
    }

    #[test]
    fn test_decode_never_fails_for_odd_values() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let opts = DecodeOptions::default();
        assert_eq!(codec.decode(-1_500, Scheme::Time, opts).unwrap(), "-0:01.500");
        assert_eq!(codec.decode(-500_012, Scheme::RoundsReps, opts).unwrap(), "-5+12");
        assert_eq!(codec.decode(7, Scheme::PassFail, opts).unwrap(), "Pass");
        assert!(codec.decode(i64::MAX, Scheme::Time, opts).is_ok());
        assert!(codec.decode(i64::MIN, Scheme::Load, opts).is_ok());
    }

    #[test]
    fn test_decode_id_unknown_scheme() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let err = codec
            .decode_id(1, "emom", DecodeOptions::default())
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            codec.decode_id(90_000, "time", DecodeOptions::default()).unwrap(),
            "1:30"
        );
    }

    #[test]
    fn test_display_with_status() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let capped = codec
            .display(None, ScoreStatus::Cap, Some(142), Scheme::TimeWithCap)
            .unwrap();
        assert_eq!(capped, "CAP (142 reps)");
        let dnf = codec
            .display(Some(1), ScoreStatus::Dnf, None, Scheme::Time)
            .unwrap();
        assert_eq!(dnf, "DNF");
        let scored = codec
            .display(Some(754_000), ScoreStatus::Scored, None, Scheme::TimeWithCap)
            .unwrap();
        assert_eq!(scored, "12:34");
    }

    #[test]
    fn test_decode_with_tiebreak() {
        let registry = SchemeRegistry::standard();
        let codec = codec(&registry);
        let text = codec
            .decode_with_tiebreak(754_000, Scheme::Time, Some((150, Scheme::Reps)))
            .unwrap();
        assert_eq!(text, "12:34 (TB: 150)");
        let text = codec
            .decode_with_tiebreak(500_012, Scheme::RoundsReps, Some((510_567, Scheme::Time)))
            .unwrap();
        assert_eq!(text, "5+12 (TB: 8:30.567)");
    }
}
