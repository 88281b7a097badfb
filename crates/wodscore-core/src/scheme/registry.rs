use crate::config::encoding;
use crate::error::{Error, Result};

use super::{Scheme, ScoreType, SortDirection, Unit};

/// Registry entry describing how one scheme is encoded, compared, and shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeSpec {
    pub scheme: Scheme,
    pub unit: Unit,
    /// Factor from the entry unit (seconds, pounds, meters, feet) to the canonical unit.
    pub multiplier: f64,
    pub direction: SortDirection,
    /// Suffix appended when a decoded value is shown with its unit.
    pub display_suffix: Option<&'static str>,
    pub default_score_type: ScoreType,
}

const fn spec(
    scheme: Scheme,
    unit: Unit,
    multiplier: f64,
    direction: SortDirection,
    display_suffix: Option<&'static str>,
    default_score_type: ScoreType,
) -> SchemeSpec {
    SchemeSpec {
        scheme,
        unit,
        multiplier,
        direction,
        display_suffix,
        default_score_type,
    }
}

/// The built-in scheme catalog, indexed by `Scheme as usize`.
pub const STANDARD_SCHEMES: [SchemeSpec; 10] = [
    spec(
        Scheme::Time,
        Unit::Milliseconds,
        encoding::MS_PER_SECOND as f64,
        SortDirection::Ascending,
        None,
        ScoreType::Min,
    ),
    spec(
        Scheme::TimeWithCap,
        Unit::Milliseconds,
        encoding::MS_PER_SECOND as f64,
        SortDirection::Ascending,
        None,
        ScoreType::Min,
    ),
    spec(
        Scheme::RoundsReps,
        Unit::RoundsReps,
        encoding::ROUNDS_MULTIPLIER as f64,
        SortDirection::Descending,
        None,
        ScoreType::Max,
    ),
    spec(
        Scheme::Load,
        Unit::Grams,
        encoding::GRAMS_PER_POUND,
        SortDirection::Descending,
        Some("lbs"),
        ScoreType::Max,
    ),
    spec(
        Scheme::Reps,
        Unit::Count,
        1.0,
        SortDirection::Descending,
        Some("reps"),
        ScoreType::Max,
    ),
    spec(
        Scheme::Calories,
        Unit::Count,
        1.0,
        SortDirection::Descending,
        Some("cal"),
        ScoreType::Max,
    ),
    spec(
        Scheme::Meters,
        Unit::Millimeters,
        encoding::MM_PER_METER,
        SortDirection::Descending,
        Some("m"),
        ScoreType::Max,
    ),
    spec(
        Scheme::Feet,
        Unit::Millimeters,
        encoding::MM_PER_FOOT,
        SortDirection::Descending,
        Some("ft"),
        ScoreType::Max,
    ),
    spec(
        Scheme::Points,
        Unit::Count,
        1.0,
        SortDirection::Descending,
        Some("pts"),
        ScoreType::Max,
    ),
    spec(
        Scheme::PassFail,
        Unit::Boolean,
        1.0,
        SortDirection::Boolean,
        None,
        ScoreType::First,
    ),
];

/// Immutable catalog of supported schemes.
///
/// Passed explicitly to the codec and the ranker; there is no global instance.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    specs: Vec<SchemeSpec>,
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl SchemeRegistry {
    /// Registry holding the full built-in catalog.
    pub fn standard() -> Self {
        Self {
            specs: STANDARD_SCHEMES.to_vec(),
        }
    }

    /// Registry restricted to the given entries (e.g. a competition that only
    /// offers some schemes). Later duplicates replace earlier ones.
    pub fn with_specs(specs: impl IntoIterator<Item = SchemeSpec>) -> Self {
        let mut registry = Self { specs: Vec::new() };
        for entry in specs {
            registry.specs.retain(|s| s.scheme != entry.scheme);
            registry.specs.push(entry);
        }
        registry
    }

    pub fn spec(&self, scheme: Scheme) -> Result<&SchemeSpec> {
        self.specs
            .iter()
            .find(|s| s.scheme == scheme)
            .ok_or_else(|| Error::Configuration(format!("scheme not registered: {}", scheme)))
    }

    /// Resolve a scheme id coming from stored configuration.
    pub fn resolve(&self, id: &str) -> Result<Scheme> {
        let scheme: Scheme = id
            .trim()
            .parse()
            .map_err(|_| Error::Configuration(format!("unknown scheme: {}", id)))?;
        self.spec(scheme)?;
        Ok(scheme)
    }

    pub fn direction(&self, scheme: Scheme) -> Result<SortDirection> {
        Ok(self.spec(scheme)?.direction)
    }

    pub fn contains(&self, scheme: Scheme) -> bool {
        self.specs.iter().any(|s| s.scheme == scheme)
    }

    pub fn schemes(&self) -> impl Iterator<Item = Scheme> + '_ {
        self.specs.iter().map(|s| s.scheme)
    }
}
