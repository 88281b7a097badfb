use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::scheme::{Scheme, SchemeRegistry, SortDirection};
use crate::score::ScoreStatus;

/// Secondary score used only when two primary values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tiebreak {
    pub scheme: Scheme,
    pub value: i64,
}

impl Tiebreak {
    pub fn new(scheme: Scheme, value: i64) -> Self {
        Self { scheme, value }
    }
}

/// Compare two canonical values of one scheme. `Less` means `a` is better.
pub fn compare_values(a: i64, b: i64, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => a.cmp(&b),
        SortDirection::Descending => b.cmp(&a),
        SortDirection::Boolean => (b != 0).cmp(&(a != 0)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedTiebreak {
    scheme: Scheme,
    value: i64,
    direction: SortDirection,
}

/// A score with every registry lookup already done, so comparing is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparableScore {
    group: u8,
    key: i64,
    direction: SortDirection,
    tiebreak: Option<ResolvedTiebreak>,
}

impl ComparableScore {
    pub fn status_group(&self) -> u8 {
        self.group
    }
}

/// Total order over results: status group, then primary value in the
/// scheme's direction, then tiebreak in the tiebreak scheme's direction.
pub fn compare_scores(a: &ComparableScore, b: &ComparableScore) -> Ordering {
    a.group
        .cmp(&b.group)
        .then_with(|| compare_values(a.key, b.key, a.direction))
        .then_with(|| compare_tiebreaks(a.tiebreak, b.tiebreak))
}

/// Total order for sorting.
///
/// Agrees with `compare_scores` whenever that is not `Equal`. Among results
/// `compare_scores` cannot separate, those with a tiebreak come first, grouped
/// by tiebreak scheme.
pub fn sort_scores(a: &ComparableScore, b: &ComparableScore) -> Ordering {
    a.group
        .cmp(&b.group)
        .then_with(|| compare_values(a.key, b.key, a.direction))
        .then_with(|| match (a.tiebreak, b.tiebreak) {
            (Some(x), Some(y)) => (x.scheme as u8)
                .cmp(&(y.scheme as u8))
                .then_with(|| compare_values(x.value, y.value, x.direction)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

fn compare_tiebreaks(a: Option<ResolvedTiebreak>, b: Option<ResolvedTiebreak>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if a.scheme == b.scheme => compare_values(a.value, b.value, a.direction),
        (Some(a), Some(b)) => {
            warn!(
                "Tiebreak schemes differ ({} vs {}); treating as tied",
                a.scheme, b.scheme
            );
            Ordering::Equal
        }
        _ => Ordering::Equal,
    }
}

/// Comparator over scores of one scheme, backed by a registry.
#[derive(Debug, Clone, Copy)]
pub struct TiebreakResolver<'a> {
    registry: &'a SchemeRegistry,
}

impl<'a> TiebreakResolver<'a> {
    pub fn new(registry: &'a SchemeRegistry) -> Self {
        Self { registry }
    }

    /// Compare two primary values, falling back to tiebreaks on an exact tie.
    pub fn compare(
        &self,
        a: (i64, Option<Tiebreak>),
        b: (i64, Option<Tiebreak>),
        scheme: Scheme,
    ) -> Result<Ordering> {
        let a = self.comparable(Some(a.0), ScoreStatus::Scored, None, a.1, scheme)?;
        let b = self.comparable(Some(b.0), ScoreStatus::Scored, None, b.1, scheme)?;
        Ok(compare_scores(&a, &b))
    }

    /// Resolve a result for repeated comparison.
    ///
    /// A capped `time-with-cap` result is keyed on reps reached at the cap
    /// (`secondary`, higher is better, missing counts as zero). Every other
    /// result is keyed on its primary value.
    pub fn comparable(
        &self,
        value: Option<i64>,
        status: ScoreStatus,
        secondary: Option<i64>,
        tiebreak: Option<Tiebreak>,
        scheme: Scheme,
    ) -> Result<ComparableScore> {
        let direction = self.registry.direction(scheme)?;
        let (key, direction) = if status == ScoreStatus::Cap && scheme == Scheme::TimeWithCap {
            (secondary.unwrap_or(0), SortDirection::Descending)
        } else {
            (value.unwrap_or(0), direction)
        };

        let tiebreak = match tiebreak {
            Some(tb) => Some(ResolvedTiebreak {
                scheme: tb.scheme,
                value: tb.value,
                direction: self.registry.direction(tb.scheme)?,
            }),
            None => None,
        };

        Ok(ComparableScore {
            group: status.sort_order(),
            key,
            direction,
            tiebreak,
        })
    }
}
