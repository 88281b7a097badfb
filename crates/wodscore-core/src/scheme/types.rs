use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Measurement type of a workout result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum Scheme {
    Time = 0,
    TimeWithCap = 1,
    RoundsReps = 2,
    Load = 3,
    Reps = 4,
    Calories = 5,
    Meters = 6,
    Feet = 7,
    Points = 8,
    PassFail = 9,
}

impl Scheme {
    pub fn id(&self) -> &'static str {
        self.into()
    }

    pub fn is_time(&self) -> bool {
        matches!(self, Self::Time | Self::TimeWithCap)
    }

    pub fn is_distance(&self) -> bool {
        matches!(self, Self::Meters | Self::Feet)
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Self::Reps | Self::Calories | Self::Points)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Which end of the canonical scale wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    /// Lower is better.
    Ascending,
    /// Higher is better.
    Descending,
    /// Pass (non-zero) beats fail (zero).
    Boolean,
}

/// Canonical storage unit of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Unit {
    Milliseconds,
    /// `rounds * 100000 + reps`
    RoundsReps,
    Grams,
    Millimeters,
    Count,
    Boolean,
}

/// Unit a load is entered and displayed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    pub fn suffix(&self) -> &'static str {
        self.into()
    }
}

/// How several per-round values collapse into one score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScoreType {
    Min,
    Max,
    Sum,
    Average,
    First,
    Last,
}
