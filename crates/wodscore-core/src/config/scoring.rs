use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};
use crate::points::PointsConfig;
use crate::score::ScoreStatus;

/// Algorithm used to turn event placements into points.
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
pub enum ScoringAlgorithm {
    /// Fixed step deduction from first place; highest total wins.
    #[default]
    Traditional,
    /// Points equal to place; lowest total wins.
    Online,
}

impl ScoringAlgorithm {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Traditional => "Traditional",
            Self::Online => "Online",
        }
    }

    /// Whether a lower points total is the better result.
    pub fn lower_total_wins(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// Method used to break ties in overall standings.
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
pub enum TiebreakMethod {
    /// Most 1st places, then most 2nd places, and so on.
    #[default]
    Countback,
    /// Better placement in a designated event.
    HeadToHead,
    /// Ties remain ties.
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiebreakerConfig {
    pub primary: TiebreakMethod,
    pub secondary: Option<TiebreakMethod>,
    /// Required when either method is `head_to_head`.
    pub head_to_head_event_id: Option<String>,
}

impl TiebreakerConfig {
    pub fn methods(&self) -> impl Iterator<Item = TiebreakMethod> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn validate(&self) -> Result<()> {
        let needs_event = self.methods().any(|m| m == TiebreakMethod::HeadToHead);
        if needs_event && self.head_to_head_event_id.is_none() {
            return Err(Error::Configuration(
                "head_to_head_event_id is required for head_to_head tiebreaker".to_string(),
            ));
        }
        Ok(())
    }
}

/// What happens to an athlete who has no rankable result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatusTreatment {
    /// Placed after every active athlete with the points of that place.
    LastPlace,
    /// Placed after every active athlete with zero points.
    Zero,
    /// Left off the leaderboard and reported as excluded.
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusHandling {
    pub dnf: StatusTreatment,
    pub dns: StatusTreatment,
    pub dq: StatusTreatment,
    pub withdrawn: StatusTreatment,
}

impl Default for StatusHandling {
    fn default() -> Self {
        Self {
            dnf: StatusTreatment::LastPlace,
            dns: StatusTreatment::Zero,
            dq: StatusTreatment::Zero,
            withdrawn: StatusTreatment::Exclude,
        }
    }
}

impl StatusHandling {
    /// Treatment for an inactive status. Active statuses have none.
    pub fn treatment(&self, status: ScoreStatus) -> Option<StatusTreatment> {
        match status {
            ScoreStatus::Scored | ScoreStatus::Cap => None,
            ScoreStatus::Dnf => Some(self.dnf),
            ScoreStatus::Dns => Some(self.dns),
            ScoreStatus::Dq => Some(self.dq),
            ScoreStatus::Withdrawn => Some(self.withdrawn),
        }
    }
}

/// Scoring configuration for one competition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub algorithm: ScoringAlgorithm,
    pub traditional: PointsConfig,
    pub tiebreaker: TiebreakerConfig,
    pub status_handling: StatusHandling,
}

impl ScoringConfig {
    /// Parse a JSON scoring configuration. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.tiebreaker.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
