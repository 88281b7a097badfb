use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Outcome class of a submitted result.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScoreStatus {
    #[default]
    Scored,
    /// Hit the time cap before finishing.
    Cap,
    /// Disqualified.
    Dq,
    /// Did not finish.
    Dnf,
    /// Did not start.
    Dns,
    Withdrawn,
}

impl ScoreStatus {
    /// Active results are ranked against each other.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Scored | Self::Cap)
    }

    /// Position of the status group when sorting: scored < cap < dq/dnf/dns < withdrawn.
    pub fn sort_order(&self) -> u8 {
        match self {
            Self::Scored => 0,
            Self::Cap => 1,
            Self::Dq | Self::Dnf | Self::Dns => 2,
            Self::Withdrawn => 3,
        }
    }

    /// Short label shown instead of a value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scored => "",
            Self::Cap => "CAP",
            Self::Dq => "DQ",
            Self::Dnf => "DNF",
            Self::Dns => "DNS",
            Self::Withdrawn => "WD",
        }
    }

    /// Map a status string from the legacy results table.
    pub fn from_legacy(status: Option<&str>) -> Self {
        match status.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("cap") => Self::Cap,
            Some("dq") => Self::Dq,
            Some("dns") | Some("dnf") => Self::Withdrawn,
            _ => Self::Scored,
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order() {
        assert!(ScoreStatus::Scored.sort_order() < ScoreStatus::Cap.sort_order());
        assert!(ScoreStatus::Cap.sort_order() < ScoreStatus::Dq.sort_order());
        assert!(ScoreStatus::Dq.sort_order() < ScoreStatus::Withdrawn.sort_order());
    }

    #[test]
    fn test_active() {
        assert!(ScoreStatus::Scored.is_active());
        assert!(ScoreStatus::Cap.is_active());
        assert!(!ScoreStatus::Dnf.is_active());
        assert!(!ScoreStatus::Withdrawn.is_active());
    }

    #[test]
    fn test_from_legacy() {
        assert_eq!(ScoreStatus::from_legacy(Some("CAP")), ScoreStatus::Cap);
        assert_eq!(ScoreStatus::from_legacy(Some("dq")), ScoreStatus::Dq);
        assert_eq!(ScoreStatus::from_legacy(Some("dns")), ScoreStatus::Withdrawn);
        assert_eq!(ScoreStatus::from_legacy(Some("dnf")), ScoreStatus::Withdrawn);
        assert_eq!(ScoreStatus::from_legacy(Some("scored")), ScoreStatus::Scored);
        assert_eq!(ScoreStatus::from_legacy(None), ScoreStatus::Scored);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("DNF".parse::<ScoreStatus>().unwrap(), ScoreStatus::Dnf);
        assert_eq!(ScoreStatus::Withdrawn.to_string(), "withdrawn");
        assert_eq!(ScoreStatus::Withdrawn.label(), "WD");
    }
}
