//! Type-safe duty role identifiers.
//!
//! Configuration files and form snapshots name roles by their display
//! string (`"CQ Lead"`, `"ALD (Weekends Only)"`). These enums give those
//! strings static structure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which duty team a role belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Airman Leader team.
    AirmanLeader,
    /// Charge of Quarters team.
    ChargeOfQuarters,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::AirmanLeader => "AL Team",
            Team::ChargeOfQuarters => "CQ Team",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staffed position on the nightly duty roster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Airman Leader on duty, weekends only.
    AldWeekends,
    /// Shadow for the weekend ALD.
    AldShadow,
    /// Airman Leader holding accountability cards.
    AlCards,
    /// Shadow for AL Cards.
    AlCardsShadow,
    /// Lead of the CQ shift.
    CqLead,
    /// Door guard of the CQ shift.
    CqDoorGuard,
    /// Runners; the only role staffed by several people.
    CqRunner,
}

impl Role {
    /// Every known role, in roster order.
    pub const ALL: [Role; 7] = [
        Role::AldWeekends,
        Role::AldShadow,
        Role::AlCards,
        Role::AlCardsShadow,
        Role::CqLead,
        Role::CqDoorGuard,
        Role::CqRunner,
    ];

    /// Returns the canonical name used in configuration and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AldWeekends => "ALD (Weekends Only)",
            Role::AldShadow => "ALD Shadow (Weekends Only)",
            Role::AlCards => "AL Cards",
            Role::AlCardsShadow => "AL Cards Shadow",
            Role::CqLead => "CQ Lead",
            Role::CqDoorGuard => "CQ Door Guard",
            Role::CqRunner => "CQ Runner",
        }
    }

    /// Returns the label printed in the email: the name without any
    /// parenthetical qualifier.
    pub fn label(&self) -> &'static str {
        let name = self.as_str();
        match name.split_once('(') {
            Some((head, _)) => head.trim_end(),
            None => name,
        }
    }

    pub fn team(&self) -> Team {
        match self {
            Role::AldWeekends | Role::AldShadow | Role::AlCards | Role::AlCardsShadow => {
                Team::AirmanLeader
            }
            Role::CqLead | Role::CqDoorGuard | Role::CqRunner => Team::ChargeOfQuarters,
        }
    }

    /// Returns true if the role holds a list of people rather than one.
    pub fn is_multi_person(&self) -> bool {
        matches!(self, Role::CqRunner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parse a role name (case-insensitive, whitespace-tolerant).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = collapse_whitespace(s);
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown role: {s}"))
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Token that marks a blank-line separator in the team display order.
pub const SEPARATOR_TOKEN: &str = "---";

/// One position in the team section display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplaySlot {
    Role(Role),
    Separator,
}

impl FromStr for DisplaySlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == SEPARATOR_TOKEN {
            Ok(DisplaySlot::Separator)
        } else {
            s.parse().map(DisplaySlot::Role)
        }
    }
}

impl TryFrom<String> for DisplaySlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplaySlot> for String {
    fn from(slot: DisplaySlot) -> Self {
        match slot {
            DisplaySlot::Role(role) => role.into(),
            DisplaySlot::Separator => SEPARATOR_TOKEN.to_string(),
        }
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("CQ Lead".parse::<Role>().unwrap(), Role::CqLead);
        assert_eq!("  cq   door guard ".parse::<Role>().unwrap(), Role::CqDoorGuard);
        assert_eq!(
            "ald (weekends only)".parse::<Role>().unwrap(),
            Role::AldWeekends
        );
        assert!("CQ Janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_label_strips_qualifier() {
        assert_eq!(Role::AldWeekends.label(), "ALD");
        assert_eq!(Role::AldShadow.label(), "ALD Shadow");
        assert_eq!(Role::CqRunner.label(), "CQ Runner");
    }

    #[test]
    fn test_role_team() {
        assert_eq!(Role::AlCardsShadow.team(), Team::AirmanLeader);
        assert_eq!(Role::CqRunner.team(), Team::ChargeOfQuarters);
        assert!(Role::CqRunner.is_multi_person());
        assert!(!Role::CqLead.is_multi_person());
    }

    #[test]
    fn test_display_slot_parses_separator() {
        assert_eq!("---".parse::<DisplaySlot>().unwrap(), DisplaySlot::Separator);
        assert_eq!(
            "AL Cards".parse::<DisplaySlot>().unwrap(),
            DisplaySlot::Role(Role::AlCards)
        );
    }
}
