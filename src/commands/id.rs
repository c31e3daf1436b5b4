//! Command identifiers for the jog panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A logical jog action that input can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    /// Move the tray towards +Y.
    MovePositiveY,
    /// Move the tray towards -Y.
    MoveNegativeY,
    /// Move the tray towards +X.
    MovePositiveX,
    /// Move the tray towards -X.
    MoveNegativeX,
    /// Raise the head (+Z).
    MovePositiveZ,
    /// Lower the head (-Z).
    MoveNegativeZ,
}

/// A machine axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The G-code letter for this axis.
    pub fn letter(&self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Returned when a string does not name a known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command '{0}'")]
pub struct ParseCommandError(pub String);

impl CommandId {
    /// Every command, in panel order.
    pub const ALL: [CommandId; 6] = [
        CommandId::MovePositiveY,
        CommandId::MoveNegativeY,
        CommandId::MoveNegativeX,
        CommandId::MovePositiveX,
        CommandId::MovePositiveZ,
        CommandId::MoveNegativeZ,
    ];

    /// The stable kebab-case name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MovePositiveY => "move-positive-y",
            Self::MoveNegativeY => "move-negative-y",
            Self::MovePositiveX => "move-positive-x",
            Self::MoveNegativeX => "move-negative-x",
            Self::MovePositiveZ => "move-positive-z",
            Self::MoveNegativeZ => "move-negative-z",
        }
    }

    /// Short label shown on the panel button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MovePositiveY => "Y+",
            Self::MoveNegativeY => "Y-",
            Self::MovePositiveX => "X+",
            Self::MoveNegativeX => "X-",
            Self::MovePositiveZ => "Z+",
            Self::MoveNegativeZ => "Z-",
        }
    }

    /// The axis this command moves along.
    pub fn axis(&self) -> Axis {
        match self {
            Self::MovePositiveX | Self::MoveNegativeX => Axis::X,
            Self::MovePositiveY | Self::MoveNegativeY => Axis::Y,
            Self::MovePositiveZ | Self::MoveNegativeZ => Axis::Z,
        }
    }

    /// Whether the move goes in the positive direction.
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Self::MovePositiveX | Self::MovePositiveY | Self::MovePositiveZ
        )
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ids_unique() {
        let mut names: Vec<_> = CommandId::ALL.iter().map(|id| id.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), CommandId::ALL.len());
    }

    #[test]
    fn test_parse_known_name() {
        assert_eq!(
            "move-negative-z".parse::<CommandId>(),
            Ok(CommandId::MoveNegativeZ)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "move-sideways".parse::<CommandId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'move-sideways'");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Move-Positive-Y".parse::<CommandId>().is_err());
    }

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(CommandId::MoveNegativeX.axis(), Axis::X);
        assert!(!CommandId::MoveNegativeX.is_positive());
        assert_eq!(CommandId::MovePositiveZ.axis().letter(), 'Z');
        assert!(CommandId::MovePositiveZ.is_positive());
    }

    #[test]
    fn test_label() {
        assert_eq!(CommandId::MovePositiveY.label(), "Y+");
        assert_eq!(CommandId::MoveNegativeX.label(), "X-");
    }

    #[test]
    fn test_display_matches_as_str() {
        for id in CommandId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }
}
