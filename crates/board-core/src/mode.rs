//! Grouping and ordering modes selectable from the display menu.

use std::fmt;
use std::str::FromStr;

use crate::error::ModeParseError;

/// Dimension used to partition tickets into columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupingMode {
    #[default]
    User,
    Priority,
    Status,
}

impl GroupingMode {
    /// Select box order
    pub const ALL: [GroupingMode; 3] = [GroupingMode::User, GroupingMode::Priority, GroupingMode::Status];

    /// Persisted literal
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::User => "user",
            GroupingMode::Priority => "priority",
            GroupingMode::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupingMode::User => "User",
            GroupingMode::Priority => "Priority",
            GroupingMode::Status => "Status",
        }
    }
}

impl FromStr for GroupingMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeParseError::Grouping(s.to_string()))
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied within each column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderingMode {
    /// Highest priority first
    #[default]
    Priority,
    /// Alphabetical by title
    Title,
}

impl OrderingMode {
    pub const ALL: [OrderingMode; 2] = [OrderingMode::Priority, OrderingMode::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "priority",
            OrderingMode::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "Priority",
            OrderingMode::Title => "Title",
        }
    }
}

impl FromStr for OrderingMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeParseError::Ordering(s.to_string()))
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
