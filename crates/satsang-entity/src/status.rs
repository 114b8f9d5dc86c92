//! Publication status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a content record.
///
/// Status is independent at every level of the content tree: a `Draft`
/// category may contain `Published` chapters and nothing ever propagates
/// a status change between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PublishStatus {
    /// Visible to app users.
    Published,
    /// Visible only in the admin console.
    #[default]
    Draft,
}

impl PublishStatus {
    /// Return the status as the persisted string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
        }
    }

    /// Whether the record is visible to app users.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PublishStatus {
    type Err = satsang_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Published" => Ok(Self::Published),
            "Draft" => Ok(Self::Draft),
            _ => Err(satsang_core::AppError::validation(format!(
                "Invalid publication status: '{s}'. Expected one of: Published, Draft"
            ))),
        }
    }
}
