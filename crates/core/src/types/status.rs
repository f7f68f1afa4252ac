//! Status enums for catalog entities.

use serde::{Deserialize, Serialize};

/// Error returned when a status string is not one of the known values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid inquiry status: {0}")]
pub struct StatusParseError(pub String);

/// Lifecycle of a customer inquiry.
///
/// Stored in the backend as kebab-case strings (`in-progress`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Archived,
}

impl InquiryStatus {
    /// All statuses, in the order the admin panel lists them.
    pub const ALL: [Self; 4] = [Self::New, Self::InProgress, Self::Completed, Self::Archived];

    /// The wire/storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_matches_display() {
        for status in InquiryStatus::ALL {
            assert_eq!(status.to_string().parse::<InquiryStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&InquiryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: InquiryStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, InquiryStatus::Archived);
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            "closed".parse::<InquiryStatus>(),
            Err(StatusParseError("closed".to_string()))
        );
    }

    #[test]
    fn test_default_is_new() {
        assert_eq!(InquiryStatus::default(), InquiryStatus::New);
    }
}
