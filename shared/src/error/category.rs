//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Gateway errors
/// - 3xxx: Directory errors
/// - 4xxx: Invite errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Gateway / record backend errors (2xxx)
    Gateway,
    /// Directory errors (3xxx)
    Directory,
    /// Invite errors (4xxx)
    Invite,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Gateway,
            3000..4000 => Self::Directory,
            4000..5000 => Self::Invite,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Gateway => "gateway",
            Self::Directory => "directory",
            Self::Invite => "invite",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Auth);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Gateway);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Directory);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Invite);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::BackendRejected.category(), ErrorCategory::Gateway);
        assert_eq!(
            ErrorCode::EmployeeNotFound.category(),
            ErrorCategory::Directory
        );
        assert_eq!(
            ErrorCode::InviteEmailInvalid.category(),
            ErrorCategory::Invite
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Gateway).unwrap();
        assert_eq!(json, "\"gateway\"");

        let category: ErrorCategory = serde_json::from_str("\"directory\"").unwrap();
        assert_eq!(category, ErrorCategory::Directory);
    }
}
