//! Invite Model (landing page invite widget)

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Invitation request sent from the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
    /// Optional display name of the invitee
    #[serde(default)]
    pub name: String,
}

impl InviteRequest {
    /// Minimal local validation before the request leaves the client:
    /// reject empty addresses and anything without an `@`.
    pub fn validate(&self) -> AppResult<()> {
        if self.email.is_empty() || !self.email.contains('@') {
            return Err(AppError::new(ErrorCode::InviteEmailInvalid));
        }
        Ok(())
    }
}

/// Outcome reported for a sent invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteOutcome {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_validation() {
        let ok = InviteRequest {
            email: "colleague@company.com".into(),
            name: String::new(),
        };
        assert!(ok.validate().is_ok());

        let bad = InviteRequest {
            email: "not-an-email".into(),
            name: "John".into(),
        };
        assert_eq!(
            bad.validate().unwrap_err().code,
            ErrorCode::InviteEmailInvalid
        );

        let empty = InviteRequest {
            email: String::new(),
            name: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
