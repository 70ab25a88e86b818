//! Unified error codes for PeoplePulse
//!
//! This module defines all error codes used across the gateway client, the
//! mock record backend, and the application shell. Error codes are organized
//! by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Gateway / record backend errors
//! - 3xxx: Directory errors
//! - 4xxx: Invite errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Session has expired
    SessionExpired = 1003,
    /// Identity provider reported a failure
    IdentityProviderError = 1004,

    // ==================== 2xxx: Gateway ====================
    /// Record backend reported non-success
    BackendRejected = 2001,
    /// Transport-level failure reaching the record backend
    TransportFailed = 2002,
    /// Backend response could not be decoded
    InvalidResponse = 2003,
    /// Requested entity table is not known
    UnknownTable = 2004,

    // ==================== 3xxx: Directory ====================
    /// Employee not found
    EmployeeNotFound = 3001,
    /// Department is not one of the enumerated values
    UnknownDepartment = 3002,
    /// Location is not one of the enumerated values
    UnknownLocation = 3003,
    /// Status is not one of the enumerated values
    UnknownStatus = 3004,

    // ==================== 4xxx: Invite ====================
    /// Invite email address is invalid
    InviteEmailInvalid = 4001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Local storage error (preferences, session cache)
    StorageError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::IdentityProviderError => "Identity provider reported a failure",

            // Gateway
            ErrorCode::BackendRejected => "Record backend rejected the operation",
            ErrorCode::TransportFailed => "Failed to reach the record backend",
            ErrorCode::InvalidResponse => "Record backend response could not be decoded",
            ErrorCode::UnknownTable => "Unknown entity table",

            // Directory
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::UnknownDepartment => "Unknown department",
            ErrorCode::UnknownLocation => "Unknown location",
            ErrorCode::UnknownStatus => "Unknown employee status",

            // Invite
            ErrorCode::InviteEmailInvalid => "Please enter a valid email address",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Local storage error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::SessionExpired),
            1004 => Ok(ErrorCode::IdentityProviderError),

            // Gateway
            2001 => Ok(ErrorCode::BackendRejected),
            2002 => Ok(ErrorCode::TransportFailed),
            2003 => Ok(ErrorCode::InvalidResponse),
            2004 => Ok(ErrorCode::UnknownTable),

            // Directory
            3001 => Ok(ErrorCode::EmployeeNotFound),
            3002 => Ok(ErrorCode::UnknownDepartment),
            3003 => Ok(ErrorCode::UnknownLocation),
            3004 => Ok(ErrorCode::UnknownStatus),

            // Invite
            4001 => Ok(ErrorCode::InviteEmailInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
