//! User Account Model

use serde::{Deserialize, Serialize};

/// Authenticated user account, as reported by the identity endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "darkModeEnabled", default)]
    pub dark_mode_enabled: bool,
}

/// Login payload for the identity endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session established by the identity endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserAccount,
}
