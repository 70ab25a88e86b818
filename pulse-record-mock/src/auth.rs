//! Identity endpoint handlers
//!
//! The identity side of the mock speaks the `ApiResponse` envelope. A
//! successful login mints an opaque session token and registers the user
//! in the `User1` table if it is not already there.

use crate::state::MockState;
use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Value};
use shared::models::{InviteOutcome, InviteRequest, LoginRequest, Session, UserAccount};
use shared::{ApiResponse, AppError};
use std::sync::Arc;
use uuid::Uuid;

const USER_TABLE: &str = "User1";

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

fn user_from_record(record: &serde_json::Map<String, Value>) -> Option<UserAccount> {
    serde_json::from_value(Value::Object(record.clone())).ok()
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<MockState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<Session>>, AppError> {
    if !request.email.contains('@') || request.password.is_empty() {
        return Err(AppError::invalid_credentials());
    }

    let mut tables = state.tables.write().await;
    let store = tables.entry(USER_TABLE.to_string()).or_default();

    let user = match store
        .iter()
        .find(|r| r.get("email").and_then(Value::as_str) == Some(request.email.as_str()))
        .and_then(user_from_record)
    {
        Some(user) => user,
        None => {
            let user = UserAccount {
                id: state.next_id(),
                name: display_name(&request.email),
                email: request.email.clone(),
                role: "member".to_string(),
                dark_mode_enabled: false,
            };
            if let Value::Object(record) = serde_json::to_value(&user)? {
                store.push(record);
            }
            user
        }
    };
    drop(tables);

    let token = Uuid::new_v4().to_string();
    state.sessions.write().await.insert(token.clone(), user.clone());

    tracing::info!(email = %user.email, "session opened");
    Ok(Json(ApiResponse::success(Session { token, user })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserAccount>>, AppError> {
    let token = bearer_token(&headers).ok_or_else(AppError::not_authenticated)?;
    let sessions = state.sessions.read().await;
    let user = sessions
        .get(token)
        .cloned()
        .ok_or_else(AppError::not_authenticated)?;
    Ok(Json(ApiResponse::success(user)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> Json<ApiResponse<()>> {
    if let Some(token) = bearer_token(&headers) {
        if state.sessions.write().await.remove(token).is_some() {
            tracing::info!("session closed");
        }
    }
    Json(ApiResponse::ok())
}

/// POST /api/invites
pub async fn invite(
    State(state): State<Arc<MockState>>,
    Json(request): Json<InviteRequest>,
) -> Result<Json<ApiResponse<InviteOutcome>>, AppError> {
    request.validate()?;

    state.invites.write().await.push(request.email.clone());
    tracing::info!(email = %request.email, "invite recorded");

    Ok(Json(ApiResponse::success(InviteOutcome {
        success: true,
        message: format!("Invitation sent to {}", request.email),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("sarah.chen@example.com"), "sarah.chen");
        assert_eq!(display_name("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_user_record_round_trip() {
        let user = UserAccount {
            id: 7,
            name: "sarah".to_string(),
            email: "sarah@example.com".to_string(),
            role: "member".to_string(),
            dark_mode_enabled: true,
        };
        let Value::Object(record) = serde_json::to_value(&user).unwrap() else {
            panic!("user must serialize to an object");
        };
        let restored = user_from_record(&record).unwrap();
        assert_eq!(restored.id, 7);
        assert!(restored.dark_mode_enabled);
        assert!(record.contains_key("darkModeEnabled"));
        assert!(json!(record).get("Id").is_some());
    }
}
