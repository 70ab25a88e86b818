//! Identity endpoint client
//!
//! The identity side of the backend speaks the envelope format from
//! [`shared::ApiResponse`] rather than the raw record wire shapes, so it
//! gets its own wrapper. Logging in stores the session token on the
//! underlying HTTP client; subsequent record calls carry it as a bearer
//! header.

use crate::{GatewayError, GatewayResult, RecordHttpClient};
use shared::models::{InviteOutcome, InviteRequest, LoginRequest, Session, UserAccount};
use shared::ApiResponse;

/// Client for login, session and invite endpoints
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: RecordHttpClient,
}

impl IdentityClient {
    /// Wrap an HTTP client
    pub fn new(http: RecordHttpClient) -> Self {
        Self { http }
    }

    /// The underlying HTTP client, carrying the current session token
    pub fn http(&self) -> &RecordHttpClient {
        &self.http
    }

    /// Current session token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Adopt a session token established elsewhere
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.http.set_token(token);
    }

    /// Log in with email and password, storing the session token
    pub async fn login(&mut self, email: &str, password: &str) -> GatewayResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: ApiResponse<Session> = self.http.post_json("/api/auth/login", &request).await?;
        let session = Self::unwrap_data(response)?;
        self.http.set_token(&session.token);
        tracing::info!(email, "logged in");
        Ok(session)
    }

    /// Fetch the user attached to the current session
    pub async fn current_user(&self) -> GatewayResult<UserAccount> {
        let response: ApiResponse<UserAccount> = self.http.get("/api/auth/me").await?;
        Self::unwrap_data(response)
    }

    /// End the current session and drop the stored token.
    ///
    /// The token is dropped locally even when the backend call fails, so a
    /// dead server cannot keep the client logged in.
    pub async fn logout(&mut self) -> GatewayResult<()> {
        let result = self
            .http
            .post_empty::<ApiResponse<()>>("/api/auth/logout")
            .await;
        self.http.clear_token();
        result.map(|_| ())
    }

    /// Request a teammate invite
    pub async fn send_invite(&self, invite: &InviteRequest) -> GatewayResult<InviteOutcome> {
        let response: ApiResponse<InviteOutcome> =
            self.http.post_json("/api/invites", invite).await?;
        Self::unwrap_data(response)
    }

    fn unwrap_data<T>(response: ApiResponse<T>) -> GatewayResult<T> {
        match response.code {
            Some(0) | None => response
                .data
                .ok_or_else(|| GatewayError::InvalidResponse("Missing response data".to_string())),
            Some(_) => Err(GatewayError::Backend(response.message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_data_success() {
        let response = ApiResponse::success(42u32);
        assert_eq!(IdentityClient::unwrap_data(response).unwrap(), 42);
    }

    #[test]
    fn test_unwrap_data_backend_error() {
        let response: ApiResponse<u32> = ApiResponse {
            code: Some(1002),
            message: "Invalid email or password".to_string(),
            data: None,
            details: None,
        };
        let err = IdentityClient::unwrap_data(response).unwrap_err();
        assert!(matches!(err, GatewayError::Backend(_)));
    }

    #[test]
    fn test_unwrap_data_missing_payload() {
        let response: ApiResponse<u32> = ApiResponse {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        };
        let err = IdentityClient::unwrap_data(response).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
