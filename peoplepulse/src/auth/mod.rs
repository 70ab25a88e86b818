//! Authentication gate
//!
//! Tracks the session state the rest of the app reads: whether the startup
//! probe has completed and which user, if any, is signed in. The identity
//! calls themselves run in spawned tasks owned by the app loop; their
//! outcomes land here. Probe failures are logged and never block startup,
//! the app just proceeds unauthenticated.

pub mod route;

use shared::models::UserAccount;

pub use route::{resolve_redirect, Route, LANDING_PATH, LOGIN_PATH};

/// Session state exposed to the shell
#[derive(Debug, Default)]
pub struct AuthGate {
    probed: bool,
    user: Option<UserAccount>,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the startup session probe has completed
    pub fn is_ready(&self) -> bool {
        self.probed
    }

    pub fn current_user(&self) -> Option<&UserAccount> {
        self.user.as_ref()
    }

    /// Record the probe outcome and resolve where to send the user
    pub fn complete_probe(&mut self, user: Option<UserAccount>, route: &Route) -> String {
        self.probed = true;
        let has_user = user.is_some();
        if let Some(ref user) = user {
            tracing::info!(email = %user.email, "session established");
        } else {
            tracing::info!("no session, continuing unauthenticated");
        }
        self.user = user;

        let redirect = match route {
            Route::Login { redirect } | Route::Signup { redirect } => redirect.as_deref(),
            _ => None,
        };
        let current_path = match route {
            Route::Landing => "/",
            Route::Login { .. } => "/login",
            Route::Signup { .. } => "/signup",
            Route::Callback => "/callback",
            Route::ErrorPage => "/error",
            Route::NotFound(path) => path.as_str(),
        };
        resolve_redirect(current_path, redirect, route.is_auth_page(), has_user)
    }

    /// Record a failed probe; the app proceeds unauthenticated
    pub fn probe_failed(&mut self, reason: &str) {
        tracing::warn!(reason, "session probe failed");
        self.probed = true;
        self.user = None;
    }

    /// Drop the session
    pub fn clear(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserAccount {
        UserAccount {
            id: 1,
            name: "admin".to_string(),
            email: "admin@peoplepulse.io".to_string(),
            role: "admin".to_string(),
            dark_mode_enabled: false,
        }
    }

    #[test]
    fn test_probe_with_user_resolves_redirect() {
        let mut gate = AuthGate::new();
        let route = Route::parse("/login?redirect=/reports");
        let destination = gate.complete_probe(Some(user()), &route);

        assert!(gate.is_ready());
        assert!(gate.current_user().is_some());
        assert_eq!(destination, "/reports");
    }

    #[test]
    fn test_probe_without_user_goes_to_login() {
        let mut gate = AuthGate::new();
        let destination = gate.complete_probe(None, &Route::parse("/"));

        assert!(gate.is_ready());
        assert!(gate.current_user().is_none());
        assert_eq!(destination, "/login?redirect=/");
    }

    #[test]
    fn test_failed_probe_is_non_blocking() {
        let mut gate = AuthGate::new();
        gate.probe_failed("connection refused");
        assert!(gate.is_ready());
        assert!(gate.current_user().is_none());
    }
}
