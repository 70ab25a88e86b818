//! Routing surface and redirect resolution
//!
//! Path-shaped routes keep the redirect contract compatible with the web
//! client: `/`, `/login`, `/signup`, `/callback`, `/error`, and a wildcard
//! not-found. `/login` and `/signup` carry the requested destination in a
//! `redirect` query parameter.

/// Default destination after a successful sign-in
pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login { redirect: Option<String> },
    Signup { redirect: Option<String> },
    Callback,
    ErrorPage,
    NotFound(String),
}

impl Route {
    /// Parse a path with optional query string
    pub fn parse(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        match path {
            "/" | "" => Self::Landing,
            "/login" => Self::Login {
                redirect: redirect_param(query),
            },
            "/signup" => Self::Signup {
                redirect: redirect_param(query),
            },
            "/callback" => Self::Callback,
            "/error" => Self::ErrorPage,
            other => Self::NotFound(other.to_string()),
        }
    }

    /// Whether this route belongs to the auth flow itself
    pub fn is_auth_page(&self) -> bool {
        matches!(
            self,
            Self::Login { .. } | Self::Signup { .. } | Self::Callback | Self::ErrorPage
        )
    }
}

fn redirect_param(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("redirect="))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Where to send the user once the session probe completes.
///
/// With a user present the precedence is: explicit `redirect` parameter,
/// then the current path when it is not itself an auth page, then the
/// default landing path. Without a user the destination is the login page,
/// carrying the current path as a redirect parameter unless the current
/// path is already an auth page. This exact precedence is a compatibility
/// requirement, not a convenience.
pub fn resolve_redirect(
    current_path: &str,
    redirect_param: Option<&str>,
    is_auth_page: bool,
    has_user: bool,
) -> String {
    if has_user {
        if let Some(target) = redirect_param.filter(|t| !t.is_empty()) {
            return target.to_string();
        }
        if !is_auth_page {
            return current_path.to_string();
        }
        return LANDING_PATH.to_string();
    }

    if is_auth_page {
        LOGIN_PATH.to_string()
    } else {
        format!("{}?redirect={}", LOGIN_PATH, current_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/callback"), Route::Callback);
        assert_eq!(Route::parse("/error"), Route::ErrorPage);
        assert_eq!(
            Route::parse("/nowhere"),
            Route::NotFound("/nowhere".to_string())
        );
    }

    #[test]
    fn test_redirect_param_parsing() {
        assert_eq!(
            Route::parse("/login?redirect=/reports"),
            Route::Login {
                redirect: Some("/reports".to_string())
            }
        );
        assert_eq!(Route::parse("/login"), Route::Login { redirect: None });
        assert_eq!(
            Route::parse("/signup?foo=bar&redirect=/x"),
            Route::Signup {
                redirect: Some("/x".to_string())
            }
        );
        assert_eq!(Route::parse("/login?redirect="), Route::Login { redirect: None });
    }

    #[test]
    fn test_auth_pages() {
        assert!(Route::parse("/login").is_auth_page());
        assert!(Route::parse("/signup").is_auth_page());
        assert!(Route::parse("/callback").is_auth_page());
        assert!(Route::parse("/error").is_auth_page());
        assert!(!Route::parse("/").is_auth_page());
        assert!(!Route::parse("/nowhere").is_auth_page());
    }

    #[test]
    fn test_redirect_param_wins_over_current_path() {
        assert_eq!(
            resolve_redirect("/reports", Some("/settings"), false, true),
            "/settings"
        );
    }

    #[test]
    fn test_non_auth_current_path_wins_over_landing() {
        assert_eq!(resolve_redirect("/reports", None, false, true), "/reports");
    }

    #[test]
    fn test_auth_page_falls_back_to_landing() {
        assert_eq!(resolve_redirect("/login", None, true, true), "/");
        assert_eq!(resolve_redirect("/callback", None, true, true), "/");
    }

    #[test]
    fn test_redirect_param_wins_even_on_auth_page() {
        assert_eq!(
            resolve_redirect("/callback", Some("/reports"), true, true),
            "/reports"
        );
    }

    #[test]
    fn test_no_user_preserves_requested_path() {
        assert_eq!(
            resolve_redirect("/reports", None, false, false),
            "/login?redirect=/reports"
        );
    }

    #[test]
    fn test_no_user_on_auth_page_is_not_rewrapped() {
        assert_eq!(resolve_redirect("/login", None, true, false), "/login");
        assert_eq!(resolve_redirect("/signup", None, true, false), "/login");
    }

    #[test]
    fn test_empty_redirect_param_ignored() {
        assert_eq!(resolve_redirect("/reports", Some(""), false, true), "/reports");
    }
}
