//! Access-token lifecycle tracking for authenticated API sessions.
//!
//! An [`AuthTracker`] instance is owned by one client (constructor injection,
//! no process-wide token cache) and is consulted before every outbound
//! authenticated request to decide whether the authentication handshake must
//! be re-run.

use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// How a client authenticates against the orchestration environment.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMethod {
    /// OAuth client-credentials grant against `oauth/token`.
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    /// OAuth password grant against `oauth/token`.
    UserPass {
        client_id: String,
        client_secret: String,
        username: String,
        password: String,
    },
    /// Username/password login against the legacy `ui/api/login` endpoint
    /// (falling back to `api/login` on older environments).
    LegacyLogin {
        username: String,
        password: String,
        legacy_auth_address: Option<String>,
    },
    /// A static bearer token supplied by the user.
    Token { token: String },
}

/// Cached bearer-token state and expiry logic for one authenticated session.
#[derive(Debug, Default)]
pub struct AuthTracker {
    current_access_token: Option<String>,
    expiration_seconds: f64,
    time_of_auth: Option<Instant>,
}

impl AuthTracker {
    pub fn new() -> Self {
        AuthTracker::default()
    }

    pub fn current_access_token(&self) -> Option<&str> {
        self.current_access_token.as_deref()
    }

    /// Record a fresh authentication response. The access token is read from
    /// either an `access_token` or `accessToken` key (first non-null wins),
    /// the expiry from `expires_in` or `expiresIn`.
    pub fn accept_auth_response(&mut self, auth_response: &Value) {
        self.time_of_auth = Some(Instant::now());
        self.current_access_token = first_string(auth_response, &["access_token", "accessToken"]);
        self.expiration_seconds =
            first_number(auth_response, &["expires_in", "expiresIn"]).unwrap_or(0.0);
    }

    /// Has the cached access token expired?
    ///
    /// Always `true` before the first `accept_auth_response`. When the token
    /// expires within the next second, this waits that second out before
    /// returning `true`, so a caller that sees `false` has at least ~1 second
    /// of validity left to issue its request.
    pub async fn has_access_expired(&self) -> bool {
        let time_of_auth = match (&self.current_access_token, self.time_of_auth) {
            (Some(_), Some(time_of_auth)) => time_of_auth,
            _ => {
                debug!("No current access token, must request one");
                return true;
            }
        };
        let elapsed = time_of_auth.elapsed().as_secs_f64();
        debug!(
            "Authenticated {:.3}s ago, token had an expiration time of {}s",
            elapsed, self.expiration_seconds
        );
        if elapsed >= self.expiration_seconds {
            debug!("Token expired, must request a new one");
            return true;
        }
        if elapsed >= self.expiration_seconds - 1.0 {
            debug!("Token expires in less than 1 second, waiting before requesting a new one");
            tokio::time::sleep(Duration::from_secs(1)).await;
            return true;
        }
        false
    }
}

fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(*k))
        .find_map(|v| v.as_str().map(|s| s.to_string()))
}

fn first_number(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|k| value.get(*k))
        .find_map(|v| v.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn expired_before_any_auth_response() {
        let tracker = AuthTracker::new();
        assert!(tracker.has_access_expired().await);
        assert_eq!(tracker.current_access_token(), None);
    }

    #[tokio::test]
    async fn not_expired_immediately_after_auth_response() {
        let mut tracker = AuthTracker::new();
        tracker.accept_auth_response(&json!({"accessToken": "X", "expiresIn": 600}));
        assert!(!tracker.has_access_expired().await);
        assert_eq!(tracker.current_access_token(), Some("X"));
    }

    #[tokio::test]
    async fn accepts_snake_case_key_spellings() {
        let mut tracker = AuthTracker::new();
        tracker.accept_auth_response(&json!({"access_token": "Y", "expires_in": 600}));
        assert!(!tracker.has_access_expired().await);
        assert_eq!(tracker.current_access_token(), Some("Y"));
    }

    #[tokio::test]
    async fn expired_after_expiry_elapses() {
        let mut tracker = AuthTracker::new();
        tracker.accept_auth_response(&json!({"accessToken": "X", "expiresIn": 0.1}));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(tracker.has_access_expired().await);
    }

    #[tokio::test]
    async fn near_expiry_waits_then_reports_expired() {
        let mut tracker = AuthTracker::new();
        // Expires in 0.5s: inside the 1 second safety margin from the start.
        tracker.accept_auth_response(&json!({"accessToken": "X", "expiresIn": 0.5}));
        let before = Instant::now();
        assert!(tracker.has_access_expired().await);
        assert!(before.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn response_without_token_leaves_tracker_expired() {
        let mut tracker = AuthTracker::new();
        tracker.accept_auth_response(&json!({"expiresIn": 600}));
        assert!(tracker.has_access_expired().await);
    }
}
