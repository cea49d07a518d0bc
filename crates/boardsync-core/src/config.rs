use crate::error::SyncError;
use crate::result::SyncResult;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "BOARDSYNC_API_TOKEN";

pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2";

/// Connection settings for the remote service.
///
/// A config cannot be constructed without a token, so every entity built on
/// top of one is authorized before any network activity happens.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: String,
    pub endpoint: String,
}

impl ApiConfig {
    pub fn new(token: impl Into<String>) -> SyncResult<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(SyncError::Configuration("an API token is required".into()));
        }
        Ok(Self {
            token,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Resolve a config from an explicit token, falling back to the
    /// environment. The explicit token always wins.
    pub fn resolve(token: Option<&str>) -> SyncResult<Self> {
        match token {
            Some(token) if !token.is_empty() => Self::new(token),
            _ => Self::from_env(),
        }
    }

    pub fn from_env() -> SyncResult<Self> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Self::new(token),
            _ => Err(SyncError::Configuration(format!(
                "an API token is required (pass one explicitly or set {TOKEN_ENV_VAR})"
            ))),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let result = ApiConfig::new("");
        assert!(matches!(result, Err(SyncError::Configuration(_))));
    }

    #[test]
    fn test_explicit_token_wins() {
        let config = ApiConfig::resolve(Some("token-123")).unwrap();
        assert_eq!(config.token, "token-123");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_with_endpoint() {
        let config = ApiConfig::new("token-123")
            .unwrap()
            .with_endpoint("http://localhost:9999/v2");
        assert_eq!(config.endpoint, "http://localhost:9999/v2");
    }
}
