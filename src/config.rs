//! Configuration module for the threadview client.
//!
//! This module contains the credential handling for the Twitter/X API v2.
//! Credentials are an injected dependency: the API client accepts anything
//! implementing [`CredentialProvider`], so tests can supply a fixed token
//! without touching the process environment.

use std::env;

use log::{debug, info, warn};

use crate::error::ConfigError;

/// Environment variable the bearer token is read from.
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Supplies the bearer token used to authenticate API requests.
///
/// The engine never stores credentials itself; whoever constructs the API
/// client decides where the token comes from.
pub trait CredentialProvider {
    /// Returns the OAuth 2.0 app-only bearer token.
    fn bearer_token(&self) -> &str;
}

/// Configuration for the Twitter/X API v2 client.
///
/// Holds the app-only bearer token used for all read operations
/// (single-tweet fetch, conversation search, batch fetch).
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    bearer_token: String,
}

impl TwitterConfig {
    /// Creates a config from an explicit token.
    ///
    /// The token must be a non-empty string without whitespace.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self, ConfigError> {
        let bearer_token = bearer_token.into().trim().to_string();
        if bearer_token.is_empty() || bearer_token.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidToken);
        }
        Ok(Self { bearer_token })
    }

    /// Creates a new `TwitterConfig` by loading the bearer token from the
    /// `TWITTER_BEARER_TOKEN` environment variable.
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the environment variable is present and
    ///   holds a well-formed token
    /// - `Err(ConfigError)`: If the variable is missing or the token is
    ///   empty/malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Twitter configuration from environment variables");

        let token = match env::var(BEARER_TOKEN_VAR) {
            Ok(token) => token,
            Err(_) => {
                warn!("{} is not set", BEARER_TOKEN_VAR);
                return Err(ConfigError::MissingToken(BEARER_TOKEN_VAR));
            }
        };

        let config = Self::new(token)?;
        debug!(
            "Bearer token loaded (masked): {}",
            mask_token(&config.bearer_token)
        );
        if config.bearer_token.len() < 10 {
            warn!(
                "Bearer token seems unusually short ({} characters)",
                config.bearer_token.len()
            );
        }

        info!("Twitter configuration loaded successfully");
        Ok(config)
    }
}

impl CredentialProvider for TwitterConfig {
    fn bearer_token(&self) -> &str {
        &self.bearer_token
    }
}

/// Masks a token for logging, keeping at most the first and last 8
/// characters visible.
pub(crate) fn mask_token(token: &str) -> String {
    let len = token.len();
    if len > 16 {
        format!("{}...{}", &token[..8], &token[len - 8..])
    } else if len > 8 {
        format!("{}...", &token[..8])
    } else {
        format!("{}...", token)
    }
}
