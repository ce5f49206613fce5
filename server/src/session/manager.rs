use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::store::AccessToken;

pub const TOKEN_LENGTH: usize = 16;
pub const DEFAULT_TOKEN_VALIDITY: Duration = Duration::from_secs(15 * 60);

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Issues one access token per username and checks it against a sliding
/// validity window. Stale records are kept; they only fail validation.
#[derive(Clone)]
pub struct SessionManager {
    // username -> AccessToken
    tokens: Arc<DashMap<String, AccessToken>>,
    // token -> username
    token_owners: Arc<DashMap<String, String>>,
    validity: chrono::Duration,
}

impl SessionManager {
    pub fn new(validity: Duration) -> Self {
        let validity = chrono::Duration::from_std(validity).unwrap_or(chrono::Duration::MAX);

        Self {
            tokens: Arc::new(DashMap::new()),
            token_owners: Arc::new(DashMap::new()),
            validity,
        }
    }

    /// Returns the user's token, creating it on first login. A repeated login
    /// only moves `last_updated` forward; the token string never changes.
    pub fn issue_or_refresh(&self, username: &str) -> AccessToken {
        match self.tokens.entry(username.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().touch();
                log::info!("Refreshed access token for user: {}", username);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let access_token = AccessToken::new(username.to_string(), generate_token());
                self.token_owners
                    .insert(access_token.token.clone(), username.to_string());
                entry.insert(access_token.clone());

                log::info!("Issued access token for user: {}", username);
                access_token
            }
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AccessToken> {
        self.validate_token_at(token, Utc::now())
    }

    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<AccessToken> {
        let username = self
            .token_owners
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(CatalogError::InvalidToken)?;

        let access_token = self
            .tokens
            .get(&username)
            .map(|entry| entry.value().clone())
            .ok_or(CatalogError::InvalidToken)?;

        if !access_token.is_fresh_at(now, self.validity) {
            log::debug!("Rejected stale token for user: {}", username);
            return Err(CatalogError::InvalidToken);
        }

        Ok(access_token)
    }

    pub fn token_for(&self, username: &str) -> Option<AccessToken> {
        self.tokens.get(username).map(|entry| entry.clone())
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[cfg(test)]
    fn backdate(&self, username: &str, by: chrono::Duration) {
        if let Some(mut token) = self.tokens.get_mut(username) {
            token.last_updated = token.last_updated - by;
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VALIDITY)
    }
}
