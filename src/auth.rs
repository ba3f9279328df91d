//! Bearer-token session state for the L8 Events client
//!
//! The token store is the single source of truth for "is authenticated".
//! It is created once by [`crate::L8Events`] and handed to every
//! sub-client, so no code path reads session state from anywhere else.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::{Arc, RwLock};

/// Claims we consume from the backend-issued JWT.
///
/// The client never verifies signatures (token issuance is the backend's
/// concern); it only reads `exp` to know when a session is stale.
#[derive(Debug, Deserialize)]
struct Claims {
    exp: i64,
}

// Decode settings for token consumption: no signature or audience
// checks, expiry checked only where the caller wants it.
fn lenient_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;
    validation.validate_exp = false;
    validation
}

/// Shared, injectable holder for the current bearer token
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create an empty (unauthenticated) token store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token store seeded with an existing token
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Store a bearer token, replacing any previous one
    pub fn set(&self, token: &str) {
        let mut guard = self.token.write().unwrap();
        *guard = Some(token.to_string());
    }

    /// Get the current token, if any
    pub fn get(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Drop the stored token, voiding the session
    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap();
        *guard = None;
    }

    /// Whether a token is present and its `exp` claim has not passed.
    ///
    /// A token that cannot be decoded at all counts as not authenticated.
    pub fn is_authenticated(&self) -> bool {
        let Some(token) = self.get() else {
            return false;
        };
        let mut validation = lenient_validation();
        validation.validate_exp = true;
        decode::<Claims>(&token, &DecodingKey::from_secret(&[]), &validation).is_ok()
    }

    /// Unix timestamp the stored token expires at, expired or not.
    ///
    /// `None` when no token is stored or it does not decode as a JWT.
    pub fn expires_at(&self) -> Option<i64> {
        let token = self.get()?;
        decode::<Claims>(&token, &DecodingKey::from_secret(&[]), &lenient_validation())
            .ok()
            .map(|data| data.claims.exp)
    }
}
