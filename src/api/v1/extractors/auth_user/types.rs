/*
 * Responsibility
 * - The "authenticated context" type handlers see
 * - The token gate verifies the request and inserts this into request extensions
 *
 * Notes
 * - Claims are whatever the token issuer put in the payload; nothing here
 *   assumes a particular shape beyond convenience accessors
 */
use serde::Serialize;

use crate::services::auth::Claims;

/// Decoded identity attached to a request that passed the token gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    pub fn claim(&self, name: &str) -> Option<&serde_json::Value> {
        self.claims.get(name)
    }

    /// `sub` claim, if present and a string.
    pub fn subject(&self) -> Option<&str> {
        self.claim("sub").and_then(|v| v.as_str())
    }
}
