use std::collections::HashSet;
use std::{error::Error as StdError, fmt};

use jsonwebtoken::{Algorithm, DecodingKey, Validation};

/// Decoded token payload.
///
/// The shape is defined by whoever issued the token, so it is kept as a raw
/// JSON object instead of a typed struct.
pub type Claims = serde_json::Map<String, serde_json::Value>;

// Errors returned by token verification.
//
// Every cause (bad signature, expiry, malformed input, unsupported alg) ends up
// in `Jwt`; the middleware never distinguishes between them.
#[derive(Debug)]
pub enum VerifyError {
    Jwt(jsonwebtoken::errors::Error),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
        }
    }
}

impl StdError for VerifyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Upper bound for clock tolerance. Larger values would push `now - leeway`
/// below zero inside the `exp` check.
pub const MAX_LEEWAY_SECONDS: u64 = 300;

/// HMAC (shared secret) token verifier.
///
/// - Accepts `HS256`, `HS384` and `HS512`; any other `alg` is rejected.
/// - `exp` / `nbf` are checked when present, but neither is required.
/// - A token is already expired in the second named by its `exp`.
/// - Leeway is capped at [`MAX_LEEWAY_SECONDS`].
/// - `aud` / `iss` are not checked.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        // exp <= now - leeway is expired
        validation.reject_tokens_expiring_in_less_than = 1;
        validation.leeway = leeway_seconds.min(MAX_LEEWAY_SECONDS);

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify the signature and time claims of `token`, returning its payload.
    pub fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.validation.leeway
    }
}
