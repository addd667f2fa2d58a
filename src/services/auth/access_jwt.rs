use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{collections::HashSet, error::Error as StdError, fmt, sync::Arc};
use uuid::Uuid;

use crate::repos::UserLookup;

// Errors returned by access-token verification + claim schema validation.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyUserId,
    InvalidUserId,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyUserId => write!(f, "empty 'userId' claim"),
            Self::InvalidUserId => write!(f, "invalid 'userId' (expected UUID)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Access token (JWT) claims.
///
/// `userId` is required: a payload without it fails to deserialize and the token is
/// rejected before any lookup happens. `exp` / `nbf` are checked by `Validation`
/// against the raw payload and are not kept here.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Verified token, reduced to what the authenticator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAccessToken {
    pub user_id: Uuid,
}

/// HS256 access-token verifier plus the user lookup used to resolve identities.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
    users: Arc<dyn UserLookup>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(secret: &str, leeway_seconds: u64, users: Arc<dyn UserLookup>) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Algorithm is pinned; a token signed with anything but HS256 is rejected.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        // `exp` / `nbf` are checked when present but not required.
        validation.required_spec_claims = HashSet::new();
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
            users,
        }
    }

    pub fn users(&self) -> &dyn UserLookup {
        self.users.as_ref()
    }

    /// Verify signature / algorithm / expiry and decode the claims.
    pub fn decode(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify, then validate the claim schema.
    ///
    /// `userId` must be a non-blank UUID string.
    pub fn verify(&self, token: &str) -> Result<VerifiedAccessToken, AccessJwtError> {
        let claims = self.decode(token)?;

        let raw = claims.user_id.trim();
        if raw.is_empty() {
            return Err(AccessJwtError::EmptyUserId);
        }
        let user_id = Uuid::parse_str(raw).map_err(|_| AccessJwtError::InvalidUserId)?;

        Ok(VerifiedAccessToken { user_id })
    }
}
