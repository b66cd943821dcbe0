//! Personal access tokens
//!
//! Users mint personal access tokens so external tools (the MCP
//! integration) can act on their behalf. Only a SHA-256 hash of the secret
//! is stored; the plaintext is returned once at creation.

use chrono::{DateTime, Duration, Utc};
use hub_rbac::{Permission, PermissionSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Prefix every plaintext token starts with.
pub const TOKEN_PREFIX: &str = "hubpat_";

/// Number of random alphanumeric characters after the prefix.
pub const TOKEN_SECRET_LEN: usize = 40;

/// Number of leading characters kept for display ("hubpat_Ab3x...").
const DISPLAY_PREFIX_LEN: usize = 12;

/// A stored personal access token.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_auth::PersonalAccessToken;
///
/// let (token, secret) = PersonalAccessToken::generate(
///     Uuid::now_v7(),
///     "laptop",
///     vec!["todo:read".to_string()],
///     None,
/// );
/// assert!(secret.starts_with("hubpat_"));
/// assert!(token.verify(&secret).is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalAccessToken {
    /// Token ID
    pub id: Uuid,

    /// User the token acts for
    pub user_id: Uuid,

    /// Label chosen by the user
    pub name: String,

    /// Leading characters of the plaintext, for display
    pub display_prefix: String,

    /// Base64url SHA-256 of the plaintext
    pub token_hash: String,

    /// Granted permission strings (e.g. "todo:read")
    #[serde(default)]
    pub scopes: Vec<String>,

    /// When the token was created
    pub created_at: DateTime<Utc>,

    /// When the token stops working, if ever
    pub expires_at: Option<DateTime<Utc>>,

    /// Last successful use
    pub last_used_at: Option<DateTime<Utc>>,

    /// When the user revoked the token
    pub revoked_at: Option<DateTime<Utc>>,
}

impl PersonalAccessToken {
    /// Mint a new token.
    ///
    /// # Arguments
    ///
    /// * `user_id` - User the token acts for
    /// * `name` - Label chosen by the user
    /// * `scopes` - Permission strings the token grants
    /// * `ttl` - Lifetime, or `None` for a non-expiring token
    ///
    /// # Returns
    ///
    /// The token record to store and the plaintext secret to show once.
    pub fn generate(
        user_id: Uuid,
        name: impl Into<String>,
        scopes: Vec<String>,
        ttl: Option<Duration>,
    ) -> (Self, String) {
        let random: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(TOKEN_SECRET_LEN)
            .map(char::from)
            .collect();
        let secret = format!("{TOKEN_PREFIX}{random}");

        let now = Utc::now();
        let token = Self {
            id: Uuid::now_v7(),
            user_id,
            name: name.into(),
            display_prefix: secret[..DISPLAY_PREFIX_LEN].to_string(),
            token_hash: hash_secret(&secret),
            scopes,
            created_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
            last_used_at: None,
            revoked_at: None,
        };

        (token, secret)
    }

    /// Check a presented plaintext against this token.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the secret is malformed or does not match
    /// - `TokenRevoked` if the owner revoked the token
    /// - `TokenExpired` if the token is past its expiry
    pub fn verify(&self, presented: &str) -> AuthResult<()> {
        if !looks_like_token(presented) {
            return Err(AuthError::InvalidToken("malformed token".to_string()));
        }

        let matches: bool = hash_secret(presented)
            .as_bytes()
            .ct_eq(self.token_hash.as_bytes())
            .into();
        if !matches {
            tracing::debug!(token_id = %self.id, "Token hash mismatch");
            return Err(AuthError::InvalidToken("token does not match".to_string()));
        }

        if self.revoked_at.is_some() {
            tracing::debug!(token_id = %self.id, "Rejected revoked token");
            return Err(AuthError::TokenRevoked);
        }

        if self.is_expired_at(Utc::now()) {
            tracing::debug!(token_id = %self.id, "Rejected expired token");
            return Err(AuthError::TokenExpired);
        }

        Ok(())
    }

    /// Whether the token is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Whether the token is neither revoked nor expired.
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none() && !self.is_expired_at(Utc::now())
    }

    /// Revoke the token. Revoking twice keeps the first timestamp.
    pub fn revoke(&mut self) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(Utc::now());
        }
    }

    /// Record a successful use.
    pub fn touch(&mut self) {
        self.last_used_at = Some(Utc::now());
    }

    /// The token's scopes as a permission set. Unknown scope strings are ignored.
    pub fn scope_set(&self) -> PermissionSet {
        PermissionSet::from_strings(&self.scopes)
    }

    /// Whether the token's scopes cover `permission`.
    pub fn allows(&self, permission: &Permission) -> bool {
        self.scope_set().has(permission)
    }

    /// Like [`PersonalAccessToken::allows`], but as a result.
    pub fn require(&self, permission: &Permission) -> AuthResult<()> {
        if self.allows(permission) {
            Ok(())
        } else {
            Err(AuthError::InsufficientScope(permission.to_string()))
        }
    }
}

/// Hash a plaintext token for storage or lookup.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    let hash = hasher.finalize();
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, hash)
}

/// Whether `s` has the shape of a plaintext token.
pub fn looks_like_token(s: &str) -> bool {
    s.strip_prefix(TOKEN_PREFIX).is_some_and(|rest| {
        rest.len() == TOKEN_SECRET_LEN && rest.chars().all(|c| c.is_ascii_alphanumeric())
    })
}
