/**
 * Session Tokens
 *
 * Issues and validates the HS256 JWTs handed out on signup and login, and
 * keeps the set of tokens revoked by logout.
 *
 * # Claims
 *
 * - `sub` - user id as a decimal string
 * - `jti` - random UUID, so two tokens issued in the same second differ
 * - `iat` / `exp` - Unix timestamps; `exp = iat + ttl`
 *
 * # Revocation
 *
 * Revoked tokens are kept for the lifetime of the process. Checking the set
 * is the auth middleware's job; `validate` only looks at signature, expiry
 * and subject.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Token ID
    pub jti: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuer, validator and revocation list
///
/// Cheap to clone; clones share the revocation set.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
    revoked: Arc<RwLock<HashSet<String>>>,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
            revoked: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Sign a token for `user_id` expiring `ttl` from now
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// User id carried by a well-signed, unexpired token
    ///
    /// Bad signature, expiry, malformed input and a non-numeric subject all
    /// give `None`.
    pub fn validate(&self, token: &str) -> Option<i64> {
        let validation = Validation::new(Algorithm::HS256);

        let data = match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!("Token rejected: {:?}", e.kind());
                return None;
            }
        };

        data.claims.sub.parse::<i64>().ok()
    }

    pub async fn revoke(&self, token: &str) {
        self.revoked.write().await.insert(token.to_string());
    }

    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().await.contains(token)
    }

    /// Forget every revocation (tests)
    pub async fn clear_revocations(&self) {
        self.revoked.write().await.clear();
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
