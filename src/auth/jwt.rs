use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::state::AppState;

/// Tokens are valid for a fixed day after issuance.
const ACCESS_TTL_HOURS: i64 = 24;

/// JWT payload: issuer carries the stringified user id, subject the role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let secret = state.config.jwt.secret.as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, user_id: i64, role: &str) -> anyhow::Result<String> {
        let exp = OffsetDateTime::now_utc() + TimeDuration::hours(ACCESS_TTL_HOURS);
        let claims = Claims {
            iss: user_id.to_string(),
            sub: role.to_string(),
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, role, "jwt signed");
        Ok(token)
    }

    /// No endpoint checks tokens yet; the format contract still requires
    /// that a verifier can recompute the signature and reject expired or
    /// tampered tokens.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        debug!(issuer = %data.claims.iss, "jwt verified");
        Ok(data.claims)
    }
}
