use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decoded JWT payload (transport-agnostic).
///
/// Only the claims the client actually reads are modeled; anything else the
/// backend puts in the payload is ignored on decode. The signature is *not*
/// the client's concern — verification belongs to the issuing server, the
/// client trusts the TLS channel it received the token over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username of the principal.
    pub sub: String,

    /// Expiration, Unix seconds. The token is invalid once this is reached.
    pub exp: i64,

    /// Issued-at, Unix seconds. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Single-role field, emitted by some backend iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleClaim>,

    /// Plural role field: either `"ROLE_ADMIN,ROLE_USER"` or an array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<RoleClaim>,

    /// Alternate field name used by some authorization frameworks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<RoleClaim>,
}

/// A role claim value in whichever shape the backend emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleClaim {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,
}

/// Deterministically validate claims against a supplied clock.
///
/// Expiry is compared in milliseconds with `>=`: a token whose `exp * 1000`
/// equals the current instant is already expired, there is no one-tick
/// window of validity at exact equality. The conversion saturates, so an
/// absurdly large `exp` reads as far-future instead of overflowing.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if now.timestamp_millis() >= claims.exp.saturating_mul(1000) {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claims_expiring_at(exp: i64) -> Claims {
        Claims {
            sub: "alice".to_string(),
            exp,
            iat: None,
            role: None,
            roles: None,
            authorities: None,
        }
    }

    #[test]
    fn future_expiry_is_valid() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = claims_expiring_at(1_700_000_060);
        assert_eq!(validate_claims(&claims, now), Ok(()));
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = claims_expiring_at(1_699_999_999);
        assert_eq!(validate_claims(&claims, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn exact_boundary_is_expired() {
        // exp * 1000 == now in millis: expired, not a one-tick valid window.
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = claims_expiring_at(1_700_000_000);
        assert_eq!(validate_claims(&claims, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn extreme_expiry_values_do_not_overflow() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        // Saturates to far-future instead of wrapping: still valid.
        let claims = claims_expiring_at(i64::MAX);
        assert_eq!(validate_claims(&claims, now), Ok(()));

        // Saturates the other way: long expired.
        let claims = claims_expiring_at(i64::MIN);
        assert_eq!(validate_claims(&claims, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn one_millisecond_before_boundary_is_valid() {
        let now = Utc.timestamp_opt(1_699_999_999, 999_000_000).unwrap();
        let claims = claims_expiring_at(1_700_000_000);
        assert_eq!(validate_claims(&claims, now), Ok(()));
    }

    #[test]
    fn role_claim_decodes_string_and_array() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "alice",
            "exp": 2_000_000_000u32,
            "roles": "ROLE_ADMIN,ROLE_USER"
        }))
        .unwrap();
        assert_eq!(claims.roles, Some(RoleClaim::One("ROLE_ADMIN,ROLE_USER".to_string())));

        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "bob",
            "exp": 2_000_000_000u32,
            "authorities": ["ROLE_USER"]
        }))
        .unwrap();
        assert_eq!(
            claims.authorities,
            Some(RoleClaim::Many(vec!["ROLE_USER".to_string()]))
        );
    }
}
