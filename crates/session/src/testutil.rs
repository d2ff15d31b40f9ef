//! Shared test fixtures: hand-rolled tokens with a fake signature.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build a compact three-segment token around the given JSON payload. The
/// signature segment is garbage on purpose: the client never reads it.
pub(crate) fn encode_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.fakesignature")
}

/// Token for `sub` with the given `exp` and a `roles` claim.
pub(crate) fn token_with_roles(sub: &str, exp: i64, roles: serde_json::Value) -> String {
    encode_token(&serde_json::json!({ "sub": sub, "exp": exp, "roles": roles }))
}
