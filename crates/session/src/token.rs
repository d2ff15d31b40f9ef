use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

use crate::claims::Claims;

#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-segment JWT")]
    Malformed,

    #[error("payload segment is not valid base64url: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("payload is not a valid claims document: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the claims segment of a compact JWT.
///
/// Reads the middle of the three dot-separated base64url segments and parses
/// it as JSON. The header and signature segments are never inspected.
pub fn decode_claims(token: &str) -> Result<Claims, TokenDecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenDecodeError::Malformed);
    };

    if payload.is_empty() {
        return Err(TokenDecodeError::Malformed);
    }

    // Issuers emit unpadded base64url; tolerate padded input anyway.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testutil::encode_token;

    #[test]
    fn decodes_a_well_formed_token() {
        let token = encode_token(&serde_json::json!({
            "sub": "alice",
            "exp": 2_000_000_000u32,
            "iat": 1_700_000_000u32,
            "roles": "ROLE_USER"
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, 2_000_000_000);
        assert_eq!(claims.iat, Some(1_700_000_000));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            decode_claims("only-one-segment"),
            Err(TokenDecodeError::Malformed)
        ));
        assert!(matches!(
            decode_claims("a.b"),
            Err(TokenDecodeError::Malformed)
        ));
        assert!(matches!(
            decode_claims("a.b.c.d"),
            Err(TokenDecodeError::Malformed)
        ));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert!(matches!(
            decode_claims("head.&&&&.sig"),
            Err(TokenDecodeError::Payload(_))
        ));
    }

    #[test]
    fn rejects_non_json_payload() {
        let garbage = URL_SAFE_NO_PAD.encode(b"not json at all");
        let token = format!("head.{garbage}.sig");
        assert!(matches!(
            decode_claims(&token),
            Err(TokenDecodeError::Claims(_))
        ));
    }

    #[test]
    fn tolerates_padded_payload() {
        // Same payload, but with base64 padding characters appended.
        let body = URL_SAFE_NO_PAD.encode(br#"{"sub":"bob","exp":2000000000}"#);
        let token = format!("head.{body}==.sig");
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "bob");
    }
}
