//! Wire Token Codec
//!
//! The wire token is `"{token_id}.{signature}"` where the signature is
//! HMAC-SHA256 over the token id's bytes, base64url encoded without
//! padding. Only the id crosses the wire; user and expiry stay in the
//! store and are looked up on every request.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{IdentityError, IdentityResult};

type HmacSha256 = Hmac<Sha256>;

/// Sign a token id into its wire form
pub(crate) fn generate_access_token(token_id: &Uuid, secret: &[u8; 32]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(token_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", token_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a wire token, returning the embedded token id
///
/// Every malformed input collapses into `InvalidToken`; callers must not
/// leak which check failed.
pub(crate) fn parse_access_token(token: &str, secret: &[u8; 32]) -> IdentityResult<Uuid> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(IdentityError::InvalidToken);
    }

    let token_id = Uuid::parse_str(parts[0]).map_err(|_| IdentityError::InvalidToken)?;
    let signature = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|_| IdentityError::InvalidToken)?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(token_id.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| IdentityError::InvalidToken)?;

    Ok(token_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_roundtrip() {
        let id = Uuid::new_v4();
        let token = generate_access_token(&id, &SECRET);
        let parsed = parse_access_token(&token, &SECRET).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let id = Uuid::new_v4();
        let token = generate_access_token(&id, &SECRET);
        let other = [8u8; 32];
        assert!(matches!(
            parse_access_token(&token, &other),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_id_rejected() {
        let id = Uuid::new_v4();
        let token = generate_access_token(&id, &SECRET);

        let other_id = Uuid::new_v4();
        let signature = token.split('.').nth(1).unwrap();
        let forged = format!("{}.{}", other_id, signature);

        assert!(matches!(
            parse_access_token(&forged, &SECRET),
            Err(IdentityError::InvalidToken)
        ));
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        for input in ["", "garbage", "a.b.c", "not-a-uuid.c2ln", "."] {
            assert!(
                matches!(
                    parse_access_token(input, &SECRET),
                    Err(IdentityError::InvalidToken)
                ),
                "expected {:?} to be rejected",
                input
            );
        }
    }
}
