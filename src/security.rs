use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

// =============================================================================
// Session tokens
// =============================================================================

/// Sign a username into a session token
///
/// Format: `hex(username) "." hex(HMAC-SHA256(username, secret))`. The
/// username is hex-encoded so any byte sequence survives the cookie.
pub fn sign_session(username: &str, secret: &str) -> String {
    let signature = match mac_for(secret) {
        Some(mut mac) => {
            mac.update(username.as_bytes());
            hex::encode(mac.finalize().into_bytes())
        }
        None => String::new(),
    };
    format!("{}.{}", hex::encode(username.as_bytes()), signature)
}

/// Recover the username from a session token if its signature checks out
pub fn verify_session(token: &str, secret: &str) -> Option<String> {
    let (encoded_user, signature) = token.split_once('.')?;

    let username_bytes = match hex::decode(encoded_user) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Invalid hex username in session token");
            return None;
        }
    };

    if !verify_hmac(&username_bytes, signature, secret) {
        tracing::warn!("Session token with invalid signature");
        return None;
    }

    String::from_utf8(username_bytes).ok()
}

/// Verify an HMAC-SHA256 signature given as hex
pub fn verify_hmac(data: &[u8], signature: &str, secret: &str) -> bool {
    let mut mac = match mac_for(secret) {
        Some(m) => m,
        None => return false,
    };

    mac.update(data);

    let sig_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Invalid hex signature format");
            return false;
        }
    };

    // Constant-time comparison
    mac.verify_slice(&sig_bytes).is_ok()
}

fn mac_for(secret: &str) -> Option<HmacSha256> {
    match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => Some(m),
        Err(_) => {
            tracing::error!("Failed to create HMAC instance");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key";

    #[test]
    fn test_session_round_trip() {
        let token = sign_session("alice", SECRET);
        assert_eq!(verify_session(&token, SECRET), Some("alice".to_string()));
    }

    #[test]
    fn test_session_rejects_other_secret() {
        let token = sign_session("alice", SECRET);
        assert_eq!(verify_session(&token, "another-secret"), None);
    }

    #[test]
    fn test_session_rejects_swapped_username() {
        let token = sign_session("alice", SECRET);
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", hex::encode("mallory"), signature);
        assert_eq!(verify_session(&forged, SECRET), None);
    }

    #[test]
    fn test_session_rejects_malformed_tokens() {
        assert_eq!(verify_session("", SECRET), None);
        assert_eq!(verify_session("no-dot", SECRET), None);
        assert_eq!(verify_session("zz.zz", SECRET), None);
        assert_eq!(verify_session(&format!("{}.", hex::encode("alice")), SECRET), None);
    }

    #[test]
    fn test_session_handles_non_ascii_usernames() {
        let token = sign_session("élodie; path=/", SECRET);
        assert!(!token.contains(';'));
        assert_eq!(
            verify_session(&token, SECRET),
            Some("élodie; path=/".to_string())
        );
    }
}
