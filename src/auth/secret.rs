//! Signing secret derivation.

/// The key material fed to HMAC.
///
/// Secret keys may be issued in the structured form `STATUS;TYPE;TOKEN`. When
/// the configured key has exactly three `;`-separated parts, only `TOKEN` signs;
/// any other key signs as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn derive(secret_key: &str) -> Self {
        let parts: Vec<&str> = secret_key.split(';').collect();
        match parts.as_slice() {
            [_status, _kind, token] => Self(token.to_string()),
            _ => Self(secret_key.to_string()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_key_uses_token() {
        assert_eq!(SigningSecret::derive("LIVE;SK;tok123").as_str(), "tok123");
    }

    #[test]
    fn test_plain_key_is_unchanged() {
        assert_eq!(SigningSecret::derive("plainsecret").as_str(), "plainsecret");
    }

    #[test]
    fn test_four_parts_is_unchanged() {
        assert_eq!(SigningSecret::derive("A;B;C;D").as_str(), "A;B;C;D");
    }

    #[test]
    fn test_two_parts_is_unchanged() {
        assert_eq!(SigningSecret::derive("A;B").as_str(), "A;B");
    }

    #[test]
    fn test_empty_token_part() {
        assert_eq!(SigningSecret::derive("A;B;").as_str(), "");
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug = format!("{:?}", SigningSecret::derive("LIVE;SK;tok123"));
        assert!(!debug.contains("tok123"));
    }
}
