use std::fmt;

/// Hex chars of the blake3 digest kept in a fingerprint.
const FINGERPRINT_HEX_LEN: usize = 16;

/// Log-safe identity of a text: a truncated blake3 digest plus its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFingerprint {
    pub digest: String,
    pub chars: usize,
}

impl fmt::Display for TextFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}c", self.digest, self.chars)
    }
}

/// Fingerprint a text for logging.
pub fn fingerprint(text: &str) -> TextFingerprint {
    let hash = blake3::hash(text.as_bytes()).to_hex();
    TextFingerprint {
        digest: hash[..FINGERPRINT_HEX_LEN].to_string(),
        chars: text.chars().count(),
    }
}
