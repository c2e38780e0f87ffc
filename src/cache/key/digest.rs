use {
    md5::Md5,
    sha2::{Digest, Sha256},
    std::fmt,
};

//
// DigestAlgorithm
//

/// Digest algorithm used for cache keys.
///
/// Used for fingerprinting only, not for security. Note that the key format depends on the
/// algorithm, so changing it invalidates all keys in persistent storage.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DigestAlgorithm {
    /// MD5 (32 hex characters).
    #[default]
    Md5,

    /// SHA-256 (64 hex characters).
    Sha256,
}

impl DigestAlgorithm {
    /// Length of the hex digest.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }

    /// Lowercase hex digest of a string.
    pub fn hex_digest(&self, string: &str) -> String {
        match self {
            Self::Md5 => format!("{:x}", Md5::digest(string.as_bytes())),
            Self::Sha256 => format!("{:x}", Sha256::digest(string.as_bytes())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(
            match self {
                Self::Md5 => "md5",
                Self::Sha256 => "sha256",
            },
            formatter,
        )
    }
}
