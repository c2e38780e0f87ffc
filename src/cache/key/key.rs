use super::super::weight::*;

use {
    kutil::std::immutable::*,
    std::fmt,
};

//
// CacheKey
//

/// Cache key.
///
/// A lowercase hex digest preceded by the key prefix (if any). Cloning is cheap.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CacheKey(ByteString);

impl CacheKey {
    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.into())
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl CacheWeight for CacheKey {
    fn cache_weight(&self) -> usize {
        const SELF_SIZE: usize = size_of::<CacheKey>();
        SELF_SIZE + self.as_str().len()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), formatter)
    }
}
