use super::{super::descriptor::*, canonical::*, digest::*, key::*};

use kutil::std::immutable::*;

//
// CacheKeyDeriver
//

/// Derives [CacheKey] for a [RequestDescriptor].
///
/// The derivation is deterministic: the method (uppercased), the URL, and digests of the
/// [canonicalized](canonicalize) `params` and `query` are combined into one string, which is
/// digested again and appended to the prefix:
///
/// ```text
/// prefix + digest("<METHOD> <url> <digest(params)> | <digest(query)>")
/// ```
///
/// Digesting twice keeps the key length constant regardless of the parameters' size.
#[derive(Clone, Debug)]
pub struct CacheKeyDeriver {
    /// Key prefix.
    ///
    /// Lets several caches (or cache generations) share a store.
    pub prefix: ByteString,

    /// Digest algorithm.
    pub digest: DigestAlgorithm,
}

impl CacheKeyDeriver {
    /// Constructor.
    pub fn new(prefix: ByteString, digest: DigestAlgorithm) -> Self {
        Self { prefix, digest }
    }

    /// Derive the cache key.
    pub fn derive(&self, descriptor: &RequestDescriptor) -> CacheKey {
        let params_hash = self.digest.hex_digest(&canonicalize(&descriptor.params));
        let query_hash = self.digest.hex_digest(&canonicalize(&descriptor.query));

        let composite = format!(
            "{} {} {} | {}",
            descriptor.method.to_uppercase(),
            descriptor.url,
            params_hash,
            query_hash
        );

        let key = format!("{}{}", self.prefix, self.digest.hex_digest(&composite));
        CacheKey::from(key.as_str())
    }
}

impl Default for CacheKeyDeriver {
    fn default() -> Self {
        Self::new("".into(), Default::default())
    }
}
