use super::{descriptor::*, hooks::*, key::*};

//
// CachingConfiguration
//

/// Caching configuration.
#[derive(Clone, Default)]
pub struct CachingConfiguration {
    /// Cache key derivation.
    pub keys: CacheKeyDeriver,

    /// Cacheable by request (hook).
    ///
    /// Replaces the default rule (GET only) when set.
    pub cacheable_by_request: Option<CacheableHook>,
}

impl CachingConfiguration {
    /// Whether a request is cacheable.
    ///
    /// Calls the `cacheable_by_request` hook if set.
    pub fn is_cacheable(&self, descriptor: &RequestDescriptor) -> bool {
        let context = CacheableHookContext::new(descriptor);
        match &self.cacheable_by_request {
            Some(cacheable) => cacheable(context),
            None => context.is_cacheable_by_default(),
        }
    }
}
