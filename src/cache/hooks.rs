use super::descriptor::*;

use std::sync::*;

/// Hook to check if a request is cacheable.
pub type CacheableHook = Arc<Box<dyn Fn(CacheableHookContext) -> bool + Send + Sync>>;

//
// CacheableHookContext
//

/// Context for [CacheableHook].
#[derive(Clone, Debug)]
pub struct CacheableHookContext<'this> {
    /// Request descriptor.
    pub descriptor: &'this RequestDescriptor,
}

impl<'this> CacheableHookContext<'this> {
    /// Constructor.
    pub fn new(descriptor: &'this RequestDescriptor) -> Self {
        Self { descriptor }
    }

    /// The default rule: only GET requests are cacheable.
    ///
    /// Other methods might have side effects.
    pub fn is_cacheable_by_default(&self) -> bool {
        self.descriptor.is_get()
    }
}
