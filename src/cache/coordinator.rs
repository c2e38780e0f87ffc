use super::{configuration::*, descriptor::*, hooks::*, key::*, storage::*};

use std::{marker::*, sync::*};

//
// HookCoordinator
//

/// Drives the cache around a request's lifecycle.
///
/// Call [before_request](Self::before_request) before dispatching the request. If it returns a
/// response then that is the cached response, and the request should *not* be dispatched.
/// Otherwise dispatch it and call [after_request](Self::after_request) with the response.
///
/// Only cacheable requests ever touch the storage. By default that means GET requests, but see
/// [cacheable_by_request](Self::cacheable_by_request).
///
/// There is no locking between concurrent requests with the same key: they may all miss, and all
/// write, in which case the last write wins.
pub struct HookCoordinator<StorageT, ResponseT> {
    storage: StorageT,
    configuration: CachingConfiguration,
    response: PhantomData<fn() -> ResponseT>,
}

impl<StorageT, ResponseT> HookCoordinator<StorageT, ResponseT>
where
    StorageT: StorageAdapter<ResponseT>,
    ResponseT: Clone + Send + Sync,
{
    /// Constructor.
    pub fn new(storage: StorageT) -> Self {
        Self::new_with(storage, Default::default())
    }

    /// Constructor.
    pub fn new_with(storage: StorageT, configuration: CachingConfiguration) -> Self {
        Self {
            storage,
            configuration,
            response: PhantomData,
        }
    }

    /// Prefix for all cache keys.
    ///
    /// The default is empty.
    pub fn key_prefix(mut self, key_prefix: &str) -> Self {
        self.configuration.keys.prefix = key_prefix.into();
        self
    }

    /// Digest algorithm for cache keys.
    ///
    /// The default is [Md5](DigestAlgorithm::Md5).
    pub fn digest(mut self, digest: DigestAlgorithm) -> Self {
        self.configuration.keys.digest = digest;
        self
    }

    /// Provide a hook to test whether a request is cacheable.
    ///
    /// It *replaces* the default rule (only GET is cacheable), which is still available via
    /// [CacheableHookContext::is_cacheable_by_default].
    ///
    /// [None] by default.
    pub fn cacheable_by_request(
        mut self,
        cacheable_by_request: impl Fn(CacheableHookContext) -> bool + 'static + Send + Sync,
    ) -> Self {
        self.configuration.cacheable_by_request = Some(Arc::new(Box::new(cacheable_by_request)));
        self
    }

    /// Storage.
    pub fn storage(&self) -> &StorageT {
        &self.storage
    }

    /// Configuration.
    pub fn configuration(&self) -> &CachingConfiguration {
        &self.configuration
    }

    /// Whether a request is cacheable.
    pub fn is_cacheable(&self, descriptor: &RequestDescriptor) -> bool {
        self.configuration.is_cacheable(descriptor)
    }

    /// The cache key for a request.
    ///
    /// Identical to the key used by the hooks, so it can be used to access the storage directly.
    pub fn cache_key(&self, descriptor: &RequestDescriptor) -> CacheKey {
        self.configuration.keys.derive(descriptor)
    }

    /// To be called before the request is dispatched.
    ///
    /// Returns the cached response, if there is one. Storage errors are returned as is and are
    /// *not* treated as misses.
    pub async fn before_request(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Option<ResponseT>, StorageT::Error> {
        if !self.is_cacheable(descriptor) {
            tracing::debug!("skip (non-cacheable {})", descriptor.method);
            return Ok(None);
        }

        let key = self.cache_key(descriptor);

        if self.storage.exists(&key).await? {
            let response = self.storage.read(&key).await?;
            if response.is_some() {
                tracing::debug!("hit: {}", key);
            } else {
                // Removed between the two calls
                tracing::debug!("miss (gone): {}", key);
            }
            Ok(response)
        } else {
            tracing::debug!("miss: {}", key);
            Ok(None)
        }
    }

    /// To be called after the response is received.
    ///
    /// Stores the response for cacheable requests, replacing any existing entry.
    pub async fn after_request(
        &self,
        descriptor: &RequestDescriptor,
        response: &ResponseT,
    ) -> Result<(), StorageT::Error> {
        if !self.is_cacheable(descriptor) {
            return Ok(());
        }

        let key = self.cache_key(descriptor);
        tracing::debug!("store: {}", key);
        self.storage.write(key, response.clone()).await
    }
}

impl<StorageT, ResponseT> Clone for HookCoordinator<StorageT, ResponseT>
where
    StorageT: Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            configuration: self.configuration.clone(),
            response: PhantomData,
        }
    }
}
