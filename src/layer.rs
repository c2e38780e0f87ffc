use super::{cache::*, service::*};

use {
    std::{marker::*, sync::*},
    tower::*,
};

//
// CachingLayer
//

/// HTTP client response caching layer.
///
/// This layer configures and installs a [CachingService] in front of a client service (the
/// transport). The storage is provided as a generic type parameter, see [StorageAdapter].
///
/// Requests are any type implementing [DescribeRequest], notably [http::Request] and
/// [RequestDescriptor] itself. Responses are any [Clone] type. A clone of the response is stored,
/// and a clone of the stored response is returned on a cache hit.
///
/// For more information and usage examples see the
/// [home page](https://github.com/tliron/tower-http-client-cache).
///
/// Request handling
/// ================
///
/// 1. A request arrives. If no storage was configured then pass it through to the inner service.
///    END.
///
/// 2. Check if it is cacheable. By default only GET requests (with the method compared
///    case-insensitively) are cacheable, because other methods might have side effects. You can
///    replace this rule via the [cacheable_by_request](Self::cacheable_by_request) hook.
///
///    If it is non-cacheable then pass it through to the inner service without touching the
///    storage at all. END.
///
/// 3. Derive the cache key. See [CacheKeyDeriver] for the algorithm. The key is independent of
///    the order of parameters and query parameters.
///
/// 4. If the storage has an entry for the key then return it. The inner service is *not*
///    called. END.
///
/// 5. Otherwise call the inner service. If it succeeds, write its response to the storage
///    (replacing any existing entry) and return it. END.
///
/// Notes
/// =====
///
/// 1. Storage errors are returned as [CachingError::Storage]. They are never treated as cache
///    misses, so a failing storage fails the request even if the inner service could have
///    succeeded. If you want otherwise then wrap your storage with your own error handling.
///
/// 2. Concurrent requests with the same cache key are not deduplicated: they may all miss, all
///    call the inner service, and all write to the storage, in which case the last write wins.
///
/// 3. There are no timeouts here. A storage operation that never completes will hang the request.
///
/// 4. This layer does *not* own the storage, meaning that you can insert entries according to
///    application events other than requests. Use
///    [HookCoordinator::cache_key](super::cache::HookCoordinator::cache_key) to get the same key
///    that this layer would use.
pub struct CachingLayer<StorageT, ResponseT> {
    storage: Option<StorageT>,
    configuration: CachingConfiguration,
    response: PhantomData<fn() -> ResponseT>,
}

impl<StorageT, ResponseT> CachingLayer<StorageT, ResponseT>
where
    StorageT: StorageAdapter<ResponseT>,
{
    /// Enable cache.
    ///
    /// Not enabled by default.
    pub fn storage(mut self, storage: StorageT) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Prefix for all cache keys.
    ///
    /// Useful for sharing a storage between several caches, or for switching to a new "generation"
    /// of entries.
    ///
    /// The default is empty.
    pub fn key_prefix(mut self, key_prefix: &str) -> Self {
        self.configuration.keys.prefix = key_prefix.into();
        self
    }

    /// Digest algorithm for cache keys.
    ///
    /// Changing it invalidates all existing entries in persistent storage, as they will never be
    /// looked up again.
    ///
    /// The default is [Md5](DigestAlgorithm::Md5).
    pub fn digest(mut self, digest: DigestAlgorithm) -> Self {
        self.configuration.keys.digest = digest;
        self
    }

    /// Provide a hook to test whether a request is cacheable.
    ///
    /// Note that it *replaces* the default rule (only GET is cacheable). You can call
    /// [CacheableHookContext::is_cacheable_by_default] to extend it rather than replace it.
    ///
    /// [None] by default.
    pub fn cacheable_by_request(
        mut self,
        cacheable_by_request: impl Fn(CacheableHookContext) -> bool + 'static + Send + Sync,
    ) -> Self {
        self.configuration.cacheable_by_request = Some(Arc::new(Box::new(cacheable_by_request)));
        self
    }
}

impl<StorageT, ResponseT> Default for CachingLayer<StorageT, ResponseT> {
    fn default() -> Self {
        Self {
            storage: None,
            configuration: Default::default(),
            response: PhantomData,
        }
    }
}

impl<StorageT, ResponseT> Clone for CachingLayer<StorageT, ResponseT>
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

impl<InnerServiceT, StorageT, ResponseT> Layer<InnerServiceT> for CachingLayer<StorageT, ResponseT>
where
    StorageT: StorageAdapter<ResponseT>,
    ResponseT: Clone + Send + Sync,
{
    type Service = CachingService<InnerServiceT, StorageT, ResponseT>;

    fn layer(&self, inner_service: InnerServiceT) -> Self::Service {
        CachingService::new(
            inner_service,
            self.storage.clone(),
            self.configuration.clone(),
        )
    }
}
