use super::{
    super::super::{key::*, weight::*},
    weigher::*,
};

//
// ForCachedResponses
//

/// Add support for [CacheWeight] weigher.
pub trait ForCachedResponses
where
    Self: Sized,
{
    /// Add support for [CacheWeight] weigher.
    ///
    /// Use together with `max_capacity` to bound the cache by estimated size rather than by entry
    /// count.
    fn for_cached_responses(self) -> Self;
}

impl<ResponseT> ForCachedResponses
    for moka::future::CacheBuilder<CacheKey, ResponseT, moka::future::Cache<CacheKey, ResponseT>>
where
    ResponseT: 'static + CacheWeight + Clone + Send + Sync,
{
    fn for_cached_responses(self) -> Self {
        self.weigher(weigher::<ResponseT>)
    }
}
