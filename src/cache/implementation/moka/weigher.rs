use super::super::super::{key::*, weight::*};

/// Moka cache entry weigher.
pub fn weigher<ResponseT>(cache_key: &CacheKey, response: &ResponseT) -> u32
where
    ResponseT: CacheWeight,
{
    let weight = cache_key.cache_weight() + response.cache_weight();
    let weight = weight.try_into().unwrap_or(u32::MAX);
    tracing::debug!("{} for {}", weight, cache_key);
    weight
}
