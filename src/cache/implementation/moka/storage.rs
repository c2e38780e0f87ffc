use super::super::super::{key::*, storage::*};

use std::{convert::*, ops::*, sync::*};

//
// MokaStorage
//

/// Moka storage implementation.
///
/// Based on the `future` version of Moka cache. Eviction and expiration are configured on the
/// Moka cache itself. It never fails.
pub type MokaStorage<ResponseT> = Arc<moka::future::Cache<CacheKey, ResponseT>>;

impl<ResponseT> StorageAdapter<ResponseT> for MokaStorage<ResponseT>
where
    ResponseT: 'static + Clone + Send + Sync,
{
    type Error = Infallible;

    async fn exists(&self, key: &CacheKey) -> Result<bool, Self::Error> {
        Ok(self.deref().contains_key(key))
    }

    async fn read(&self, key: &CacheKey) -> Result<Option<ResponseT>, Self::Error> {
        Ok(self.deref().get(key).await)
    }

    async fn write(&self, key: CacheKey, response: ResponseT) -> Result<(), Self::Error> {
        self.deref().insert(key, response).await;
        Ok(())
    }
}
