use super::{key::*, storage::*};

//
// TieredStorage
//

/// Two-tiered [StorageAdapter].
///
/// The assumption is that the first storage is faster than the next.
///
/// For more tiers you can chain this type.
#[derive(Clone, Debug)]
pub struct TieredStorage<FirstStorageT, NextStorageT> {
    /// First storage.
    pub first: FirstStorageT,

    /// Next storage.
    pub next: NextStorageT,
}

impl<FirstStorageT, NextStorageT> TieredStorage<FirstStorageT, NextStorageT> {
    /// Constructor.
    pub fn new(first: FirstStorageT, next: NextStorageT) -> Self {
        Self { first, next }
    }
}

impl<ResponseT, FirstStorageT, NextStorageT> StorageAdapter<ResponseT>
    for TieredStorage<FirstStorageT, NextStorageT>
where
    ResponseT: Clone + Send + Sync,
    FirstStorageT: StorageAdapter<ResponseT>,
    NextStorageT: StorageAdapter<ResponseT, Error = FirstStorageT::Error>,
{
    type Error = FirstStorageT::Error;

    async fn exists(&self, key: &CacheKey) -> Result<bool, Self::Error> {
        Ok(self.first.exists(key).await? || self.next.exists(key).await?)
    }

    async fn read(&self, key: &CacheKey) -> Result<Option<ResponseT>, Self::Error> {
        match self.first.read(key).await? {
            Some(response) => Ok(Some(response)),
            None => self.next.read(key).await,
        }
    }

    async fn write(&self, key: CacheKey, response: ResponseT) -> Result<(), Self::Error> {
        self.first.write(key.clone(), response.clone()).await?;
        self.next.write(key, response).await
    }
}
