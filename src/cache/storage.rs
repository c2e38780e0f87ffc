use super::key::*;

use std::error::Error;

//
// StorageAdapter
//

/// Storage for cached responses.
///
/// The hooks never create, iterate, or remove entries on their own: per request they perform an
/// existence check and a read (before the request) or a single write (after the response).
/// Eviction, expiration, and size bounds are all up to the implementation.
///
/// Implementations should ensure that cloning is cheap and clones always refer to the same shared
/// state. They are shared by all concurrent requests and are responsible for their own locking.
///
/// Errors are propagated to the caller as is. Implementations that would rather treat failures as
/// cache misses should swallow them themselves.
#[allow(async_fn_in_trait)]
pub trait StorageAdapter<ResponseT>
where
    Self: 'static + Clone + Send + Sync,
{
    /// Error.
    type Error: Error + Send + Sync + 'static;

    /// Whether an entry exists.
    ///
    /// Note that this is an `async` function written in longer form in order to include the `Send`
    /// constraint. Implementations can simply use `async fn exists`.
    fn exists(&self, key: &CacheKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Read an entry.
    ///
    /// Note that this is an `async` function written in longer form in order to include the `Send`
    /// constraint. Implementations can simply use `async fn read`.
    fn read(
        &self,
        key: &CacheKey,
    ) -> impl Future<Output = Result<Option<ResponseT>, Self::Error>> + Send;

    /// Write an entry, replacing any previous entry for the key.
    ///
    /// Note that this is an `async` function written in longer form in order to include the `Send`
    /// constraint. Implementations can simply use `async fn write`.
    fn write(
        &self,
        key: CacheKey,
        response: ResponseT,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
