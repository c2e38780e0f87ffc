use thiserror::*;

//
// CachingError
//

/// [CachingService](super::CachingService) error.
#[derive(Debug, Error)]
pub enum CachingError<TransportErrorT, StorageErrorT> {
    /// Inner service (transport) error.
    #[error("transport: {0}")]
    Transport(TransportErrorT),

    /// Storage error.
    ///
    /// Note that the request may well have succeeded.
    #[error("cache storage: {0}")]
    Storage(StorageErrorT),
}

impl<TransportErrorT, StorageErrorT> CachingError<TransportErrorT, StorageErrorT> {
    /// Whether this is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Whether this is a transport error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
