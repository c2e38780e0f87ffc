#![allow(dead_code)]

use {
    std::{
        collections::HashMap,
        convert::Infallible,
        future::{Ready, ready},
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        task::{Context, Poll},
    },
    thiserror::Error,
    tower::Service,
    tower_http_client_cache::cache::*,
};

//
// RecordingStorage
//

/// In-memory storage that records every call.
#[derive(Clone, Default)]
pub struct RecordingStorage {
    pub entries: Arc<Mutex<HashMap<CacheKey, String>>>,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingStorage {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn entry(&self, key: &CacheKey) -> Option<String> {
        self.entries.lock().expect("lock").get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("lock").len()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("lock").push(call);
    }
}

impl StorageAdapter<String> for RecordingStorage {
    type Error = Infallible;

    async fn exists(&self, key: &CacheKey) -> Result<bool, Self::Error> {
        self.record("exists");
        Ok(self.entries.lock().expect("lock").contains_key(key))
    }

    async fn read(&self, key: &CacheKey) -> Result<Option<String>, Self::Error> {
        self.record("read");
        Ok(self.entry(key))
    }

    async fn write(&self, key: CacheKey, response: String) -> Result<(), Self::Error> {
        self.record("write");
        self.entries.lock().expect("lock").insert(key, response);
        Ok(())
    }
}

//
// FailingStorage
//

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// Storage that fails the selected operations.
#[derive(Clone, Default)]
pub struct FailingStorage {
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl StorageAdapter<String> for FailingStorage {
    type Error = StorageError;

    async fn exists(&self, _key: &CacheKey) -> Result<bool, Self::Error> {
        if self.fail_reads {
            Err(StorageError::Unreachable("exists".into()))
        } else {
            Ok(false)
        }
    }

    async fn read(&self, _key: &CacheKey) -> Result<Option<String>, Self::Error> {
        if self.fail_reads {
            Err(StorageError::Unreachable("read".into()))
        } else {
            Ok(None)
        }
    }

    async fn write(&self, _key: CacheKey, _response: String) -> Result<(), Self::Error> {
        if self.fail_writes {
            Err(StorageError::Unreachable("write".into()))
        } else {
            Ok(())
        }
    }
}

//
// Transport
//

/// Counts transport calls.
#[derive(Clone, Default)]
pub struct Transport {
    pub calls: Arc<AtomicUsize>,
}

impl Transport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Responds with "<METHOD> <url>" and a call counter.
    pub fn respond(&self, descriptor: &RequestDescriptor) -> String {
        let count = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{} {} #{}", descriptor.method, descriptor.url, count)
    }
}

impl<RequestT> Service<RequestT> for Transport
where
    RequestT: DescribeRequest,
{
    type Response = String;
    type Error = Infallible;
    type Future = Ready<Result<String, Infallible>>;

    fn poll_ready(&mut self, _context: &mut Context) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RequestT) -> Self::Future {
        ready(Ok(self.respond(&request.describe())))
    }
}
