mod common;

use {
    common::*,
    http::{Method, Request},
    tower::{Layer, ServiceExt},
    tower_http_client_cache::{cache::*, *},
};

fn get(url: &str) -> Request<()> {
    Request::builder()
        .method(Method::GET)
        .uri(url)
        .body(())
        .expect("request")
}

#[tokio::test]
async fn hit_skips_transport() {
    let storage = RecordingStorage::default();
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(storage.clone());

    let first = layer
        .layer(transport.clone())
        .oneshot(get("https://api.example.com/2/users/me?fields=id,name"))
        .await
        .expect("first");
    assert_eq!(first, "GET https://api.example.com/2/users/me #1");
    assert_eq!(storage.calls(), ["exists", "write"]);

    let second = layer
        .layer(transport.clone())
        .oneshot(get("https://api.example.com/2/users/me?fields=id,name"))
        .await
        .expect("second");
    assert_eq!(second, first);
    assert_eq!(transport.calls(), 1);
    assert_eq!(storage.calls(), ["exists", "write", "exists", "read"]);
}

#[tokio::test]
async fn query_order_does_not_matter() {
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(RecordingStorage::default());

    let first = layer
        .layer(transport.clone())
        .oneshot(get("https://api.example.com/search?q=rust&lang=en"))
        .await
        .expect("first");
    let second = layer
        .layer(transport.clone())
        .oneshot(get("https://api.example.com/search?lang=en&q=rust"))
        .await
        .expect("second");

    assert_eq!(first, second);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn post_passes_through() {
    let storage = RecordingStorage::default();
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(storage.clone());

    for _ in 0..2 {
        layer
            .layer(transport.clone())
            .oneshot(RequestDescriptor::new("POST", "https://api.example.com/tweets"))
            .await
            .expect("post");
    }

    assert_eq!(transport.calls(), 2);
    assert!(storage.calls().is_empty());
    assert_eq!(storage.len(), 0);
}

#[tokio::test]
async fn disabled_passes_through() {
    let transport = Transport::default();
    let layer = CachingLayer::<RecordingStorage, String>::default();

    for _ in 0..2 {
        layer
            .layer(transport.clone())
            .oneshot(RequestDescriptor::new("GET", "u"))
            .await
            .expect("get");
    }

    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn read_failure_is_not_a_miss() {
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(FailingStorage {
        fail_reads: true,
        fail_writes: false,
    });

    let error = layer
        .layer(transport.clone())
        .oneshot(RequestDescriptor::new("GET", "u"))
        .await
        .expect_err("read failure");

    assert!(error.is_storage());
    assert_eq!(error.to_string(), "cache storage: unreachable: exists");
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn write_failure_fails_the_request() {
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(FailingStorage {
        fail_reads: false,
        fail_writes: true,
    });

    let error = layer
        .layer(transport.clone())
        .oneshot(RequestDescriptor::new("GET", "u"))
        .await
        .expect_err("write failure");

    assert!(matches!(
        error,
        CachingError::Storage(StorageError::Unreachable(ref operation)) if operation == "write"
    ));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn failing_storage_is_ignored_for_post() {
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default().storage(FailingStorage {
        fail_reads: true,
        fail_writes: true,
    });

    let response = layer
        .layer(transport.clone())
        .oneshot(RequestDescriptor::new("POST", "u"))
        .await
        .expect("post");

    assert_eq!(response, "POST u #1");
}

#[tokio::test]
async fn key_prefix_and_custom_cacheability() {
    let storage = RecordingStorage::default();
    let transport = Transport::default();
    let layer = CachingLayer::<_, String>::default()
        .storage(storage.clone())
        .key_prefix("twitter:")
        .digest(DigestAlgorithm::Sha256)
        .cacheable_by_request(|context| {
            context.is_cacheable_by_default()
                || context.descriptor.method.eq_ignore_ascii_case("HEAD")
        });

    let head = RequestDescriptor::new("HEAD", "https://api.example.com/2/tweets");
    for _ in 0..2 {
        layer
            .layer(transport.clone())
            .oneshot(head.clone())
            .await
            .expect("head");
    }
    assert_eq!(transport.calls(), 1);

    let key = HookCoordinator::<_, String>::new(storage.clone())
        .key_prefix("twitter:")
        .digest(DigestAlgorithm::Sha256)
        .cache_key(&head);
    assert!(key.as_str().starts_with("twitter:"));
    assert_eq!(key.as_str().len(), "twitter:".len() + 64);
    assert_eq!(
        storage.entry(&key).as_deref(),
        Some("HEAD https://api.example.com/2/tweets #1")
    );
}

#[tokio::test]
async fn service_exposes_its_coordinator() {
    let storage = RecordingStorage::default();
    let transport = Transport::default();

    let disabled = CachingLayer::<RecordingStorage, String>::default().layer(transport.clone());
    assert!(disabled.coordinator().is_none());

    let service = CachingLayer::<_, String>::default()
        .storage(storage.clone())
        .key_prefix("app:")
        .layer(transport.clone());
    let coordinator = service.coordinator().expect("coordinator");

    let descriptor = RequestDescriptor::new("GET", "https://api.example.com/2/users/me");
    let key = coordinator.cache_key(&descriptor);
    assert!(key.as_str().starts_with("app:"));

    coordinator
        .storage()
        .write(key, "warmed".into())
        .await
        .expect("write");

    let response = service.oneshot(descriptor).await.expect("get");
    assert_eq!(response, "warmed");
    assert_eq!(transport.calls(), 0);
}
