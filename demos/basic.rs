use {
    http::{Method, Request},
    moka::future::Cache,
    std::convert::*,
    tokio::*,
    tower::{service_fn, *},
    tower_http_client_cache::{
        cache::{implementation::moka::*, *},
        *,
    },
    tracing_subscriber::{filter::*, *},
};

// Caching layer in front of a (fake) HTTP client
//
// Pay attention to the tracing log to see what our layer and the cache are doing!
//
//   cargo run --example basic --features moka
//
// Set RUST_LOG to change the log level (the default is "debug")

// Note that this is *not* a promise for the actual maximum memory use,
// but is rather a limit for the total of cache entry weights, which are themselves estimates
const CACHE_SIZE: u64 = 1024 * 1024; // 1 MiB

#[main]
async fn main() -> Result<(), BoxError> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Construct a Moka cache according to your preferences

    let cache = Cache::<CacheKey, String>::builder()
        .name("http-client")
        .for_cached_responses()
        .max_capacity(CACHE_SIZE)
        .build();

    let storage = MokaStorage::new(cache);

    // Stands in for a real client, e.g. one built on hyper

    let transport = service_fn(|request: Request<()>| async move {
        tracing::info!("transport: {} {}", request.method(), request.uri());
        Ok::<_, Infallible>(format!("response for {}", request.uri()))
    });

    let mut client = ServiceBuilder::new()
        .layer(
            CachingLayer::<_, String>::default()
                .storage(storage)
                .key_prefix("demo:"),
        )
        .service(transport);

    for (method, uri) in [
        (Method::GET, "https://api.example.com/2/users/me?fields=id&expansions=pinned"),
        // Same query parameters in a different order: a cache hit
        (Method::GET, "https://api.example.com/2/users/me?expansions=pinned&fields=id"),
        (Method::GET, "https://api.example.com/2/users/me"),
        // Never cached
        (Method::POST, "https://api.example.com/2/tweets"),
        (Method::POST, "https://api.example.com/2/tweets"),
    ] {
        let request = Request::builder().method(method).uri(uri).body(())?;
        let response = client.ready().await?.call(request).await?;
        tracing::info!("response: {}", response);
    }

    Ok(())
}
