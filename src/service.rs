use super::{cache::*, error::*};

use {
    kutil::std::future::*,
    std::{mem, result::Result, task::*},
    tower::*,
};

//
// CachingService
//

/// HTTP client response caching service.
///
/// You will often be using [CachingLayer](super::CachingLayer) rather than this service directly,
/// thus this service's functionality is documented there.
pub struct CachingService<InnerServiceT, StorageT, ResponseT> {
    inner_service: InnerServiceT,
    coordinator: Option<HookCoordinator<StorageT, ResponseT>>,
}

impl<InnerServiceT, StorageT, ResponseT> CachingService<InnerServiceT, StorageT, ResponseT>
where
    StorageT: StorageAdapter<ResponseT>,
    ResponseT: Clone + Send + Sync,
{
    /// Constructor.
    ///
    /// Without storage all requests are passed through to the inner service.
    pub fn new(
        inner_service: InnerServiceT,
        storage: Option<StorageT>,
        configuration: CachingConfiguration,
    ) -> Self {
        Self {
            inner_service,
            coordinator: storage.map(|storage| HookCoordinator::new_with(storage, configuration)),
        }
    }

    /// Coordinator.
    pub fn coordinator(&self) -> Option<&HookCoordinator<StorageT, ResponseT>> {
        self.coordinator.as_ref()
    }

    // Clone while keeping `inner_service`.
    //
    // See: https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
    fn clone_and_keep_inner_service(&mut self) -> Self
    where
        InnerServiceT: Clone,
    {
        let mut clone = self.clone();
        clone.inner_service = mem::replace(&mut self.inner_service, clone.inner_service);
        clone
    }

    // Handle request.
    async fn handle<RequestT>(
        mut self,
        request: RequestT,
    ) -> Result<ResponseT, CachingError<InnerServiceT::Error, StorageT::Error>>
    where
        InnerServiceT: Service<RequestT, Response = ResponseT>,
        RequestT: DescribeRequest,
    {
        let Some(coordinator) = self.coordinator.take() else {
            tracing::debug!("skip (disabled)");
            return self
                .inner_service
                .call(request)
                .await
                .map_err(CachingError::Transport);
        };

        // Capture the descriptor before moving the request to the inner service
        let descriptor = request.describe();

        if let Some(cached_response) = coordinator
            .before_request(&descriptor)
            .await
            .map_err(CachingError::Storage)?
        {
            return Ok(cached_response);
        }

        let response = self
            .inner_service
            .call(request)
            .await
            .map_err(CachingError::Transport)?;

        coordinator
            .after_request(&descriptor, &response)
            .await
            .map_err(CachingError::Storage)?;

        Ok(response)
    }
}

impl<InnerServiceT, StorageT, ResponseT> Clone for CachingService<InnerServiceT, StorageT, ResponseT>
where
    InnerServiceT: Clone,
    StorageT: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner_service: self.inner_service.clone(),
            coordinator: self.coordinator.clone(),
        }
    }
}

impl<InnerServiceT, RequestT, StorageT, ResponseT> Service<RequestT>
    for CachingService<InnerServiceT, StorageT, ResponseT>
where
    InnerServiceT: 'static + Service<RequestT, Response = ResponseT> + Clone + Send,
    InnerServiceT::Future: Send,
    RequestT: 'static + DescribeRequest + Send,
    StorageT: StorageAdapter<ResponseT>,
    ResponseT: 'static + Clone + Send + Sync,
{
    type Response = ResponseT;
    type Error = CachingError<InnerServiceT::Error, StorageT::Error>;
    type Future = CapturedFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, context: &mut Context) -> Poll<Result<(), Self::Error>> {
        // Even if we end up with a cache hit we cannot know that in advance, so we must depend on
        // the inner service being ready
        self.inner_service
            .poll_ready(context)
            .map_err(CachingError::Transport)
    }

    fn call(&mut self, request: RequestT) -> Self::Future {
        // We must clone the `&mut self` because it cannot be sent to the future as is
        let cloned_self = self.clone_and_keep_inner_service();
        capture_async! { cloned_self.handle(request).await }
    }
}
