//! Dispatch: send a typed request and classify the outcome.
//!
//! # Design
//! `HttpClient` holds a shared transport and a request builder, and nothing
//! per call — any number of sends may be in flight against one clone of the
//! client. The callback surface (`send_with`) and the awaitable surface
//! (`send`) both delegate to the single private `dispatch` routine, so the
//! two styles cannot drift apart in how they classify an outcome. Each call
//! completes exactly once: one success value or one `HttpError` kind.

use std::sync::Arc;

use crate::builder::RequestBuilder;
use crate::error::HttpError;
use crate::request::Request;
use crate::transport::{ReqwestTransport, Transport, TransportError};

/// Sends typed requests over a shared transport.
pub struct HttpClient<T: Transport = ReqwestTransport> {
    transport: Arc<T>,
    builder: RequestBuilder,
}

impl HttpClient<ReqwestTransport> {
    /// A client over a fresh reqwest-backed transport with no builder
    /// defaults.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new(), RequestBuilder::new())
    }
}

impl Default for HttpClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Clone for HttpClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            builder: self.builder.clone(),
        }
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(transport: T, builder: RequestBuilder) -> Self {
        Self {
            transport: Arc::new(transport),
            builder,
        }
    }

    /// Share a transport that the caller keeps a handle to.
    pub fn from_shared(transport: Arc<T>, builder: RequestBuilder) -> Self {
        Self { transport, builder }
    }

    /// Send the request and await its classified result.
    pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response, HttpError> {
        self.dispatch(request).await
    }

    /// Send the request and deliver the classified result to `on_complete`,
    /// invoked exactly once from a spawned task.
    ///
    /// The classification is identical to [`send`](Self::send). Must be
    /// called within a tokio runtime; panics otherwise, per
    /// `tokio::spawn`'s contract.
    pub fn send_with<R, F>(&self, request: R, on_complete: F)
    where
        R: Request + Send + Sync + 'static,
        R::Response: Send + 'static,
        F: FnOnce(Result<R::Response, HttpError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            let result = client.dispatch(&request).await;
            on_complete(result);
        });
    }

    /// The single classification routine behind both call surfaces.
    async fn dispatch<R: Request>(&self, request: &R) -> Result<R::Response, HttpError> {
        let wire = self.builder.build(request).map_err(|err| {
            tracing::warn!(error = %err, "request build failed");
            HttpError::from(err)
        })?;
        tracing::debug!(method = %wire.method, url = %wire.url, "dispatching request");

        let response = match self.transport.fetch(wire).await {
            Ok(response) => response,
            Err(TransportError::Timeout) => return Err(HttpError::Timeout { response: None }),
            Err(TransportError::Incomplete) => return Err(HttpError::FailedConnect),
            Err(err) => return Err(HttpError::Network(err)),
        };
        tracing::debug!(status = response.status, "received response");

        match response.status {
            200..=299 => request.parse(&response).map_err(HttpError::Parse),
            401 => Err(HttpError::Unauthorized { response }),
            403 => Err(HttpError::Forbidden { response }),
            408 => Err(HttpError::Timeout { response: Some(response) }),
            _ => Err(HttpError::BadStatus { response }),
        }
    }
}
