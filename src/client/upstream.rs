//! Outbound HTTP client adapter.
//!
//! # Responsibilities
//! - Wrap the pooled hyper client in a `tower::Service` shape
//! - Normalize the response body type so middleware sees one `Body`
//!
//! # Design Decisions
//! - The client is pooled and cheap to clone; one instance per process
//!   is the intended usage

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tower::{BoxError, Service};

/// Plain outbound HTTP client in the shape the observer wraps.
///
/// Requests must carry absolute URIs; connection pooling is handled by
/// the underlying hyper client.
#[derive(Clone)]
pub struct UpstreamClient {
    inner: Client<HttpConnector, Body>,
}

impl UpstreamClient {
    pub fn new() -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { inner }
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for UpstreamClient {
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response<Body>, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // The pooled client has no readiness state of its own.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let client = self.inner.clone();
        Box::pin(async move {
            let response = client.request(request).await?;
            Ok(response.map(Body::new))
        })
    }
}
