//! Observer middleware.
//!
//! # Responsibilities
//! - Wrap any client-shaped `tower::Service` without changing its behavior
//! - Mint one identifier per call and stamp it on both records
//! - Emit the request record before the request leaves the process
//! - Emit the response record after the exchange completes
//! - Propagate transport and body failures to the caller untouched
//!
//! # Data Flow
//! ```text
//! caller request
//!     → buffer body, emit RequestRecord → reporter
//!     → inner service sends the request upstream
//!     → response arrives (timestamp taken here)
//!     → buffer body, emit ResponseRecord → reporter
//!     → caller receives the rebuilt response
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use futures_util::future::BoxFuture;
use tower::{BoxError, Layer, Service};

use crate::config::validation::{validate, ConfigError};
use crate::config::ObserverConfig;
use crate::observe::capture;
use crate::observe::id::{IdGenerator, UuidIds};
use crate::report::NetworkReporter;

/// Layer that attaches traffic observation to a client service stack.
///
/// Configuration is fixed at construction; every service produced by this
/// layer shares the same reporter and identifier source.
#[derive(Clone)]
pub struct ObserverLayer {
    reporter: Arc<dyn NetworkReporter>,
    ids: Arc<dyn IdGenerator>,
    max_body_bytes: usize,
}

impl ObserverLayer {
    /// Create a layer with default settings: random UUID identifiers and
    /// the default captured-body ceiling.
    pub fn new(reporter: Arc<dyn NetworkReporter>) -> Self {
        Self {
            reporter,
            ids: Arc::new(UuidIds::new()),
            max_body_bytes: ObserverConfig::default().max_body_bytes,
        }
    }

    /// Create a layer from a validated configuration.
    pub fn from_config(
        config: &ObserverConfig,
        reporter: Arc<dyn NetworkReporter>,
    ) -> Result<Self, ConfigError> {
        validate(config)?;
        Ok(Self::new(reporter).with_max_body_bytes(config.max_body_bytes))
    }

    /// Override the captured-body ceiling in bytes.
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Override the identifier source. Tests use this to get a
    /// deterministic sequence.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

impl<S> Layer<S> for ObserverLayer {
    type Service = ObserverService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ObserverService {
            inner,
            reporter: self.reporter.clone(),
            ids: self.ids.clone(),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Service produced by [`ObserverLayer`].
///
/// Bodies are buffered in full on both sides so capture and the wire see
/// the same bytes. Do not put this in front of unbounded streaming
/// exchanges.
#[derive(Clone)]
pub struct ObserverService<S> {
    inner: S,
    reporter: Arc<dyn NetworkReporter>,
    ids: Arc<dyn IdGenerator>,
    max_body_bytes: usize,
}

impl<S> Service<Request<Body>> for ObserverService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response<Body>, BoxError>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        // Move the service that was driven to readiness into the future
        // and leave a fresh clone behind for the next call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let reporter = self.reporter.clone();
        let ids = self.ids.clone();
        let max_body_bytes = self.max_body_bytes;

        Box::pin(async move {
            let id = ids.next_id();
            let started_ms = capture::now_millis();

            let (parts, body) = request.into_parts();
            let body_bytes = capture::buffer_request_body(body).await?;

            reporter.report_request(capture::request_record(
                id.clone(),
                started_ms,
                &parts,
                &body_bytes,
                max_body_bytes,
            ));

            let request = Request::from_parts(parts, Body::from(body_bytes));
            let response = inner.call(request).await.map_err(Into::into)?;

            // Timestamp the handoff from the transport, before capture
            // spends time buffering the response body.
            let received_ms = capture::now_millis();

            let (parts, body) = response.into_parts();
            let body_bytes = capture::buffer_response_body(body).await?;

            reporter.report_response(capture::response_record(
                id,
                received_ms,
                &parts,
                &body_bytes,
                max_body_bytes,
            ));

            Ok(Response::from_parts(parts, Body::from(body_bytes)))
        })
    }
}
