//! Body buffering and record construction.
//!
//! # Responsibilities
//! - Buffer request/response bodies so capture never consumes them
//! - Truncate captured payloads to the configured ceiling
//! - Flatten header maps into record entries, duplicates intact
//! - Build the records handed to reporting sinks
//!
//! # Design Decisions
//! - Bodies are buffered in full and rebuilt from the same bytes, so the
//!   forwarded request and returned response carry exactly the caller's
//!   payload while the record holds only a bounded prefix
//! - Truncation is silent; the byte count on the record is the signal

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::{to_bytes, Body};
use axum::http::{request, response, HeaderMap};
use bytes::Bytes;
use thiserror::Error;

use crate::report::types::{Header, RequestRecord, ResponseRecord};

/// Errors that can occur while buffering a body for capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The request body stream failed before it was fully read.
    #[error("request body read failed: {0}")]
    RequestBody(#[source] axum::Error),

    /// The response body stream failed before it was fully read.
    #[error("response body read failed: {0}")]
    ResponseBody(#[source] axum::Error),
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Collect an entire request body into memory.
pub(crate) async fn buffer_request_body(body: Body) -> Result<Bytes, CaptureError> {
    to_bytes(body, usize::MAX).await.map_err(CaptureError::RequestBody)
}

/// Collect an entire response body into memory.
pub(crate) async fn buffer_response_body(body: Body) -> Result<Bytes, CaptureError> {
    to_bytes(body, usize::MAX).await.map_err(CaptureError::ResponseBody)
}

/// Flatten a header map into record entries.
///
/// `HeaderMap::iter` yields one pair per value, repeating the name for
/// multi-valued headers, which is exactly the shape records want.
pub(crate) fn convert_headers(headers: &HeaderMap) -> Vec<Header> {
    headers
        .iter()
        .map(|(name, value)| Header {
            name: name.as_str().to_string(),
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })
        .collect()
}

/// First `max` bytes of a buffered body, as a cheap slice of the shared
/// buffer.
pub(crate) fn body_prefix(bytes: &Bytes, max: usize) -> Bytes {
    bytes.slice(..bytes.len().min(max))
}

/// Build the request snapshot from buffered parts.
pub(crate) fn request_record(
    id: String,
    timestamp_ms: u64,
    parts: &request::Parts,
    body: &Bytes,
    max_body_bytes: usize,
) -> RequestRecord {
    RequestRecord {
        id,
        timestamp_ms,
        method: parts.method.to_string(),
        uri: parts.uri.to_string(),
        headers: convert_headers(&parts.headers),
        body: if body.is_empty() {
            None
        } else {
            Some(body_prefix(body, max_body_bytes))
        },
    }
}

/// Build the response snapshot from buffered parts.
pub(crate) fn response_record(
    id: String,
    timestamp_ms: u64,
    parts: &response::Parts,
    body: &Bytes,
    max_body_bytes: usize,
) -> ResponseRecord {
    ResponseRecord {
        id,
        timestamp_ms,
        status: parts.status.as_u16(),
        headers: convert_headers(&parts.headers),
        body: body_prefix(body, max_body_bytes),
    }
}
