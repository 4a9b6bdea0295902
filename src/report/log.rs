//! Tracing-backed reporting sink.

use super::sink::NetworkReporter;
use super::types::{RequestRecord, ResponseRecord};

/// Sink that emits each record as a structured `tracing` event.
///
/// Useful as a default during development: pair it with an `EnvFilter`
/// of `network_observer=debug` to see captured traffic in the log stream.
#[derive(Debug, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkReporter for LogReporter {
    fn report_request(&self, record: RequestRecord) {
        tracing::debug!(
            id = %record.id,
            method = %record.method,
            uri = %record.uri,
            header_count = record.headers.len(),
            body_bytes = record.body.as_ref().map(|b| b.len()).unwrap_or(0),
            "Request observed"
        );
    }

    fn report_response(&self, record: ResponseRecord) {
        tracing::debug!(
            id = %record.id,
            status = record.status,
            header_count = record.headers.len(),
            body_bytes = record.body.len(),
            "Response observed"
        );
    }
}
