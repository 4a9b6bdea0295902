//! Record type definitions.
//!
//! This module defines the wire-shaped records handed to reporting sinks.
//! All types derive Serde traits so sinks can serialize records for
//! transport to an out-of-process debugging UI.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A single header entry.
///
/// Headers are kept as an ordered list of name/value pairs rather than a
/// map so that repeated names (e.g. multiple `set-cookie` lines) survive
/// as distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name, lowercased by the HTTP layer.
    pub name: String,

    /// Header value, lossily decoded for display.
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of an outbound request, emitted before the request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Identifier shared with the matching [`ResponseRecord`].
    pub id: String,

    /// Capture time as milliseconds since the Unix epoch.
    pub timestamp_ms: u64,

    /// Request method (e.g. "GET").
    pub method: String,

    /// Full request URI as the caller supplied it.
    pub uri: String,

    /// All request headers, duplicates preserved.
    pub headers: Vec<Header>,

    /// Captured body prefix, `None` when the request carried no body.
    /// Never longer than the configured capture ceiling.
    pub body: Option<Bytes>,
}

/// Snapshot of the matching response, emitted after the exchange completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Identifier of the request this response answers.
    pub id: String,

    /// When the transport handed the response back, as milliseconds since
    /// the Unix epoch.
    pub timestamp_ms: u64,

    /// HTTP status code.
    pub status: u16,

    /// All response headers, duplicates preserved.
    pub headers: Vec<Header>,

    /// Captured body prefix. Empty when the response carried no body.
    /// Never longer than the configured capture ceiling.
    pub body: Bytes,
}
