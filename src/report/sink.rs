//! Reporting sink trait.
//!
//! # Responsibilities
//! - Define the seam between capture and delivery
//! - Keep delivery fire-and-forget so capture never blocks on a sink
//!
//! # Design Decisions
//! - Sinks receive owned records; the observer keeps nothing after handoff
//! - No return value: a sink that wants to fail must do so internally
//!   (log, drop, count) rather than disturb the observed call

use super::types::{RequestRecord, ResponseRecord};

/// Destination for captured traffic records.
///
/// Implementations must be cheap and non-blocking; both methods are called
/// inline on the request path. Anything slow (serialization for a socket,
/// disk writes) belongs behind a channel, see
/// [`ChannelReporter`](super::channel::ChannelReporter).
pub trait NetworkReporter: Send + Sync {
    /// Called with the request snapshot before the request goes out.
    fn report_request(&self, record: RequestRecord);

    /// Called with the response snapshot once the exchange completes.
    /// Never called for a request whose exchange failed.
    fn report_response(&self, record: ResponseRecord);
}
