//! Channel-backed reporting sink.
//!
//! # Data Flow
//! ```text
//! observer (request path)
//!     → ChannelReporter::report_*  (non-blocking try_send)
//!     → bounded mpsc queue
//!     → consumer task (UI bridge, file writer, test collector)
//! ```
//!
//! # Design Decisions
//! - Bounded queue so a stalled consumer cannot grow memory without limit
//! - Records are dropped (with a warning) when the queue is full; the
//!   observed call is never delayed or failed by reporting pressure

use tokio::sync::mpsc;

use super::sink::NetworkReporter;
use super::types::{RequestRecord, ResponseRecord};

/// A captured record in channel form.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    Request(RequestRecord),
    Response(ResponseRecord),
}

/// Sink that forwards records into a bounded in-process channel.
pub struct ChannelReporter {
    tx: mpsc::Sender<NetworkEvent>,
}

impl ChannelReporter {
    /// Create a reporter and the receiving end for a consumer task.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl NetworkReporter for ChannelReporter {
    fn report_request(&self, record: RequestRecord) {
        if self.tx.try_send(NetworkEvent::Request(record)).is_err() {
            tracing::warn!("Record channel full or closed, dropping request record");
        }
    }

    fn report_response(&self, record: ResponseRecord) {
        if self.tx.try_send(NetworkEvent::Response(record)).is_err() {
            tracing::warn!("Record channel full or closed, dropping response record");
        }
    }
}
