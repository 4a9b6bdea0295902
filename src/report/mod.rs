//! Record reporting subsystem.
//!
//! # Data Flow
//! ```text
//! observer captures a call
//!     → RequestRecord / ResponseRecord (types.rs)
//!     → NetworkReporter (sink.rs, chosen by the host application)
//!         → LogReporter      (log.rs, tracing events)
//!         → ChannelReporter  (channel.rs, bounded mpsc to a consumer)
//! ```
//!
//! # Design Decisions
//! - Records are plain data; sinks decide transport and encoding
//! - Reporting is fire-and-forget so the observed call never waits on it

pub mod channel;
pub mod log;
pub mod sink;
pub mod types;

pub use channel::{ChannelReporter, NetworkEvent};
pub use log::LogReporter;
pub use sink::NetworkReporter;
pub use types::{Header, RequestRecord, ResponseRecord};
