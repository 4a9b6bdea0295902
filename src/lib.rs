//! Passive HTTP traffic observer for outbound clients.
//!
//! Wraps a client-shaped `tower::Service`, snapshots every request and
//! response into records, and hands the records to a reporting sink
//! while the observed call proceeds untouched.
//!
//! ```text
//! caller → ObserverLayer → UpstreamClient → network
//!               ↓
//!         NetworkReporter (LogReporter, ChannelReporter, ...)
//! ```

pub mod client;
pub mod config;
pub mod observe;
pub mod report;

pub use config::ObserverConfig;
pub use observe::ObserverLayer;
pub use report::NetworkReporter;
