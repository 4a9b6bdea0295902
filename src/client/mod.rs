//! Outbound client subsystem.

pub mod upstream;

pub use upstream::UpstreamClient;
