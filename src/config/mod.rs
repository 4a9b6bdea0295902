//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! host config document (any serde format)
//!     → schema.rs (deserialize, fill defaults)
//!     → validation.rs (semantic checks)
//!     → ObserverLayer::from_config (accepted, then immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a layer is built from it
//! - All fields have defaults so an absent section means "observe with
//!   stock settings"

pub mod schema;
pub mod validation;

pub use schema::ObserverConfig;
pub use validation::ConfigError;
