//! Traffic observation subsystem.
//!
//! # Data Flow
//! ```text
//! host builds a client stack:
//!     ObserverLayer::new(reporter)  (layer.rs)
//!         .layer(client service)
//!
//! per call:
//!     id.rs mints the call identifier
//!     capture.rs buffers bodies and builds records
//!     layer.rs orders the emissions around the inner call
//! ```
//!
//! # Design Decisions
//! - Observation is a `tower::Layer` so it composes with any client stack
//! - The observer owns no I/O; the wrapped service does the sending

pub mod capture;
pub mod id;
pub mod layer;

pub use capture::CaptureError;
pub use id::{IdGenerator, UuidIds};
pub use layer::{ObserverLayer, ObserverService};
