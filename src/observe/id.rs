//! Call identifier generation.

use uuid::Uuid;

/// Source of per-call identifiers.
///
/// The observer mints one identifier per call and stamps it onto both the
/// request and response records so consumers can pair them. Injected as a
/// trait so tests can substitute a deterministic sequence.
pub trait IdGenerator: Send + Sync {
    /// Produce the identifier for the next observed call.
    fn next_id(&self) -> String;
}

/// Default generator backed by random UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl UuidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
