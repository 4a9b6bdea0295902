//! Configuration schema definitions.
//!
//! This module defines the observer's configuration structure. All types
//! derive Serde traits so hosts can embed them in their own config files.

use serde::{Deserialize, Serialize};

/// Observer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Ceiling in bytes on captured request and response bodies. Bodies
    /// longer than this are recorded as a prefix; the call itself always
    /// carries the full payload.
    pub max_body_bytes: usize,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_max_body_bytes() -> usize {
    100 * 1024 // 100 KiB
}
