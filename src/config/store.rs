//! Configuration store contract
//!
//! The store is owned by the host application. The embed only ever writes the
//! whole configuration at once.

use tracing::debug;

use crate::config::embed::NormalizedConfiguration;

/// Destination for published embed configuration
pub trait ConfigStore {
    /// Replace the stored configuration in one write
    fn set_embed_params(&mut self, config: NormalizedConfiguration);
}

/// In-memory configuration store
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    current: Option<NormalizedConfiguration>,
    writes: usize,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last published configuration, if any
    pub fn current(&self) -> Option<&NormalizedConfiguration> {
        self.current.as_ref()
    }

    /// Number of writes received
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ConfigStore for MemoryConfigStore {
    fn set_embed_params(&mut self, config: NormalizedConfiguration) {
        self.writes += 1;
        debug!(writes = self.writes, "Stored embed configuration");
        self.current = Some(config);
    }
}
