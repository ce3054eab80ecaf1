//! Configuration management for the importer embed
//!
//! This module provides two halves:
//! - **embed**: assembly of the typed configuration from raw parameters
//! - **store**: the store contract the configuration is published to

pub mod embed;
pub mod store;

// Re-export commonly used types
pub use embed::{NormalizedConfiguration, assemble, publish, resolve_modal_is_open};
pub use store::{ConfigStore, MemoryConfigStore};
