#![forbid(unsafe_code)]
//! Embed parameter normalization for the importer
//!
//! Reads the embed's query parameters, normalizes them into a typed
//! configuration for the configuration store, and applies the visual
//! parameters (color mode, style variables) to the host's theme state.

pub mod coerce;
pub mod config;
pub mod constants;
pub mod embed;
pub mod json;
pub mod params;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use config::{ConfigStore, MemoryConfigStore, NormalizedConfiguration};
pub use embed::{Embed, EmbedHost, UpdateReport};
pub use params::RawParameters;
pub use theme::{ColorModeToggle, StyleScope, ThemeMode, ThemeStore};
