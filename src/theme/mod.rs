//! Theme and document style contracts
//!
//! The theme store, the document style scope and the host color-mode toggle
//! are shared with the rest of the host application. The embed is one writer
//! among several and only touches the entries it owns.

pub mod apply;

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

pub use apply::{CustomStylesOutcome, apply_custom_styles, apply_primary_color, sync_dark_mode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

/// Application theme store
pub trait ThemeStore {
    fn theme(&self) -> ThemeMode;
    fn set_theme(&mut self, mode: ThemeMode);
}

/// Document-level style variables (`--name: value`)
pub trait StyleScope {
    fn property(&self, name: &str) -> Option<&str>;
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

/// Color-mode primitive owned by the host UI framework
pub trait ColorModeToggle {
    fn color_mode(&self) -> ThemeMode;

    /// Flip between light and dark
    fn toggle_color_mode(&mut self);
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: ThemeMode,
}

impl MemoryThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

/// In-memory document style scope
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentStyle {
    properties: BTreeMap<String, String>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleScope for DocumentStyle {
    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn set_property(&mut self, name: &str, value: &str) {
        debug!(name = %name, value = %value, "Set style property");
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        if self.properties.remove(name).is_some() {
            debug!(name = %name, "Removed style property");
        }
    }
}

/// Host color mode with a toggle counter
#[derive(Debug, Default)]
pub struct HostColorMode {
    mode: ThemeMode,
    toggles: usize,
}

impl HostColorMode {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode, toggles: 0 }
    }

    /// How many times the toggle has been invoked
    pub fn toggles(&self) -> usize {
        self.toggles
    }
}

impl ColorModeToggle for HostColorMode {
    fn color_mode(&self) -> ThemeMode {
        self.mode
    }

    fn toggle_color_mode(&mut self) {
        self.toggles += 1;
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}
