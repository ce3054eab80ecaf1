//! Raw embed parameters as read from the embed URL
//!
//! Every known parameter is a plain `String`; a parameter that is not present
//! is an empty string, never a missing value.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use url::{ParseError, Url};

use crate::constants::param;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawParameters {
    pub importer_id: String,
    pub dark_mode: String,
    pub primary_color: String,
    pub metadata: String,
    pub template: String,
    pub is_modal: String,
    /// Deprecated: superseded by `modal_is_open`
    pub is_open: String,
    pub modal_is_open: String,
    pub on_complete: String,
    pub wait_on_complete: String,
    pub custom_styles: String,
    pub show_import_loading_status: String,
    pub skip_header_row_selection: String,
    pub css_overrides: String,
    pub schemaless: String,
    pub schemaless_read_only: String,
    pub show_download_template_button: String,
}

impl RawParameters {
    /// Build from a bare query string (`a=1&b=2`), with or without a leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Accept either a full URL or a bare query string
    /// Anything `Url` rejects as relative is read as a query string
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        match Url::parse(input) {
            Ok(url) => Ok(Self::from_pairs(url.query_pairs())),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Self::from_query(input)),
            Err(e) => Err(e).context(format!("Failed to parse embed URL: {input}")),
        }
    }

    /// Build from a JSON object keyed by parameter name
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str::<Self>(input).context("Failed to parse embed parameters as a JSON object")
    }

    /// Build from decoded key/value pairs
    /// The first occurrence of a key wins; unknown keys are ignored
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::default();
        let mut seen: Vec<&'static str> = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            match params.slot_mut(key) {
                Some((name, slot)) => {
                    if seen.contains(&name) {
                        debug!(param = %name, "Ignoring repeated parameter");
                        continue;
                    }
                    seen.push(name);
                    *slot = value.as_ref().to_string();
                }
                None => debug!(param = %key, "Ignoring unknown parameter"),
            }
        }

        params
    }

    fn slot_mut(&mut self, key: &str) -> Option<(&'static str, &mut String)> {
        let slot = match key {
            param::IMPORTER_ID => (param::IMPORTER_ID, &mut self.importer_id),
            param::DARK_MODE => (param::DARK_MODE, &mut self.dark_mode),
            param::PRIMARY_COLOR => (param::PRIMARY_COLOR, &mut self.primary_color),
            param::METADATA => (param::METADATA, &mut self.metadata),
            param::TEMPLATE => (param::TEMPLATE, &mut self.template),
            param::IS_MODAL => (param::IS_MODAL, &mut self.is_modal),
            param::IS_OPEN => (param::IS_OPEN, &mut self.is_open),
            param::MODAL_IS_OPEN => (param::MODAL_IS_OPEN, &mut self.modal_is_open),
            param::ON_COMPLETE => (param::ON_COMPLETE, &mut self.on_complete),
            param::WAIT_ON_COMPLETE => (param::WAIT_ON_COMPLETE, &mut self.wait_on_complete),
            param::CUSTOM_STYLES => (param::CUSTOM_STYLES, &mut self.custom_styles),
            param::SHOW_IMPORT_LOADING_STATUS => {
                (param::SHOW_IMPORT_LOADING_STATUS, &mut self.show_import_loading_status)
            }
            param::SKIP_HEADER_ROW_SELECTION => {
                (param::SKIP_HEADER_ROW_SELECTION, &mut self.skip_header_row_selection)
            }
            param::CSS_OVERRIDES => (param::CSS_OVERRIDES, &mut self.css_overrides),
            param::SCHEMALESS => (param::SCHEMALESS, &mut self.schemaless),
            param::SCHEMALESS_READ_ONLY => (param::SCHEMALESS_READ_ONLY, &mut self.schemaless_read_only),
            param::SHOW_DOWNLOAD_TEMPLATE_BUTTON => {
                (param::SHOW_DOWNLOAD_TEMPLATE_BUTTON, &mut self.show_download_template_button)
            }
            _ => return None,
        };
        Some(slot)
    }
}
