//! Embed configuration assembly
//!
//! Turns [`RawParameters`] into the typed [`NormalizedConfiguration`] that the
//! rest of the importer reads from the configuration store.

use serde::Serialize;
use tracing::info;

use crate::coerce::{str_to_boolean, str_to_default_boolean, str_to_optional_boolean};
use crate::config::store::ConfigStore;
use crate::constants::{defaults, param};
use crate::json::validate_json;
use crate::params::RawParameters;

/// Typed embed configuration as published to the configuration store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedConfiguration {
    pub importer_id: String,

    // Canonical JSON text, or empty when absent or malformed
    pub metadata: String,
    pub template: String,
    pub css_overrides: String,

    pub modal_is_open: bool,
    pub on_complete: bool,
    pub wait_on_complete: bool,
    pub show_import_loading_status: bool,

    /// `None` means the host did not say; consumers pick their own behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_header_row_selection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemaless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemaless_read_only: Option<bool>,

    pub is_modal: bool,
    pub show_download_template_button: bool,
}

/// Pick the source for `modalIsOpen` before coercion
/// The deprecated `isOpen` is only used when `modalIsOpen` is empty
pub fn resolve_modal_is_open<'a>(modal_is_open: &'a str, is_open: &'a str) -> &'a str {
    if modal_is_open.is_empty() && !is_open.is_empty() {
        is_open
    } else {
        modal_is_open
    }
}

/// Build the normalized configuration; a pure function of `raw`
pub fn assemble(raw: &RawParameters) -> NormalizedConfiguration {
    NormalizedConfiguration {
        importer_id: raw.importer_id.clone(),
        metadata: validate_json(&raw.metadata, param::METADATA),
        template: validate_json(&raw.template, param::TEMPLATE),
        css_overrides: validate_json(&raw.css_overrides, param::CSS_OVERRIDES),
        modal_is_open: str_to_boolean(resolve_modal_is_open(&raw.modal_is_open, &raw.is_open)),
        on_complete: str_to_boolean(&raw.on_complete),
        wait_on_complete: str_to_boolean(&raw.wait_on_complete),
        show_import_loading_status: str_to_boolean(&raw.show_import_loading_status),
        skip_header_row_selection: str_to_optional_boolean(&raw.skip_header_row_selection),
        schemaless: str_to_optional_boolean(&raw.schemaless),
        schemaless_read_only: str_to_optional_boolean(&raw.schemaless_read_only),
        is_modal: str_to_default_boolean(&raw.is_modal, defaults::IS_MODAL),
        show_download_template_button: str_to_default_boolean(
            &raw.show_download_template_button,
            defaults::SHOW_DOWNLOAD_TEMPLATE_BUTTON,
        ),
    }
}

/// Assemble and hand the result to the store in a single write
pub fn publish(raw: &RawParameters, store: &mut dyn ConfigStore) {
    let config = assemble(raw);
    info!(importer_id = %config.importer_id, has_metadata = !config.metadata.is_empty(), "Publishing embed configuration");
    store.set_embed_params(config);
}
