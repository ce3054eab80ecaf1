//! Embed-wide constants
//!
//! Parameter names, style variable names and literals shared by the reader,
//! the assembler and the side-effect applier.

/// Query parameter names accepted by the embed
pub mod param {
    pub const IMPORTER_ID: &str = "importerId";
    pub const DARK_MODE: &str = "darkMode";
    pub const PRIMARY_COLOR: &str = "primaryColor";
    pub const METADATA: &str = "metadata";
    pub const TEMPLATE: &str = "template";
    pub const IS_MODAL: &str = "isModal";

    /// Deprecated alias for [`MODAL_IS_OPEN`]
    pub const IS_OPEN: &str = "isOpen";

    pub const MODAL_IS_OPEN: &str = "modalIsOpen";
    pub const ON_COMPLETE: &str = "onComplete";
    pub const WAIT_ON_COMPLETE: &str = "waitOnComplete";
    pub const CUSTOM_STYLES: &str = "customStyles";
    pub const SHOW_IMPORT_LOADING_STATUS: &str = "showImportLoadingStatus";
    pub const SKIP_HEADER_ROW_SELECTION: &str = "skipHeaderRowSelection";
    pub const CSS_OVERRIDES: &str = "cssOverrides";
    pub const SCHEMALESS: &str = "schemaless";
    pub const SCHEMALESS_READ_ONLY: &str = "schemalessReadOnly";
    pub const SHOW_DOWNLOAD_TEMPLATE_BUTTON: &str = "showDownloadTemplateButton";
}

/// Boolean coercion literals
pub mod truthy {
    /// Case-insensitive truthy word
    pub const TRUE_WORD: &str = "true";

    /// Truthy digit
    pub const ONE: &str = "1";
}

/// Document-level style variables
pub mod style {
    /// Variable written from the `primaryColor` parameter
    pub const COLOR_PRIMARY: &str = "--color-primary";

    /// Prefix prepended to every custom style key
    pub const CUSTOM_PREFIX: &str = "--";

    /// Stringified `undefined` sent by some host serializers in place of a missing value
    pub const UNDEFINED_LITERAL: &str = "undefined";
}

/// Default values for defaulted boolean parameters
pub mod defaults {
    pub const IS_MODAL: bool = true;
    pub const SHOW_DOWNLOAD_TEMPLATE_BUTTON: bool = true;
}
