//! Visual side effects driven by embed parameters

use serde_json::Value;
use tracing::{debug, error, info};

use crate::coerce::str_to_boolean;
use crate::constants::style;
use crate::theme::{ColorModeToggle, StyleScope, ThemeMode, ThemeStore};

/// Result of applying the custom style map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomStylesOutcome {
    /// Nothing to apply: empty, stringified `undefined`, or valid JSON that is not an object
    Skipped,
    /// Number of variables written
    Applied(usize),
    /// Malformed JSON; nothing was written
    Invalid,
}

/// Converge the theme store and the host color mode on the `darkMode` flag
/// Returns true if the host toggle was invoked
pub fn sync_dark_mode(
    dark_mode: &str,
    theme: &mut dyn ThemeStore,
    color_mode: &mut dyn ColorModeToggle,
) -> bool {
    let desired = ThemeMode::from_dark(str_to_boolean(dark_mode));
    theme.set_theme(desired);

    if color_mode.color_mode() == desired {
        debug!(mode = %desired, "Host color mode already converged");
        return false;
    }

    info!(mode = %desired, "Toggling host color mode");
    color_mode.toggle_color_mode();
    true
}

/// Set `--color-primary`; the value is passed through unchecked
pub fn apply_primary_color(primary_color: &str, scope: &mut dyn StyleScope) -> bool {
    if primary_color.is_empty() {
        return false;
    }
    scope.set_property(style::COLOR_PRIMARY, primary_color);
    true
}

/// Write one `--<key>` variable per entry of the custom style object
pub fn apply_custom_styles(custom_styles: &str, scope: &mut dyn StyleScope) -> CustomStylesOutcome {
    if custom_styles.is_empty() || custom_styles == style::UNDEFINED_LITERAL {
        return CustomStylesOutcome::Skipped;
    }

    let entries = match serde_json::from_str::<Value>(custom_styles) {
        Ok(Value::Object(entries)) => entries,
        Ok(other) => {
            debug!(kind = json_kind(&other), "Custom styles are not an object, nothing to apply");
            return CustomStylesOutcome::Skipped;
        }
        Err(e) => {
            error!(error = %e, "The \"customStyles\" prop is not a valid JSON string. Please check the documentation for more details.");
            return CustomStylesOutcome::Invalid;
        }
    };

    for (key, value) in &entries {
        let name = format!("{}{key}", style::CUSTOM_PREFIX);
        match value {
            Value::Null => scope.remove_property(&name),
            Value::String(s) => scope.set_property(&name, s),
            other => scope.set_property(&name, &other.to_string()),
        }
    }

    info!(count = entries.len(), "Applied custom styles");
    CustomStylesOutcome::Applied(entries.len())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
