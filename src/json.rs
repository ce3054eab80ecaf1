//! JSON validation for opaque JSON-bearing parameters
//!
//! Values are never stored as received: a parameter either round-trips
//! through `serde_json::Value` into its canonical form or is dropped.

use serde_json::Value;
use tracing::error;

/// Validate and canonicalize a JSON parameter
///
/// Empty input means "no value" and returns an empty string without logging.
/// Malformed input is logged with `label` and also returns an empty string.
pub fn validate_json(value: &str, label: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    match serde_json::from_str::<Value>(value) {
        Ok(parsed) => parsed.to_string(),
        Err(e) => {
            error!(param = %label, error = %e, "The parameter {label} could not be parsed as JSON");
            String::new()
        }
    }
}
