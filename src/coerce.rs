//! String to boolean coercion for embed parameters
//!
//! All three policies share one truthiness rule: the value is `true` iff it is
//! `"true"` (any case) or `"1"`. They differ only in what an empty value means.

use crate::constants::truthy;

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case(truthy::TRUE_WORD) || value == truthy::ONE
}

/// Strict coercion: empty and unrecognized values are `false`
pub fn str_to_boolean(value: &str) -> bool {
    !value.is_empty() && is_truthy(value)
}

/// Optional coercion: empty means unset (`None`), which is distinct from `false`
pub fn str_to_optional_boolean(value: &str) -> Option<bool> {
    if value.is_empty() {
        None
    } else {
        Some(is_truthy(value))
    }
}

/// Defaulted coercion: empty yields the caller's default
pub fn str_to_default_boolean(value: &str, default: bool) -> bool {
    if value.is_empty() {
        default
    } else {
        is_truthy(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strict_truthy_values() {
        assert!(str_to_boolean("true"));
        assert!(str_to_boolean("TRUE"));
        assert!(str_to_boolean("True"));
        assert!(str_to_boolean("1"));
    }

    #[test]
    fn test_strict_falsy_values() {
        assert!(!str_to_boolean(""));
        assert!(!str_to_boolean("false"));
        assert!(!str_to_boolean("0"));
        assert!(!str_to_boolean("yes"));
        assert!(!str_to_boolean(" true"));
        assert!(!str_to_boolean("11"));
    }

    #[test]
    fn test_optional_empty_is_unset() {
        assert_eq!(str_to_optional_boolean(""), None);
        assert_eq!(str_to_optional_boolean("false"), Some(false));
        assert_eq!(str_to_optional_boolean("tRuE"), Some(true));
        assert_eq!(str_to_optional_boolean("garbage"), Some(false));
    }

    #[test]
    fn test_default_empty_uses_default() {
        assert!(str_to_default_boolean("", true));
        assert!(!str_to_default_boolean("", false));
        // Non-empty values ignore the default entirely
        assert!(!str_to_default_boolean("false", true));
        assert!(!str_to_default_boolean("nope", true));
        assert!(str_to_default_boolean("1", false));
    }

    proptest! {
        #[test]
        fn prop_strict_matches_case_folded_set(s in ".*") {
            let folded = s.to_lowercase();
            let expected = folded == "true" || folded == "1";
            prop_assert_eq!(str_to_boolean(&s), expected);
        }

        #[test]
        fn prop_optional_agrees_with_strict_when_present(s in ".+") {
            prop_assert_eq!(str_to_optional_boolean(&s), Some(str_to_boolean(&s)));
        }

        #[test]
        fn prop_default_agrees_with_strict_when_present(s in ".+", default in any::<bool>()) {
            prop_assert_eq!(str_to_default_boolean(&s, default), str_to_boolean(&s));
        }
    }
}
