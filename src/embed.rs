//! Reactive embed driver
//!
//! Re-evaluates each side effect only when its own inputs change by value.
//! The first update after construction behaves as mount and runs everything.

use serde::Serialize;
use tracing::debug;

use crate::coerce::str_to_boolean;
use crate::config::{ConfigStore, publish};
use crate::params::RawParameters;
use crate::theme::{
    ColorModeToggle, CustomStylesOutcome, StyleScope, ThemeStore, apply_custom_styles,
    apply_primary_color, sync_dark_mode,
};

/// Shared host collaborators, borrowed for the duration of one update
pub struct EmbedHost<'a> {
    pub config: &'a mut dyn ConfigStore,
    pub theme: &'a mut dyn ThemeStore,
    pub style: &'a mut dyn StyleScope,
    pub color_mode: &'a mut dyn ColorModeToggle,
}

/// What ran during one update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReport {
    pub published: bool,
    /// `Some(toggled)` when dark-mode sync ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_synced: Option<bool>,
    /// `Some(set)` when the primary color reaction ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color_applied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_outcome")]
    pub custom_styles: Option<CustomStylesOutcome>,
}

impl UpdateReport {
    /// True if no reaction ran
    pub fn is_idle(&self) -> bool {
        *self == UpdateReport::default()
    }
}

fn serialize_outcome<S>(outcome: &Option<CustomStylesOutcome>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match outcome {
        Some(CustomStylesOutcome::Skipped) => serializer.serialize_str("skipped"),
        Some(CustomStylesOutcome::Invalid) => serializer.serialize_str("invalid"),
        Some(CustomStylesOutcome::Applied(n)) => serializer.serialize_u64(*n as u64),
        None => serializer.serialize_none(),
    }
}

/// Last-seen dependency values per reaction
#[derive(Debug, Default)]
struct Dependencies {
    publish: Option<(String, String)>,
    dark_mode: Option<bool>,
    primary_color: Option<String>,
    custom_styles: Option<String>,
}

#[derive(Debug, Default)]
pub struct Embed {
    deps: Dependencies,
    unmounted: bool,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        !self.unmounted
    }

    /// Stop all future reactions
    pub fn unmount(&mut self) {
        debug!("Embed unmounted");
        self.unmounted = true;
    }

    /// Run every reaction whose dependencies changed since the last update
    ///
    /// Configuration is republished only when `importerId` or `metadata`
    /// changes; other configuration parameters are read once per mount.
    pub fn update(&mut self, params: &RawParameters, host: &mut EmbedHost<'_>) -> UpdateReport {
        let mut report = UpdateReport::default();
        if self.unmounted {
            debug!("Ignoring update after unmount");
            return report;
        }

        let publish_key = (params.importer_id.clone(), params.metadata.clone());
        if self.deps.publish.as_ref() != Some(&publish_key) {
            publish(params, &mut *host.config);
            self.deps.publish = Some(publish_key);
            report.published = true;
        }

        let dark_mode = str_to_boolean(&params.dark_mode);
        if self.deps.dark_mode != Some(dark_mode) {
            let toggled = sync_dark_mode(&params.dark_mode, &mut *host.theme, &mut *host.color_mode);
            self.deps.dark_mode = Some(dark_mode);
            report.dark_mode_synced = Some(toggled);
        }

        if self.deps.primary_color.as_deref() != Some(params.primary_color.as_str()) {
            let applied = apply_primary_color(&params.primary_color, &mut *host.style);
            self.deps.primary_color = Some(params.primary_color.clone());
            report.primary_color_applied = Some(applied);
        }

        if self.deps.custom_styles.as_deref() != Some(params.custom_styles.as_str()) {
            let outcome = apply_custom_styles(&params.custom_styles, &mut *host.style);
            self.deps.custom_styles = Some(params.custom_styles.clone());
            report.custom_styles = Some(outcome);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;
    use crate::theme::{DocumentStyle, HostColorMode, MemoryThemeStore, ThemeMode};

    struct Fixture {
        config: MemoryConfigStore,
        theme: MemoryThemeStore,
        style: DocumentStyle,
        color_mode: HostColorMode,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: MemoryConfigStore::new(),
                theme: MemoryThemeStore::default(),
                style: DocumentStyle::new(),
                color_mode: HostColorMode::new(ThemeMode::Light),
            }
        }

        fn update(&mut self, embed: &mut Embed, query: &str) -> UpdateReport {
            let params = RawParameters::from_query(query);
            let mut host = EmbedHost {
                config: &mut self.config,
                theme: &mut self.theme,
                style: &mut self.style,
                color_mode: &mut self.color_mode,
            };
            embed.update(&params, &mut host)
        }
    }

    #[test]
    fn test_mount_runs_every_reaction() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        let report = fx.update(&mut embed, "importerId=a&darkMode=1&primaryColor=red");
        assert!(report.published);
        assert_eq!(report.dark_mode_synced, Some(true));
        assert_eq!(report.primary_color_applied, Some(true));
        assert_eq!(report.custom_styles, Some(CustomStylesOutcome::Skipped));

        assert_eq!(fx.config.writes(), 1);
        assert_eq!(fx.theme.theme(), ThemeMode::Dark);
        assert_eq!(fx.color_mode.toggles(), 1);
        assert_eq!(fx.style.property("--color-primary"), Some("red"));
    }

    #[test]
    fn test_same_parameters_run_nothing() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        fx.update(&mut embed, "importerId=a&darkMode=1");
        let report = fx.update(&mut embed, "importerId=a&darkMode=1");
        assert!(report.is_idle());
        assert_eq!(fx.config.writes(), 1);
        assert_eq!(fx.color_mode.toggles(), 1);
    }

    #[test]
    fn test_other_config_changes_do_not_republish() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        fx.update(&mut embed, "importerId=a&onComplete=false");
        let report = fx.update(&mut embed, "importerId=a&onComplete=true");
        assert!(!report.published);
        assert_eq!(fx.config.writes(), 1);
        assert!(!fx.config.current().unwrap().on_complete);
    }

    #[test]
    fn test_metadata_change_republishes() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        fx.update(&mut embed, "importerId=a&onComplete=false");
        let report = fx.update(&mut embed, "importerId=a&onComplete=true&metadata=%7B%7D");
        assert!(report.published);
        assert_eq!(fx.config.writes(), 2);
        let config = fx.config.current().unwrap();
        assert!(config.on_complete);
        assert_eq!(config.metadata, "{}");
    }

    #[test]
    fn test_dark_mode_reacts_to_coerced_value() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        fx.update(&mut embed, "darkMode=1");
        // "TRUE" coerces to the same value, so nothing re-runs
        let report = fx.update(&mut embed, "darkMode=TRUE");
        assert_eq!(report.dark_mode_synced, None);

        let report = fx.update(&mut embed, "darkMode=false");
        assert_eq!(report.dark_mode_synced, Some(true));
        assert_eq!(fx.theme.theme(), ThemeMode::Light);
        assert_eq!(fx.color_mode.toggles(), 2);
    }

    #[test]
    fn test_custom_styles_rerun_only_on_change() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();
        let styles = "customStyles=%7B%22radius%22%3A%224px%22%7D";

        let report = fx.update(&mut embed, styles);
        assert_eq!(report.custom_styles, Some(CustomStylesOutcome::Applied(1)));

        // Another writer changes the variable; the embed does not fight it
        fx.style.set_property("--radius", "8px");
        let report = fx.update(&mut embed, styles);
        assert_eq!(report.custom_styles, None);
        assert_eq!(fx.style.property("--radius"), Some("8px"));
    }

    #[test]
    fn test_unmount_cancels_reactions() {
        let mut fx = Fixture::new();
        let mut embed = Embed::new();

        fx.update(&mut embed, "importerId=a");
        embed.unmount();
        let report = fx.update(&mut embed, "importerId=b&darkMode=1&primaryColor=blue");

        assert!(report.is_idle());
        assert!(!embed.is_mounted());
        assert_eq!(fx.config.current().unwrap().importer_id, "a");
        assert_eq!(fx.color_mode.toggles(), 0);
        assert_eq!(fx.style.property("--color-primary"), None);
    }

    #[test]
    fn test_report_serializes_outcome() {
        let report = UpdateReport {
            published: true,
            dark_mode_synced: Some(false),
            primary_color_applied: None,
            custom_styles: Some(CustomStylesOutcome::Applied(3)),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["published"], serde_json::json!(true));
        assert_eq!(json["darkModeSynced"], serde_json::json!(false));
        assert!(json.get("primaryColorApplied").is_none());
        assert_eq!(json["customStyles"], serde_json::json!(3));
    }
}
