//! Branding and feature toggles for the front-end.
//!
//! One `AppConfig` is built at start-up (defaults, then an optional TOML
//! file, then environment overrides) and handed out by reference afterwards.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use voicecart_core::Color;

pub const ENV_CONFIG_PATH: &str = "VOICECART_CONFIG";
pub const ENV_SANDBOX_ID: &str = "VOICECART_SANDBOX_ID";
pub const ENV_AGENT_NAME: &str = "VOICECART_AGENT_NAME";
pub const ENV_START_BUTTON_TEXT: &str = "VOICECART_START_BUTTON_TEXT";
pub const ENV_ACCENT: &str = "VOICECART_ACCENT";

/// File keys use the camelCase names of the web front-end
/// (`pageTitle`, `startButtonText`, ...). Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AppConfig {
    pub page_title: String,
    pub page_description: String,
    pub company_name: String,

    /// Consumed by session/connection logic, not by the welcome view.
    pub supports_chat_input: bool,
    pub supports_video_input: bool,
    pub supports_screen_share: bool,
    pub is_pre_connect_buffer_enabled: bool,

    pub logo: String,
    pub start_button_text: String,
    pub accent: Option<String>,
    pub logo_dark: Option<String>,
    pub accent_dark: Option<String>,

    /// Hosted sandbox integration.
    pub sandbox_id: Option<String>,
    pub agent_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: "Zepto".into(),
            page_title: "Zepto Voice Shopping".into(),
            page_description: "Order groceries in 10 minutes using just your voice".into(),

            supports_chat_input: true,
            supports_video_input: true,
            supports_screen_share: true,
            is_pre_connect_buffer_enabled: true,

            logo: "/lk-logo.svg".into(),
            accent: Some("#9333ea".into()),
            logo_dark: Some("/lk-logo-dark.svg".into()),
            accent_dark: Some("#a855f7".into()),
            start_button_text: "START SHOPPING".into(),

            sandbox_id: None,
            agent_name: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Label of the primary action on the welcome screen.
    pub fn start_button_label(&self) -> &str {
        &self.start_button_text
    }

    /// Accent for the given scheme; dark falls back to the light accent.
    pub fn accent_color(&self, dark: bool) -> Option<Color> {
        let hex = if dark {
            self.accent_dark.as_deref().or(self.accent.as_deref())
        } else {
            self.accent.as_deref()
        };
        hex.and_then(Color::parse_hex)
    }

    /// Clears accents that are not `#RRGGBB`/`#RRGGBBAA`, so the theme's
    /// own focus color is used instead of black.
    fn drop_invalid_accents(&mut self) {
        for (key, value) in [("accent", &mut self.accent), ("accentDark", &mut self.accent_dark)] {
            if value.as_deref().is_some_and(|v| Color::parse_hex(v).is_none()) {
                log::warn!("ignoring {key} {value:?}: not a hex color");
                *value = None;
            }
        }
    }

    pub fn logo_for(&self, dark: bool) -> &str {
        match (&self.logo_dark, dark) {
            (Some(l), true) => l,
            _ => &self.logo,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `VOICECART_SANDBOX_ID` overrides `sandboxId`
/// - `VOICECART_AGENT_NAME` overrides `agentName`
/// - `VOICECART_START_BUTTON_TEXT` overrides `startButtonText`
/// - `VOICECART_ACCENT` overrides `accent`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => {
                let mut config = AppConfig::from_toml_str(&contents)?;
                config.drop_invalid_accents();
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("config file {} not found, using defaults", p.display());
                AppConfig::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => AppConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    log::debug!("effective config: {config:?}");
    Ok(config)
}

/// Applies overrides from `lookup` (normally the process environment).
/// Empty values clear optional fields and are ignored for required ones.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let optional = |v: String| if v.trim().is_empty() { None } else { Some(v) };

    if let Some(v) = lookup(ENV_SANDBOX_ID) {
        config.sandbox_id = optional(v);
    }
    if let Some(v) = lookup(ENV_AGENT_NAME) {
        config.agent_name = optional(v);
    }
    if let Some(v) = lookup(ENV_ACCENT) {
        match optional(v) {
            Some(hex) if Color::parse_hex(&hex).is_none() => {
                log::warn!("{ENV_ACCENT}={hex:?} is not a hex color; keeping {:?}", config.accent);
            }
            accent => config.accent = accent,
        }
    }
    if let Some(v) = lookup(ENV_START_BUTTON_TEXT) {
        if v.is_empty() {
            log::warn!("{ENV_START_BUTTON_TEXT} is empty; keeping {:?}", config.start_button_text);
        } else {
            config.start_button_text = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_match_storefront_branding() {
        let c = AppConfig::default();
        assert_eq!(c.company_name, "Zepto");
        assert_eq!(c.page_title, "Zepto Voice Shopping");
        assert_eq!(
            c.page_description,
            "Order groceries in 10 minutes using just your voice"
        );
        assert!(c.supports_chat_input);
        assert!(c.supports_video_input);
        assert!(c.supports_screen_share);
        assert!(c.is_pre_connect_buffer_enabled);
        assert_eq!(c.logo, "/lk-logo.svg");
        assert_eq!(c.accent.as_deref(), Some("#9333ea"));
        assert_eq!(c.logo_dark.as_deref(), Some("/lk-logo-dark.svg"));
        assert_eq!(c.accent_dark.as_deref(), Some("#a855f7"));
        assert_eq!(c.start_button_label(), "START SHOPPING");
        assert_eq!(c.sandbox_id, None);
        assert_eq!(c.agent_name, None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = AppConfig::from_toml_str(
            r#"
            startButtonText = "ORDER NOW"
            supportsVideoInput = false
            agentName = "cart-agent"
            "#,
        )
        .unwrap();
        assert_eq!(c.start_button_text, "ORDER NOW");
        assert!(!c.supports_video_input);
        assert_eq!(c.agent_name.as_deref(), Some("cart-agent"));
        assert_eq!(c.company_name, "Zepto");
        assert!(c.supports_chat_input);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("startButton = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "companyName = \"Basket\"\naccent = \"#ff0000\"").unwrap();
        let c = load_config(Some(f.path())).unwrap();
        assert_eq!(c.company_name, "Basket");
        assert_eq!(c.accent_color(false), Some(Color(255, 0, 0, 255)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(c.page_title, AppConfig::default().page_title);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path())).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "supportsChatInput = \"yes\"").unwrap();
        let err = load_config(Some(f.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn overrides_apply_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_SANDBOX_ID, "sbx-123"),
            (ENV_AGENT_NAME, ""),
            (ENV_START_BUTTON_TEXT, "GO"),
            (ENV_ACCENT, "#00ff00"),
        ]
        .into_iter()
        .collect();
        let mut c = AppConfig {
            agent_name: Some("old".into()),
            ..AppConfig::default()
        };
        apply_overrides(&mut c, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(c.sandbox_id.as_deref(), Some("sbx-123"));
        assert_eq!(c.agent_name, None);
        assert_eq!(c.start_button_text, "GO");
        assert_eq!(c.accent_color(false), Some(Color(0, 255, 0, 255)));
    }

    #[test]
    fn empty_button_override_is_ignored() {
        let mut c = AppConfig::default();
        apply_overrides(&mut c, |k| (k == ENV_START_BUTTON_TEXT).then(String::new));
        assert_eq!(c.start_button_text, "START SHOPPING");
    }

    #[test]
    fn bad_accent_override_keeps_previous() {
        let mut c = AppConfig::default();
        apply_overrides(&mut c, |k| (k == ENV_ACCENT).then(|| "purple".to_string()));
        assert_eq!(c.accent.as_deref(), Some("#9333ea"));
        assert_eq!(c.accent_color(false), Some(Color::from_hex("#9333ea")));
    }

    #[test]
    fn bad_accent_in_file_is_dropped() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "accent = \"purple\"\naccentDark = \"#zzzzzz\"").unwrap();
        let c = load_config(Some(f.path())).unwrap();
        assert_eq!(c.accent, None);
        assert_eq!(c.accent_dark, None);
        assert_eq!(c.accent_color(true), None);
    }

    #[test]
    fn unparsable_accent_is_not_black() {
        let c = AppConfig {
            accent: Some("purple".into()),
            accent_dark: None,
            ..AppConfig::default()
        };
        assert_eq!(c.accent_color(false), None);
        assert_eq!(c.accent_color(true), None);
    }

    #[test]
    fn dark_scheme_assets() {
        let c = AppConfig::default();
        assert_eq!(c.logo_for(true), "/lk-logo-dark.svg");
        assert_eq!(c.logo_for(false), "/lk-logo.svg");
        assert_eq!(c.accent_color(true), Some(Color::from_hex("#a855f7")));

        let no_dark = AppConfig {
            accent_dark: None,
            logo_dark: None,
            ..AppConfig::default()
        };
        assert_eq!(no_dark.accent_color(true), Some(Color::from_hex("#9333ea")));
        assert_eq!(no_dark.logo_for(true), "/lk-logo.svg");
    }
}
