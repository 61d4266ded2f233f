//! Application State
//!
//! Persisted settings (endpoint, theme, locale) and the global store.

use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::services::{EmailClient, default_endpoint, parse_endpoint};
use crate::states::ComposerState;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

// ==================== Persisted State ====================

const CONFIG_FILE_NAME: &str = "mail-composer.toml";
const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Language part of the system locale, if it is one we ship
fn system_locale() -> Option<String> {
    let current = Locale::current().to_string();
    let lang = current
        .split(['-', '_', ','])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

impl AppSettings {
    /// Load settings from the config file in the platform config directory
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let mut state = Self::load_from(&path)?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = system_locale();
        }

        Ok(state)
    }

    /// Load settings from `path`; an empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(state)
    }

    /// Write settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    /// Configured endpoint, or the default when unset or unusable
    pub fn endpoint(&self) -> Url {
        if let Some(raw) = self.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            match parse_endpoint(raw) {
                Ok(url) => return url,
                Err(e) => warn!(error = %e, "Ignoring configured endpoint"),
            }
        }
        default_endpoint()
    }

    /// Check the configured endpoint without falling back
    pub fn validate_endpoint(&self) -> Result<()> {
        match self.endpoint.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_endpoint(raw).map(|_| ()),
            _ => Ok(()),
        }
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !SUPPORTED_LOCALES.contains(&locale) {
            return Err(Error::Invalid {
                message: format!("Unsupported locale {locale:?}"),
            });
        }
        self.locale = Some(locale.to_string());
        Ok(())
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<ComposerGlobalStore>()`
#[derive(Clone)]
pub struct ComposerGlobalStore {
    app_state: Entity<AppSettings>,
    composer_state: Entity<ComposerState>,
}

impl ComposerGlobalStore {
    /// Create the store, building the composer against the configured endpoint
    pub fn init(settings: AppSettings, cx: &mut App) -> Self {
        let client = EmailClient::new(settings.endpoint());
        info!(endpoint = %client.endpoint(), "Send endpoint configured");

        Self {
            app_state: cx.new(|_| settings),
            composer_state: cx.new(|_| ComposerState::new(client)),
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<AppSettings> {
        self.app_state.clone()
    }

    /// Get the composer state entity
    pub fn composer_state(&self) -> Entity<ComposerState> {
        self.composer_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a AppSettings {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut AppSettings, &mut Context<AppSettings>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for ComposerGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &AppSettings) -> Result<()> {
    let path = get_config_path()?;
    state.save_to(&path)
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut AppSettings, &App) + Send + 'static,
{
    let store = cx.global::<ComposerGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            cx.notify();
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DEFAULT_ENDPOINT;

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");

        let settings = AppSettings::load_from(&path).expect("load");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(settings.locale(), "en");
        assert_eq!(settings.theme(), None);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut settings: AppSettings =
            toml::from_str("endpoint = \"http://localhost:3000/send\"\n").expect("parse");
        settings.set_locale("zh").expect("locale");
        settings.set_theme(Some(ThemeMode::Dark));
        settings.save_to(&path).expect("save");

        let loaded = AppSettings::load_from(&path).expect("load");
        assert_eq!(loaded, settings);
        assert_eq!(loaded.endpoint().as_str(), "http://localhost:3000/send");
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_bad_endpoint_falls_back_to_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "endpoint = \"ftp://example.com/send\"\n").expect("write");

        let settings = AppSettings::load_from(&path).expect("load");
        assert!(settings.validate_endpoint().is_err());
        assert_eq!(settings.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "endpoint = [").expect("write");

        assert!(matches!(AppSettings::load_from(&path), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_setters_reject_bad_values() {
        let mut settings = AppSettings::new();
        assert!(settings.set_locale("fr").is_err());
        assert_eq!(settings, AppSettings::default());

        let mailto: AppSettings =
            toml::from_str("endpoint = \"mailto:someone@example.com\"\n").expect("parse");
        assert!(mailto.validate_endpoint().is_err());
    }
}
