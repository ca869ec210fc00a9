//! Application-wide UI state, passed explicitly to whatever renders it.
//!
//! Each context reads its value from a [`PreferenceStore`] once when created and
//! writes it back on every change.

use crate::config::toml_config::PreferencesConfig;
use crate::domain::ports::PreferenceStore;
use crate::i18n::{Language, Translations};
use crate::utils::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

fn read_preference<P: PreferenceStore>(store: &P, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Could not read preference '{}': {}", key, e);
            None
        }
    }
}

pub struct LanguageContext<P: PreferenceStore> {
    store: P,
    key: String,
    language: Language,
}

impl<P: PreferenceStore> LanguageContext<P> {
    pub fn load(store: P) -> Self {
        Self::load_with_key(store, LANGUAGE_KEY)
    }

    /// Unknown or missing codes start in English, which is then persisted.
    pub fn load_with_key(store: P, key: &str) -> Self {
        let saved = read_preference(&store, key);
        let language = saved
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default();

        let context = Self {
            store,
            key: key.to_string(),
            language,
        };
        if saved.as_deref() != Some(language.code()) {
            if let Err(e) = context.persist() {
                tracing::warn!("Could not save preference '{}': {}", context.key, e);
            }
        }
        context
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        tracing::info!("🌐 Language set to {}", language);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.set(&self.key, self.language.code())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(SyncError::InvalidConfigValueError {
                field: "theme".to_string(),
                value: other.to_string(),
                reason: "Theme must be 'light' or 'dark'".to_string(),
            }),
        }
    }
}

pub struct ThemeContext<P: PreferenceStore> {
    store: P,
    key: String,
    theme: Theme,
}

impl<P: PreferenceStore> ThemeContext<P> {
    pub fn load(store: P) -> Self {
        Self::load_with_key(store, THEME_KEY)
    }

    pub fn load_with_key(store: P, key: &str) -> Self {
        let theme = read_preference(&store, key)
            .and_then(|saved| saved.parse().ok())
            .unwrap_or_default();

        Self {
            store,
            key: key.to_string(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.set(&self.key, theme.as_str())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

/// Language and theme sharing one preference store.
pub struct AppContext<P: PreferenceStore> {
    pub language: LanguageContext<Arc<P>>,
    pub theme: ThemeContext<Arc<P>>,
}

impl<P: PreferenceStore> AppContext<P> {
    pub fn load(store: Arc<P>, config: &PreferencesConfig) -> Self {
        Self {
            language: LanguageContext::load_with_key(Arc::clone(&store), &config.language_key),
            theme: ThemeContext::load_with_key(store, &config.theme_key),
        }
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::preferences::MemoryPreferenceStore;

    #[test]
    fn test_language_read_at_start() {
        let store = Arc::new(MemoryPreferenceStore::with_value(LANGUAGE_KEY, "vi"));
        let context = LanguageContext::load(Arc::clone(&store));

        assert_eq!(context.language(), Language::Vi);
        assert_eq!(context.translations().nav.contact, "Liên hệ");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english_and_is_saved() {
        let store = Arc::new(MemoryPreferenceStore::with_value(LANGUAGE_KEY, "klingon"));
        let context = LanguageContext::load(Arc::clone(&store));

        assert_eq!(context.language(), Language::En);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_language_written_on_change() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut context = LanguageContext::load(Arc::clone(&store));

        context.set_language(Language::Vi).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("vi"));

        let reloaded = LanguageContext::load(Arc::clone(&store));
        assert_eq!(reloaded.language(), Language::Vi);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut theme = ThemeContext::load(Arc::clone(&store));
        assert_eq!(theme.theme(), Theme::Light);

        assert_eq!(theme.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(ThemeContext::load(store).theme(), Theme::Dark);
    }

    #[test]
    fn test_app_context_uses_configured_keys() {
        let store = Arc::new(MemoryPreferenceStore::with_value("lang", "vi"));
        let config = PreferencesConfig {
            language_key: "lang".to_string(),
            theme_key: "ui-theme".to_string(),
            ..PreferencesConfig::default()
        };

        let mut context = AppContext::load(Arc::clone(&store), &config);
        assert_eq!(context.language.language(), Language::Vi);

        context.theme.set_theme(Theme::Dark).unwrap();
        assert_eq!(store.get("ui-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
