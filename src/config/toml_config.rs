use crate::core::sync::{ContentDomain, DegradePolicy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_SPREADSHEET_ID: &str = "15E7USHGwcvn9Kin2ZxLU57rqnk0V1X88vaVkWTRBrdg";
pub const DEFAULT_STALE_SECONDS: u64 = 5 * 60;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Key baked in at build time; an empty key makes every read fail over to fallback content.
const BUILD_API_KEY: &str = match option_env!("PORTFOLIO_SHEETS_API_KEY") {
    Some(key) => key,
    None => "",
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub domains: DomainsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            spreadsheet_id: default_spreadsheet_id(),
            api_key: default_api_key(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainsConfig {
    pub projects: Option<DomainConfig>,
    pub skills: Option<DomainConfig>,
    pub posts: Option<DomainConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainConfig {
    pub range: Option<String>,
    pub on_failure: Option<DegradePolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_stale_seconds")]
    pub stale_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_seconds: DEFAULT_STALE_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_preferences_path")]
    pub path: String,
    #[serde(default = "default_language_key")]
    pub language_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
            language_key: default_language_key(),
            theme_key: default_theme_key(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_spreadsheet_id() -> String {
    DEFAULT_SPREADSHEET_ID.to_string()
}

fn default_api_key() -> String {
    BUILD_API_KEY.to_string()
}

fn default_timeout_seconds() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECONDS)
}

fn default_stale_seconds() -> u64 {
    DEFAULT_STALE_SECONDS
}

fn default_preferences_path() -> String {
    "./portfolio-preferences.json".to_string()
}

fn default_language_key() -> String {
    "language".to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl PortfolioConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SyncError::ProcessingError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn domain(&self, domain: ContentDomain) -> Option<&DomainConfig> {
        match domain {
            ContentDomain::Projects => self.domains.projects.as_ref(),
            ContentDomain::Skills => self.domains.skills.as_ref(),
            ContentDomain::BlogPosts => self.domains.posts.as_ref(),
        }
    }

    pub fn range(&self, domain: ContentDomain) -> &str {
        self.domain(domain)
            .and_then(|d| d.range.as_deref())
            .unwrap_or(domain.default_range())
    }

    pub fn degrade_policy(&self, domain: ContentDomain) -> DegradePolicy {
        self.domain(domain)
            .and_then(|d| d.on_failure)
            .unwrap_or(domain.default_policy())
    }

    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.cache.stale_seconds)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;
        validation::validate_non_empty_string("source.spreadsheet_id", &self.source.spreadsheet_id)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        for domain in ContentDomain::ALL {
            validation::validate_range_name(
                &format!("domains.{}.range", domain.config_key()),
                self.range(domain),
            )?;
        }

        validation::validate_positive_number("cache.stale_seconds", self.cache.stale_seconds, 1)?;
        validation::validate_path("preferences.path", &self.preferences.path)?;
        validation::validate_non_empty_string("preferences.language_key", &self.preferences.language_key)?;
        validation::validate_non_empty_string("preferences.theme_key", &self.preferences.theme_key)?;

        if self.source.api_key.trim().is_empty() || self.source.api_key.starts_with("${") {
            tracing::warn!(
                "source.api_key is not set; remote reads will be rejected and fallback content used"
            );
        }

        Ok(())
    }
}

impl ConfigProvider for PortfolioConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn spreadsheet_id(&self) -> &str {
        &self.source.spreadsheet_id
    }

    fn api_key(&self) -> &str {
        &self.source.api_key
    }

    fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for PortfolioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
