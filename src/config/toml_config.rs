use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::adapters::{HttpTrackerSource, StaticProviderRegistry};
use crate::core::refresher::DEFAULT_RETRY_ATTEMPTS;
use crate::core::scheduler::DEFAULT_REFRESH_INTERVAL;
use crate::core::trackers::BEST_TRACKERS_URL;
use crate::domain::model::ProviderEntry;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_RETRY_ATTEMPTS: u32 = 10;
pub const MAX_REFRESH_INTERVAL_HOURS: u64 = 24 * 365;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub trackers: TrackersConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub providers: Option<Vec<ProviderEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackersConfig {
    #[serde(default = "default_trackers_url")]
    pub url: String,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
}

impl Default for TrackersConfig {
    fn default() -> Self {
        Self {
            url: default_trackers_url(),
            timeout_seconds: None,
            retry_attempts: None,
        }
    }
}

fn default_trackers_url() -> String {
    BEST_TRACKERS_URL.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshConfig {
    pub interval_hours: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "compact" (default) or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRACKERS_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("trackers.url", &self.trackers.url)?;

        if let Some(timeout) = self.trackers.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "trackers.timeout_seconds",
                timeout,
                1,
            )?;
        }

        if let Some(attempts) = self.trackers.retry_attempts {
            crate::utils::validation::validate_range(
                "trackers.retry_attempts",
                u64::from(attempts),
                0,
                u64::from(MAX_RETRY_ATTEMPTS),
            )?;
        }

        if let Some(hours) = self.refresh.interval_hours {
            crate::utils::validation::validate_range(
                "refresh.interval_hours",
                hours,
                1,
                MAX_REFRESH_INTERVAL_HOURS,
            )?;
        }

        if let Some(format) = &self.logging.format {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format.as_str()) {
                return Err(TrackerError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        for provider in self.providers.iter().flatten() {
            crate::utils::validation::validate_not_blank("providers.label", &provider.label)?;
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        self.trackers
            .timeout_seconds
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn retry_attempts(&self) -> u32 {
        self.trackers.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS)
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh
            .interval_hours
            .map(|hours| Duration::from_secs(hours.saturating_mul(60 * 60)))
            .unwrap_or(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    /// 取得 tracker 清單來源
    pub fn tracker_source(&self) -> HttpTrackerSource {
        HttpTrackerSource::new(self.trackers.url.clone()).with_timeout(self.timeout())
    }

    /// 取得 provider 清單；未設定時使用內建清單
    pub fn provider_registry(&self) -> StaticProviderRegistry {
        match &self.providers {
            Some(providers) => StaticProviderRegistry::new(providers.clone()),
            None => StaticProviderRegistry::builtin(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
