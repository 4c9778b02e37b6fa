use crate::utils::error::{BookError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_ADDRESS_BOOK_PATH: &str = "data/addressbook.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var regex is valid"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_address_book_path")]
    pub address_book_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            address_book_path: default_address_book_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_address_book_path() -> String {
    DEFAULT_ADDRESS_BOOK_PATH.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 檔案存在才載入，否則使用預設值
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_REGEX
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn address_book_path(&self) -> &str {
        &self.storage.address_book_path
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.address_book_path", &self.storage.address_book_path)?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;

        if Path::new(&self.storage.address_book_path).is_dir() {
            return Err(BookError::ConfigError {
                field: "storage.address_book_path".to_string(),
                message: "must point to a file, not a directory".to_string(),
            });
        }
        Ok(())
    }
}
