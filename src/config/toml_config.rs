use crate::utils::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML job file. Every field is an override; anything absent keeps
/// the command-line value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: Option<JobConfig>,
    pub source: Option<SourceConfig>,
    pub input: Option<InputConfig>,
    pub load: Option<LoadConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub people_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(FinderError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let content = Self::substitute_env_vars(&content);
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// 環境變數替換：${VAR} -> 值，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
    }
}
