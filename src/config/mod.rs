pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, validate_range,
    validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str =
    "https://courttribunalfinder.service.gov.uk/search/results.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "court-finder")]
#[command(about = "Finds the nearest desired court for each person in a CSV file")]
pub struct CliConfig {
    /// CSV file with person_name, home_postcode and looking_for_court_type columns
    #[arg(long, default_value = "people.csv")]
    pub people_file: String,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub request_timeout: u64,

    /// Optional TOML job file; its values override the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// TOML 檔案中的值覆蓋命令列預設值
    pub fn apply_file_config(&mut self, file: toml_config::TomlConfig) {
        if let Some(source) = file.source {
            if let Some(endpoint) = source.endpoint {
                self.api_endpoint = endpoint;
            }
            if let Some(timeout) = source.timeout_seconds {
                self.request_timeout = timeout;
            }
        }
        if let Some(input) = file.input {
            if let Some(people_file) = input.people_file {
                self.people_file = people_file;
            }
        }
        if let Some(load) = file.load {
            if let Some(output_path) = load.output_path {
                self.output_path = output_path;
            }
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("people_file", &self.people_file)?;
        validate_file_extensions(
            "people_file",
            std::slice::from_ref(&self.people_file),
            &["csv"],
        )?;
        validate_path("output_path", &self.output_path)?;
        validate_range("request_timeout", self.request_timeout, 1, 300)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn people_file(&self) -> &str {
        &self.people_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout
    }
}
