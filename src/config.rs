//! Application configuration, loaded once at process start and passed down explicitly

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Environment variable holding the text-generation API key
pub const API_KEY_ENV: &str = "STARTUP_PROJECTOR_API_KEY";

pub const DEFAULT_MODEL: &str = "command-xlarge-nightly";
pub const DEFAULT_MAX_TOKENS: u32 = 2189;

fn default_model() -> String { DEFAULT_MODEL.to_string() }
fn default_max_tokens() -> u32 { DEFAULT_MAX_TOKENS }
fn default_table_csv() -> PathBuf { PathBuf::from("projection_output.csv") }
fn default_report_path() -> PathBuf { PathBuf::from("Startup_Consultant_Report.txt") }

/// Settings handed to whichever `SectionWriter` performs external calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens per section
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
        }
    }
}

/// Where report artifacts are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_table_csv")]
    pub table_csv: PathBuf,

    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            table_csv: default_table_csv(),
            report_path: default_report_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file; absent fields keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fill the API key from the environment unless the file already set one
    pub fn with_env_overrides(mut self) -> Self {
        if self.generation.api_key.is_none() {
            self.generation.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        self
    }
}
