//! Pipeline configuration, optionally loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock run: `9_ken3140_webshop.csv` in, `9_ken3140_webshop.ttl` and
//! `9_ken3140_sparql.txt` out, brand `Logitech`, unseeded ratings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::graph::builder::DEFAULT_BRAND;
use crate::report::{DEFAULT_MAX_ROWS, DEFAULT_SEED_ITEM};

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Product catalog CSV.
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Turtle output path.
    #[serde(default = "default_graph_output")]
    pub graph_output: PathBuf,
    /// Query report output path.
    #[serde(default = "default_report_output")]
    pub report_output: PathBuf,
    /// Brand asserted for every item; also the label searched in query E.
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Item used by queries A and F.
    #[serde(default = "default_seed_item")]
    pub seed_item: String,
    /// Seed for the synthetic ratings. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_seed: Option<u64>,
    /// Result rows shown per report section.
    #[serde(default = "default_max_report_rows")]
    pub max_report_rows: usize,
}

fn default_input() -> PathBuf {
    "9_ken3140_webshop.csv".into()
}
fn default_graph_output() -> PathBuf {
    "9_ken3140_webshop.ttl".into()
}
fn default_report_output() -> PathBuf {
    "9_ken3140_sparql.txt".into()
}
fn default_brand() -> String {
    DEFAULT_BRAND.into()
}
fn default_seed_item() -> String {
    DEFAULT_SEED_ITEM.into()
}
fn default_max_report_rows() -> usize {
    DEFAULT_MAX_ROWS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            graph_output: default_graph_output(),
            report_output: default_report_output(),
            brand: default_brand(),
            seed_item: default_seed_item(),
            rating_seed: None,
            max_report_rows: default_max_report_rows(),
        }
    }
}

impl PipelineConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: "(in memory)".into(),
            message: e.to_string(),
        })
    }
}
