//! Configuration loading and management

use anyhow::{Context, Result};
use blucky_domain::policy::PolicyConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub sui: SuiConfig,

    #[serde(default)]
    pub reorder: ReorderConfig,

    #[serde(default)]
    pub policy: PolicySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_data_db_path")]
    pub data_db_path: PathBuf,

    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    #[serde(default = "default_network")]
    pub network: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    #[serde(default)]
    pub package_id: String,

    #[serde(default)]
    pub registry_id: String,

    #[serde(default = "default_module_name")]
    pub module_name: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderConfig {
    #[serde(default = "default_swap_delay_ms")]
    pub swap_delay_ms: u64,

    #[serde(default = "default_outbox_path")]
    pub outbox_path: PathBuf,
}

/// Limits applied to profile edits before they are queued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    #[serde(default = "default_max_bio_length")]
    pub max_bio_length: usize,

    #[serde(default = "default_max_label_length")]
    pub max_label_length: usize,

    /// Unlimited when unset
    #[serde(default)]
    pub max_links: Option<usize>,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_db_path() -> PathBuf {
    PathBuf::from("./blucky.sqlite")
}

fn default_share_base_url() -> String {
    "https://blucky.app".to_string()
}

fn default_network() -> String {
    "testnet".to_string()
}

fn default_rpc_url() -> String {
    "https://fullnode.testnet.sui.io:443".to_string()
}

fn default_module_name() -> String {
    "linktree".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_swap_delay_ms() -> u64 {
    1500
}

fn default_outbox_path() -> PathBuf {
    PathBuf::from("./outbox.jsonl")
}

fn default_max_name_length() -> usize {
    64
}

fn default_max_bio_length() -> usize {
    280
}

fn default_max_label_length() -> usize {
    100
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_db_path: default_data_db_path(),
            share_base_url: default_share_base_url(),
            network: default_network(),
        }
    }
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            package_id: String::new(),
            registry_id: String::new(),
            module_name: default_module_name(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            swap_delay_ms: default_swap_delay_ms(),
            outbox_path: default_outbox_path(),
        }
    }
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_bio_length: default_max_bio_length(),
            max_label_length: default_max_label_length(),
            max_links: None,
        }
    }
}

impl From<&PolicySection> for PolicyConfig {
    fn from(section: &PolicySection) -> Self {
        Self {
            max_name_length: Some(section.max_name_length),
            max_bio_length: Some(section.max_bio_length),
            max_label_length: Some(section.max_label_length),
            max_links: section.max_links,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("BLUCKY")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# blucky configuration

[general]
log_level = "info"
# SQLite file for local analytics and linked accounts
data_db_path = "./blucky.sqlite"
share_base_url = "https://blucky.app"
network = "testnet"  # testnet, mainnet, devnet

[sui]
rpc_url = "https://fullnode.testnet.sui.io:443"
package_id = ""
registry_id = ""
module_name = "linktree"
timeout_secs = 30

[reorder]
# Pause between consecutive swaps
swap_delay_ms = 1500
outbox_path = "./outbox.jsonl"

[policy]
max_name_length = 64
max_bio_length = 280
max_label_length = 100
# max_links = 20
"#
        .to_string()
    }
}
