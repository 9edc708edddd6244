//! Subcommand implementations and the wiring they share

pub mod accounts;
pub mod analytics;
pub mod classify;
pub mod config;
pub mod create;
pub mod doctor;
pub mod edit;
pub mod plan;
pub mod reorder;
pub mod show;

use anyhow::{Context, Result};
use blucky_adapters::{
    kv::SqliteKvStore,
    outbox::{ContractTarget, OutboxMutator, OutboxWriter},
    store::{InMemoryProfileStore, SuiRpcReader},
};
use blucky_domain::policy::{PolicyConfig, ProfilePolicy};
use blucky_domain::{Profile, ProfileReader, Theme};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::args::ProfileSourceArgs;
use crate::config::AppConfig;

/// Profile reader for the configured RPC endpoint, or a local JSON file
pub(crate) fn build_profile_reader(
    config: &AppConfig,
    source: &ProfileSourceArgs,
) -> Result<Arc<dyn ProfileReader>> {
    match &source.profile_file {
        Some(path) => {
            let store = InMemoryProfileStore::new();
            store.insert(load_profile_file(path)?);
            Ok(Arc::new(store))
        }
        None => {
            let reader = SuiRpcReader::new(
                config.sui.rpc_url.clone(),
                Duration::from_secs(config.sui.timeout_secs),
            )
            .context("Failed to initialize Sui RPC reader")?;
            Ok(Arc::new(reader))
        }
    }
}

fn load_profile_file(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profile file: {}", path.display()))
}

pub(crate) async fn fetch_profile(
    config: &AppConfig,
    source: &ProfileSourceArgs,
    object_id: &str,
) -> Result<Profile> {
    let reader = build_profile_reader(config, source)?;
    reader
        .fetch_profile(object_id)
        .await
        .with_context(|| format!("Failed to fetch profile {}", object_id))
}

pub(crate) async fn open_kv_store(config: &AppConfig) -> Result<SqliteKvStore> {
    SqliteKvStore::new(&config.general.data_db_path)
        .await
        .context("Failed to initialize SQLite data store")
}

pub(crate) async fn build_outbox_mutator(
    config: &AppConfig,
    outbox: Option<PathBuf>,
) -> Result<OutboxMutator> {
    if config.sui.package_id.trim().is_empty() {
        anyhow::bail!("sui.package_id is not configured; set it in config.toml or BLUCKY__SUI__PACKAGE_ID");
    }

    let path = outbox.unwrap_or_else(|| config.reorder.outbox_path.clone());
    let writer = OutboxWriter::new(path.clone())
        .await
        .with_context(|| format!("Failed to open outbox: {}", path.display()))?;

    Ok(OutboxMutator::new(
        writer,
        ContractTarget {
            package_id: config.sui.package_id.clone(),
            module_name: config.sui.module_name.clone(),
            registry_id: config.sui.registry_id.clone(),
        },
    ))
}

/// Registry-level calls (create, delete) cannot be queued without it
pub(crate) fn require_registry(config: &AppConfig) -> Result<()> {
    if config.sui.registry_id.trim().is_empty() {
        anyhow::bail!(
            "sui.registry_id is not configured; set it in config.toml or BLUCKY__SUI__REGISTRY_ID"
        );
    }
    Ok(())
}

pub(crate) fn build_policy(config: &AppConfig) -> ProfilePolicy {
    ProfilePolicy::new(PolicyConfig::from(&config.policy))
}

pub(crate) fn check_theme(id: u64) -> Result<()> {
    if !Theme::ALL.iter().any(|t| t.id == id) {
        anyhow::bail!(
            "Unknown theme {}; expected one of {}",
            id,
            Theme::ALL
                .iter()
                .map(|t| format!("{} ({})", t.id, t.name))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}
