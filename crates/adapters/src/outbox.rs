//! Outbox mutator: records profile mutations as Move calls for an external signer.

use async_trait::async_trait;
use blucky_domain::{LinkMutator, MutationReceipt, NewProfile, ProfileLifecycle, StoreError};
use serde::Serialize;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum OutboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct OutboxWriter {
    path: PathBuf,
    file: Arc<Mutex<tokio::fs::File>>,
}

impl OutboxWriter {
    pub async fn new(path: PathBuf) -> Result<Self, OutboxError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append(&self, entry: &OutboxEntry<'_>) -> Result<(), OutboxError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Package and module the Move calls are addressed to
#[derive(Debug, Clone)]
pub struct ContractTarget {
    pub package_id: String,
    pub module_name: String,
    /// Shared registry object; empty when only per-profile calls are made
    pub registry_id: String,
}

impl ContractTarget {
    fn function(&self, name: &str) -> String {
        format!("{}::{}::{}", self.package_id, self.module_name, name)
    }

    fn registry(&self) -> Result<&str, StoreError> {
        if self.registry_id.is_empty() {
            return Err(StoreError::Rejected(
                "Registry object ID is not configured".to_string(),
            ));
        }
        Ok(&self.registry_id)
    }
}

#[derive(Serialize)]
struct OutboxEntry<'a> {
    id: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    object_id: Option<&'a str>,
    args: Vec<Value>,
}

/// `LinkMutator` that appends one JSONL entry per mutation
#[derive(Debug, Clone)]
pub struct OutboxMutator {
    writer: OutboxWriter,
    target: ContractTarget,
}

impl OutboxMutator {
    pub fn new(writer: OutboxWriter, target: ContractTarget) -> Self {
        Self { writer, target }
    }

    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    async fn record(
        &self,
        function: &str,
        object_id: Option<&str>,
        args: Vec<Value>,
    ) -> Result<MutationReceipt, StoreError> {
        let id = Uuid::new_v4().to_string();
        let entry = OutboxEntry {
            id: id.clone(),
            target: self.target.function(function),
            object_id,
            args,
        };

        self.writer
            .append(&entry)
            .await
            .map_err(|error| StoreError::Rejected(format!("Outbox write failed: {}", error)))?;

        tracing::debug!(
            function = %function,
            object_id = ?object_id,
            entry_id = %id,
            "Queued mutation"
        );

        Ok(MutationReceipt {
            digest: format!("outbox:{}", id),
        })
    }
}

#[async_trait]
impl LinkMutator for OutboxMutator {
    async fn swap_links(
        &self,
        object_id: &str,
        a: usize,
        b: usize,
    ) -> Result<MutationReceipt, StoreError> {
        self.record("swap_links", Some(object_id), vec![json!(a), json!(b)])
            .await
    }

    async fn add_link(
        &self,
        object_id: &str,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.record("add_link", Some(object_id), vec![json!(label), json!(url)])
            .await
    }

    async fn update_link(
        &self,
        object_id: &str,
        index: usize,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.record(
            "update_link_at",
            Some(object_id),
            vec![json!(index), json!(label), json!(url)],
        )
        .await
    }

    async fn remove_link(
        &self,
        object_id: &str,
        index: usize,
    ) -> Result<MutationReceipt, StoreError> {
        self.record("remove_link_at", Some(object_id), vec![json!(index)])
            .await
    }

    async fn set_bio(&self, object_id: &str, bio: &str) -> Result<MutationReceipt, StoreError> {
        self.record("set_bio", Some(object_id), vec![json!(bio)]).await
    }

    async fn set_theme(
        &self,
        object_id: &str,
        theme: u64,
    ) -> Result<MutationReceipt, StoreError> {
        self.record("set_theme", Some(object_id), vec![json!(theme)])
            .await
    }

    async fn set_avatar(
        &self,
        object_id: &str,
        avatar_cid: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.record("set_avatar", Some(object_id), vec![json!(avatar_cid)])
            .await
    }
}

#[async_trait]
impl ProfileLifecycle for OutboxMutator {
    async fn create_profile(&self, profile: &NewProfile) -> Result<MutationReceipt, StoreError> {
        let registry = self.target.registry()?;
        self.record(
            "create_profile_simple",
            None,
            vec![
                json!(registry),
                json!(profile.name),
                json!(profile.bio),
                json!(profile.avatar_cid),
                json!(profile.theme),
            ],
        )
        .await
    }

    async fn delete_profile(&self, object_id: &str) -> Result<MutationReceipt, StoreError> {
        let registry = self.target.registry()?;
        self.record(
            "delete_profile",
            Some(object_id),
            vec![json!(registry), json!(object_id)],
        )
        .await
    }
}
