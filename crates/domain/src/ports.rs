//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;

use crate::model::{MutationReceipt, NewProfile, Profile};

/// Error type for profile store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile not found: {0}")]
    NotFound(String),
    #[error("Object {0} is not a valid profile")]
    InvalidProfile(String),
    #[error("Index {index} out of range for {len} links")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Mutation rejected: {0}")]
    Rejected(String),
}

/// Port for point-reads of a profile object
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Fetch a profile by object ID
    async fn fetch_profile(&self, object_id: &str) -> Result<Profile, StoreError>;
}

/// Port for submitting mutations against a profile's link list.
///
/// Each call is a single remote transaction; it returns once the mutation
/// has finalized or failed.
#[async_trait]
pub trait LinkMutator: Send + Sync {
    /// Exchange the links currently at positions `a` and `b`
    async fn swap_links(
        &self,
        object_id: &str,
        a: usize,
        b: usize,
    ) -> Result<MutationReceipt, StoreError>;

    /// Append a link at the end of the list
    async fn add_link(
        &self,
        object_id: &str,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError>;

    /// Replace label and url of the link at `index`
    async fn update_link(
        &self,
        object_id: &str,
        index: usize,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError>;

    /// Remove the link at `index`; later links shift down by one
    async fn remove_link(&self, object_id: &str, index: usize)
    -> Result<MutationReceipt, StoreError>;

    async fn set_bio(&self, object_id: &str, bio: &str) -> Result<MutationReceipt, StoreError>;

    async fn set_theme(&self, object_id: &str, theme: u64)
    -> Result<MutationReceipt, StoreError>;

    async fn set_avatar(
        &self,
        object_id: &str,
        avatar_cid: &str,
    ) -> Result<MutationReceipt, StoreError>;
}

/// Port for creating and deleting whole profiles through the shared registry
#[async_trait]
pub trait ProfileLifecycle: Send + Sync {
    /// Register a new profile owned by the signer
    async fn create_profile(&self, profile: &NewProfile) -> Result<MutationReceipt, StoreError>;

    /// Remove a profile and its registry entry
    async fn delete_profile(&self, object_id: &str) -> Result<MutationReceipt, StoreError>;
}

/// Error type for key-value store operations
#[derive(Debug, Error)]
pub enum KvError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for a simple string key-value store (last write wins)
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;

    async fn remove(&self, key: &str) -> Result<(), KvError>;
}

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
