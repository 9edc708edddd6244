//! In-memory profile store for testing and offline mode
//!
//! Behaves like the on-chain profile object: links are addressed by position,
//! swaps exchange two positions, and removals shift later links down.

use async_trait::async_trait;
use blucky_domain::{
    LinkMutator, LinkRecord, MutationReceipt, NewProfile, Profile, ProfileLifecycle,
    ProfileReader, StoreError,
};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory profile store implementation
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
    mutations: AtomicUsize,
    /// Reject the mutation with this sequence number (0-based)
    fail_at: Option<usize>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
            mutations: AtomicUsize::new(0),
            fail_at: None,
        }
    }

    /// A store whose `n`th mutation (0-based) is rejected
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::new()
        }
    }

    /// Insert or replace a profile
    pub fn insert(&self, profile: Profile) {
        if let Ok(mut profiles) = self.profiles.write() {
            profiles.insert(profile.object_id.clone(), profile);
        }
    }

    /// Number of mutations attempted so far
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    fn next_seq(&self) -> Result<usize, StoreError> {
        let seq = self.mutations.fetch_add(1, Ordering::SeqCst);
        if Some(seq) == self.fail_at {
            return Err(StoreError::Rejected(format!("mutation {} rejected", seq)));
        }
        Ok(seq)
    }

    fn mutate<F>(&self, object_id: &str, apply: F) -> Result<MutationReceipt, StoreError>
    where
        F: FnOnce(&mut Profile) -> Result<(), StoreError>,
    {
        let seq = self.next_seq()?;

        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| StoreError::Rpc(e.to_string()))?;
        let profile = profiles
            .get_mut(object_id)
            .ok_or_else(|| StoreError::NotFound(object_id.to_string()))?;

        apply(profile)?;

        Ok(MutationReceipt {
            digest: format!("mem-{}", seq),
        })
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_index(profile: &Profile, index: usize) -> Result<(), StoreError> {
    if index >= profile.links.len() {
        return Err(StoreError::IndexOutOfRange {
            index,
            len: profile.links.len(),
        });
    }
    Ok(())
}

fn renumber(links: &mut [LinkRecord]) {
    for (position, link) in links.iter_mut().enumerate() {
        link.position = position;
    }
}

#[async_trait]
impl ProfileReader for InMemoryProfileStore {
    async fn fetch_profile(&self, object_id: &str) -> Result<Profile, StoreError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| StoreError::Rpc(e.to_string()))?;
        profiles
            .get(object_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(object_id.to_string()))
    }
}

#[async_trait]
impl LinkMutator for InMemoryProfileStore {
    async fn swap_links(
        &self,
        object_id: &str,
        a: usize,
        b: usize,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            check_index(profile, a)?;
            check_index(profile, b)?;
            profile.links.swap(a, b);
            renumber(&mut profile.links);
            Ok(())
        })
    }

    async fn add_link(
        &self,
        object_id: &str,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            let position = profile.links.len();
            profile.links.push(LinkRecord::new(label, url, position));
            Ok(())
        })
    }

    async fn update_link(
        &self,
        object_id: &str,
        index: usize,
        label: &str,
        url: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            check_index(profile, index)?;
            profile.links[index].label = label.to_string();
            profile.links[index].url = url.to_string();
            Ok(())
        })
    }

    async fn remove_link(
        &self,
        object_id: &str,
        index: usize,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            check_index(profile, index)?;
            profile.links.remove(index);
            renumber(&mut profile.links);
            Ok(())
        })
    }

    async fn set_bio(&self, object_id: &str, bio: &str) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            profile.bio = bio.to_string();
            Ok(())
        })
    }

    async fn set_theme(
        &self,
        object_id: &str,
        theme: u64,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            profile.theme = theme;
            Ok(())
        })
    }

    async fn set_avatar(
        &self,
        object_id: &str,
        avatar_cid: &str,
    ) -> Result<MutationReceipt, StoreError> {
        self.mutate(object_id, |profile| {
            profile.avatar_cid = avatar_cid.to_string();
            Ok(())
        })
    }
}

/// Created profiles get the object ID `0xmem<n>`, where `mem-<n>` is the receipt digest
#[async_trait]
impl ProfileLifecycle for InMemoryProfileStore {
    async fn create_profile(&self, new: &NewProfile) -> Result<MutationReceipt, StoreError> {
        let seq = self.next_seq()?;
        let object_id = format!("0xmem{}", seq);

        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| StoreError::Rpc(e.to_string()))?;
        profiles.insert(
            object_id.clone(),
            Profile {
                object_id,
                owner: None,
                name: new.name.clone(),
                bio: new.bio.clone(),
                avatar_cid: new.avatar_cid.clone(),
                theme: new.theme,
                links: Vec::new(),
            },
        );

        Ok(MutationReceipt {
            digest: format!("mem-{}", seq),
        })
    }

    async fn delete_profile(&self, object_id: &str) -> Result<MutationReceipt, StoreError> {
        let seq = self.next_seq()?;

        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| StoreError::Rpc(e.to_string()))?;
        profiles
            .remove(object_id)
            .ok_or_else(|| StoreError::NotFound(object_id.to_string()))?;

        Ok(MutationReceipt {
            digest: format!("mem-{}", seq),
        })
    }
}
