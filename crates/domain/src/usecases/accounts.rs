//! Linked accounts - zkLogin identities paired with wallet addresses

use std::sync::Arc;

use time::format_description::well_known::Rfc3339;

use crate::{
    model::LinkedAccount,
    ports::{Clock, KeyValueStore, KvError},
};

const LINKED_ACCOUNTS_KEY: &str = "linked_accounts";

/// Reads and writes the linked-account list
pub struct AccountLinks<K, C>
where
    K: KeyValueStore + ?Sized,
    C: Clock + ?Sized,
{
    store: Arc<K>,
    clock: Arc<C>,
}

impl<K, C> AccountLinks<K, C>
where
    K: KeyValueStore + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(store: Arc<K>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// All linked accounts
    pub async fn list(&self) -> Result<Vec<LinkedAccount>, KvError> {
        match self.store.get(LINKED_ACCOUNTS_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| KvError::Serialization(e.to_string()))
            }
            None => Ok(vec![]),
        }
    }

    /// Link an email to a wallet, replacing any existing link for that email
    pub async fn link(&self, email: &str, wallet: &str) -> Result<LinkedAccount, KvError> {
        let linked_at = self
            .clock
            .now()
            .format(&Rfc3339)
            .map_err(|e| KvError::Serialization(e.to_string()))?;

        let account = LinkedAccount {
            zk_login_email: email.to_string(),
            wallet_address: wallet.to_string(),
            linked_at,
        };

        let mut accounts = self.list().await?;
        accounts.retain(|a| a.zk_login_email != email);
        accounts.push(account.clone());
        self.save(&accounts).await?;

        tracing::info!(email = %email, wallet = %wallet, "Linked account");
        Ok(account)
    }

    /// Remove the link for an email; returns whether one existed
    pub async fn unlink(&self, email: &str) -> Result<bool, KvError> {
        let mut accounts = self.list().await?;
        let before = accounts.len();
        accounts.retain(|a| a.zk_login_email != email);

        if accounts.len() == before {
            return Ok(false);
        }
        self.save(&accounts).await?;
        Ok(true)
    }

    pub async fn is_linked(&self, email: &str, wallet: &str) -> Result<bool, KvError> {
        Ok(self
            .list()
            .await?
            .iter()
            .any(|a| a.zk_login_email == email && a.wallet_address == wallet))
    }

    pub async fn wallet_for(&self, email: &str) -> Result<Option<String>, KvError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|a| a.zk_login_email == email)
            .map(|a| a.wallet_address))
    }

    pub async fn email_for(&self, wallet: &str) -> Result<Option<String>, KvError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|a| a.wallet_address == wallet)
            .map(|a| a.zk_login_email))
    }

    async fn save(&self, accounts: &[LinkedAccount]) -> Result<(), KvError> {
        let raw =
            serde_json::to_string(accounts).map_err(|e| KvError::Serialization(e.to_string()))?;
        self.store.set(LINKED_ACCOUNTS_KEY, &raw).await
    }
}
