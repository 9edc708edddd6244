//! Accounts command - zkLogin email to wallet links

use anyhow::{Context, Result};
use blucky_domain::SystemClock;
use blucky_domain::share::format_address;
use blucky_domain::usecases::AccountLinks;
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::{AccountsArgs, AccountsCommands};
use crate::commands::open_kv_store;
use crate::config::AppConfig;

pub async fn execute(args: AccountsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let store = Arc::new(open_kv_store(&config).await?);
    let accounts = AccountLinks::new(store, Arc::new(SystemClock));

    match args.command {
        AccountsCommands::Link { email, wallet } => {
            if accounts.is_linked(&email, &wallet).await? {
                println!("{} is already linked to {}", email, wallet);
                return Ok(());
            }
            let account = accounts
                .link(&email, &wallet)
                .await
                .context("Failed to link account")?;
            println!(
                "Linked {} to {} at {}",
                account.zk_login_email, account.wallet_address, account.linked_at
            );
        }
        AccountsCommands::Unlink { email } => {
            if accounts
                .unlink(&email)
                .await
                .context("Failed to unlink account")?
            {
                println!("Unlinked {}", email);
            } else {
                println!("No linked account for {}", email);
            }
        }
        AccountsCommands::List { json } => {
            let linked = accounts.list().await.context("Failed to load accounts")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&linked)?);
            } else if linked.is_empty() {
                println!("No linked accounts.");
            } else {
                for account in &linked {
                    println!(
                        "{}  {}  {}",
                        account.zk_login_email,
                        format_address(&account.wallet_address, 6),
                        account.linked_at
                    );
                }
            }
        }
        AccountsCommands::Lookup { email, wallet } => {
            let found = match (email, wallet) {
                (Some(email), _) => accounts.wallet_for(&email).await?,
                (None, Some(wallet)) => accounts.email_for(&wallet).await?,
                (None, None) => anyhow::bail!("Pass --email or --wallet"),
            };
            match found {
                Some(value) => println!("{}", value),
                None => anyhow::bail!("No linked account found"),
            }
        }
    }

    Ok(())
}
