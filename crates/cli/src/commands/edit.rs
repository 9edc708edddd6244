//! Edit command - validate and queue single profile mutations

use anyhow::{Context, Result};
use blucky_domain::{LinkMutator, ProfileLifecycle};
use std::path::PathBuf;

use crate::args::{EditArgs, EditCommands};
use crate::commands::{
    build_outbox_mutator, build_policy, check_theme, fetch_profile, require_registry,
};
use crate::config::AppConfig;

pub async fn execute(args: EditArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let policy = build_policy(&config);
    let object_id = args.object_id.as_str();

    // Reject bad input before fetching anything or opening the outbox
    match &args.command {
        EditCommands::AddLink { label, url } | EditCommands::UpdateLink { label, url, .. } => {
            policy.check_link(label, url)?
        }
        EditCommands::Bio { text } => policy.check_bio(text)?,
        EditCommands::Theme { id } => check_theme(*id)?,
        EditCommands::Delete => require_registry(&config)?,
        EditCommands::RemoveLink { .. } | EditCommands::Avatar { .. } => {}
    }

    // Link edits are checked against the list as it is now
    match &args.command {
        EditCommands::AddLink { .. } => {
            let profile = fetch_profile(&config, &args.source, object_id).await?;
            policy.check_link_count(profile.links.len())?;
        }
        EditCommands::UpdateLink { index, .. } | EditCommands::RemoveLink { index } => {
            let profile = fetch_profile(&config, &args.source, object_id).await?;
            if *index >= profile.links.len() {
                anyhow::bail!(
                    "Link index {} is out of range; {} has {} link(s)",
                    index,
                    object_id,
                    profile.links.len()
                );
            }
        }
        _ => {}
    }

    let mutator = build_outbox_mutator(&config, args.outbox).await?;

    let (action, receipt) = match &args.command {
        EditCommands::AddLink { label, url } => {
            ("add link", mutator.add_link(object_id, label, url).await)
        }
        EditCommands::UpdateLink { index, label, url } => (
            "update link",
            mutator.update_link(object_id, *index, label, url).await,
        ),
        EditCommands::RemoveLink { index } => {
            ("remove link", mutator.remove_link(object_id, *index).await)
        }
        EditCommands::Bio { text } => ("set bio", mutator.set_bio(object_id, text).await),
        EditCommands::Theme { id } => ("set theme", mutator.set_theme(object_id, *id).await),
        EditCommands::Avatar { cid } => ("set avatar", mutator.set_avatar(object_id, cid).await),
        EditCommands::Delete => ("delete profile", mutator.delete_profile(object_id).await),
    };

    let receipt = receipt.with_context(|| format!("Failed to queue {}", action))?;

    tracing::info!(
        object_id = %object_id,
        action = action,
        digest = %receipt.digest,
        "Queued edit"
    );

    println!(
        "Queued {} for {} in {} ({})",
        action,
        object_id,
        mutator.path().display(),
        receipt.digest
    );

    Ok(())
}
