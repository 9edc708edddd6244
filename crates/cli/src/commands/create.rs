//! Create command - queue a new profile in the registry

use anyhow::{Context, Result};
use blucky_domain::{NewProfile, ProfileLifecycle};
use std::path::PathBuf;

use crate::args::CreateArgs;
use crate::commands::{build_outbox_mutator, build_policy, check_theme, require_registry};
use crate::config::AppConfig;

pub async fn execute(args: CreateArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let policy = build_policy(&config);

    let profile = NewProfile {
        name: args.name.trim().to_string(),
        bio: args.bio.trim().to_string(),
        avatar_cid: args.avatar.trim().to_string(),
        theme: args.theme,
    };

    policy.check_name(&profile.name)?;
    policy.check_bio(&profile.bio)?;
    check_theme(profile.theme)?;
    require_registry(&config)?;

    let mutator = build_outbox_mutator(&config, args.outbox).await?;
    let receipt = mutator
        .create_profile(&profile)
        .await
        .context("Failed to queue profile creation")?;

    tracing::info!(
        name = %profile.name,
        theme = profile.theme,
        digest = %receipt.digest,
        "Queued profile creation"
    );

    println!(
        "Queued create profile '{}' in {} ({})",
        profile.name,
        mutator.path().display(),
        receipt.digest
    );

    Ok(())
}
