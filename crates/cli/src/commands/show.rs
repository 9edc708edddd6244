//! Show command - fetch and render a profile

use anyhow::{Context, Result};
use blucky_domain::share::{
    Network, ShareLinks, explorer_object_url, format_address, profile_url, share_links,
};
use blucky_domain::usecases::{Avatar, ProfileRenderer, ProfileView};
use serde::Serialize;
use std::path::PathBuf;

use crate::args::ShowArgs;
use crate::commands::fetch_profile;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct ShowOutput {
    profile: ProfileView,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    profile_url: String,
    explorer_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    share: Option<ShareLinks>,
}

pub async fn execute(args: ShowArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let network: Network = config
        .general
        .network
        .parse()
        .map_err(anyhow::Error::msg)
        .context("Invalid general.network")?;

    let profile = fetch_profile(&config, &args.source, &args.object_id).await?;
    let view = ProfileRenderer::default().render(&profile);

    let url = profile_url(&config.general.share_base_url, &view.object_id);
    let share = args
        .share
        .then(|| share_links(&url, &format!("Check out {}'s links", view.name)));

    let output = ShowOutput {
        explorer_url: explorer_object_url(&view.object_id, network),
        owner: profile.owner,
        profile_url: url,
        share,
        profile: view,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        print_profile(&output);
    }

    Ok(())
}

fn print_profile(output: &ShowOutput) {
    let view = &output.profile;

    println!("{}", view.name);
    println!("{}", "=".repeat(view.name.chars().count().max(3)));
    if !view.bio.is_empty() {
        println!("{}", view.bio);
    }
    println!();

    match &view.avatar {
        Avatar::Icon(icon) => println!("Avatar: icon {}", icon),
        Avatar::Image(url) => println!("Avatar: {}", url),
    }
    println!("Theme:  {} ({})", view.theme.name, view.theme.id);
    if let Some(owner) = &output.owner {
        println!("Owner:  {}", format_address(owner, 4));
    }
    println!();

    if view.links.is_empty() {
        println!("No links.");
    } else {
        println!("Links:");
        for link in &view.links {
            let mut tag = link.classification.category.to_string();
            if let Some(platform) = link.classification.platform {
                tag = format!("{}/{}", tag, platform);
            }
            if let Some(kind) = link.classification.monetization_kind {
                tag = format!("{}/{}", tag, kind);
            }
            println!("  [{}] {} -> {} ({})", link.id, link.label, link.url, tag);
        }
    }

    println!();
    println!("Profile:  {}", output.profile_url);
    println!("Explorer: {}", output.explorer_url);

    if let Some(share) = &output.share {
        println!();
        println!("Share:");
        println!("  Twitter:  {}", share.twitter);
        println!("  Facebook: {}", share.facebook);
        println!("  WhatsApp: {}", share.whatsapp);
        println!("  Telegram: {}", share.telegram);
    }
}
