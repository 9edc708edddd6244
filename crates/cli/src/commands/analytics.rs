//! Analytics command - local view and click counters

use anyhow::{Context, Result};
use blucky_domain::usecases::AnalyticsTracker;
use blucky_domain::{AnalyticsSnapshot, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::{AnalyticsArgs, AnalyticsCommands};
use crate::commands::open_kv_store;
use crate::config::AppConfig;

pub async fn execute(args: AnalyticsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let store = Arc::new(open_kv_store(&config).await?);
    let tracker = AnalyticsTracker::new(store, Arc::new(SystemClock));

    match args.command {
        AnalyticsCommands::View { profile_id } => {
            let snapshot = tracker
                .track_view(&profile_id)
                .await
                .context("Failed to record view")?;
            println!(
                "Recorded view for {} ({} total, {} today)",
                profile_id, snapshot.total_views, snapshot.views_today
            );
        }
        AnalyticsCommands::Click { profile_id, label } => {
            let snapshot = tracker
                .track_click(&profile_id, &label)
                .await
                .context("Failed to record click")?;
            let link_clicks = snapshot.clicks_by_link.get(&label).copied().unwrap_or(0);
            println!(
                "Recorded click on '{}' for {} ({} on this link, {} total)",
                label, profile_id, link_clicks, snapshot.total_clicks
            );
        }
        AnalyticsCommands::Show { profile_id, json } => {
            let snapshot = tracker
                .snapshot(&profile_id)
                .await
                .context("Failed to load analytics")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&profile_id, &snapshot);
            }
        }
    }

    Ok(())
}

fn print_snapshot(profile_id: &str, snapshot: &AnalyticsSnapshot) {
    println!("Analytics for {}", profile_id);
    println!();
    println!("Views:      {} ({} today)", snapshot.total_views, snapshot.views_today);
    println!("Clicks:     {} ({} today)", snapshot.total_clicks, snapshot.clicks_today);
    println!("Click rate: {:.1}%", snapshot.click_rate());

    match snapshot.most_clicked() {
        Some((label, count)) => println!("Top link:   {} ({} clicks)", label, count),
        None => println!("Top link:   none"),
    }

    if !snapshot.clicks_by_link.is_empty() {
        println!();
        println!("Clicks by link:");
        for (label, count) in &snapshot.clicks_by_link {
            println!("  {}: {}", label, count);
        }
    }
}
