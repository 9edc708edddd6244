//! Reorder command - queue the swaps that bring a profile's links into a new order

use anyhow::{Context, Result};
use blucky_domain::plan_reorder;
use blucky_domain::usecases::{SaveOrderConfig, SaveOrderError, SaveOrderUseCase};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::args::ReorderArgs;
use crate::commands::{build_outbox_mutator, fetch_profile};
use crate::config::AppConfig;

pub async fn execute(args: ReorderArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    let profile = fetch_profile(&config, &args.source, &args.object_id).await?;
    let current = profile.link_ids();

    // Validate before touching the outbox
    let swaps = plan_reorder(&current, &args.order).context("Cannot plan reorder")?;

    tracing::info!(
        object_id = %args.object_id,
        links = current.len(),
        swaps = swaps.len(),
        dry_run = args.dry_run,
        "Reordering links"
    );

    if swaps.is_empty() {
        println!("Links are already in the requested order.");
        return Ok(());
    }

    if args.dry_run {
        println!("[dry-run] {} swap(s) would be submitted:", swaps.len());
        for op in &swaps {
            println!("  {}", op);
        }
        return Ok(());
    }

    let mutator = Arc::new(build_outbox_mutator(&config, args.outbox).await?);
    let outbox_path = mutator.path().to_path_buf();

    let delay_ms = args.swap_delay_ms.unwrap_or(config.reorder.swap_delay_ms);
    let usecase = SaveOrderUseCase::new(
        mutator,
        SaveOrderConfig {
            swap_delay: Duration::from_millis(delay_ms),
        },
    );

    match usecase.submit(&args.object_id, &swaps).await {
        Ok(report) => {
            println!(
                "Queued {} swap(s) in {}",
                report.swaps.len(),
                outbox_path.display()
            );
            for (op, digest) in report.swaps.iter().zip(&report.digests) {
                println!("  {} {}", op, digest);
            }
            Ok(())
        }
        Err(e @ SaveOrderError::Partial { .. }) => Err(anyhow::Error::new(e).context(format!(
            "Reorder incomplete; re-fetch {} before retrying",
            args.object_id
        ))),
        Err(e) => Err(e).context("Reorder failed"),
    }
}
