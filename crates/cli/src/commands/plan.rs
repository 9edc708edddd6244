//! Plan command - compute the swap sequence between two orders

use anyhow::{Context, Result};
use blucky_domain::{SwapOp, apply_swaps, plan_reorder};
use serde::Serialize;

use crate::args::PlanArgs;

#[derive(Debug, Serialize)]
struct PlanOutput {
    swaps: Vec<SwapOp>,
    result: Vec<String>,
}

pub async fn execute(args: PlanArgs) -> Result<()> {
    let swaps = plan_reorder(&args.current, &args.desired).context("Cannot plan reorder")?;

    let mut result = args.current.clone();
    apply_swaps(&mut result, &swaps);

    tracing::debug!(swaps = swaps.len(), "Planned reorder");

    if args.json {
        let output = PlanOutput { swaps, result };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(());
    }

    if swaps.is_empty() {
        println!("Already in the desired order.");
        return Ok(());
    }

    println!("{} swap(s):", swaps.len());
    for op in &swaps {
        println!("  {}", op);
    }
    println!();
    println!("Result: {}", result.join(","));

    Ok(())
}
