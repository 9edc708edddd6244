//! Classify command - one-shot link classification

use anyhow::{Context, Result};
use blucky_domain::LinkClassification;
use blucky_domain::usecases::classify_with_rule;
use serde::Serialize;

use crate::args::ClassifyArgs;

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    url: &'a str,
    label: &'a str,
    /// Rule that decided the result; absent when no rule matched
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
    #[serde(flatten)]
    classification: LinkClassification,
}

pub async fn execute(args: ClassifyArgs) -> Result<()> {
    let (rule, classification) = match classify_with_rule(&args.url, &args.label) {
        Some((rule, classification)) => (Some(rule), classification),
        None => (None, LinkClassification::normal()),
    };

    tracing::info!(
        url = %args.url,
        category = %classification.category,
        rule = rule.unwrap_or("none"),
        "Classified link"
    );

    if args.json {
        let output = ClassifyOutput {
            url: &args.url,
            label: &args.label,
            rule,
            classification,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        println!("Category: {}", classification.category);
        if let Some(platform) = classification.platform {
            println!("Platform: {}", platform);
        }
        if let Some(username) = &classification.username {
            println!("Username: {}", username);
        }
        if let Some(kind) = classification.monetization_kind {
            println!("Monetization: {}", kind);
        }
        println!("Rule: {}", rule.unwrap_or("none"));
    }

    Ok(())
}
