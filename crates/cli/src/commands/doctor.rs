//! Doctor command - validate configuration and show status

use anyhow::Result;
use blucky_adapters::kv::SqliteKvStore;
use blucky_domain::share::Network;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::args::DoctorArgs;
use crate::config::AppConfig;

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    network: CheckResult,
    data_store: CheckResult,
    sui_rpc: CheckResult,
    contract: CheckResult,
    outbox: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
    details: Option<serde_json::Value>,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        network: CheckResult::error("Not checked"),
        data_store: CheckResult::error("Not checked"),
        sui_rpc: CheckResult::error("Not checked"),
        contract: CheckResult::error("Not checked"),
        outbox: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    // Check config
    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {:#}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.network = check_network(config);
        report.data_store = check_data_store(&config.general.data_db_path).await;
        report.sui_rpc = check_sui_rpc(config);
        report.contract = check_contract(config);
        report.outbox = check_outbox(&config.reorder.outbox_path);
    }

    // Determine overall status
    let checks = [
        &report.config,
        &report.network,
        &report.data_store,
        &report.sui_rpc,
        &report.contract,
        &report.outbox,
    ];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    // Output report
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

fn check_network(config: &AppConfig) -> CheckResult {
    match config.general.network.parse::<Network>() {
        Ok(network) => CheckResult::ok(format!("Network: {}", network)),
        Err(e) => CheckResult::error(e),
    }
}

async fn check_data_store(path: &Path) -> CheckResult {
    match SqliteKvStore::new(path).await {
        Ok(store) => match store.keys_with_prefix("analytics_").await {
            Ok(keys) => CheckResult::ok(format!("Data store: {}", path.display())).with_details(
                serde_json::json!({
                    "path": path.display().to_string(),
                    "tracked_profiles": keys.len(),
                }),
            ),
            Err(e) => CheckResult::error(format!("Failed to query data store: {}", e)),
        },
        Err(e) => CheckResult::error(format!(
            "Failed to open data store {}: {}",
            path.display(),
            e
        )),
    }
}

fn check_sui_rpc(config: &AppConfig) -> CheckResult {
    let rpc_url = config.sui.rpc_url.trim();

    if rpc_url.is_empty() {
        return CheckResult::error("sui.rpc_url is empty");
    }
    if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
        return CheckResult::error(format!("sui.rpc_url is not an http(s) URL: {}", rpc_url));
    }
    if config.sui.timeout_secs == 0 {
        return CheckResult::warn(format!("RPC: {}, timeout is 0s", rpc_url));
    }

    CheckResult::ok(format!(
        "RPC: {}, timeout: {}s",
        rpc_url, config.sui.timeout_secs
    ))
}

fn check_contract(config: &AppConfig) -> CheckResult {
    let sui = &config.sui;

    if sui.module_name.trim().is_empty() {
        return CheckResult::error("sui.module_name is empty");
    }
    if sui.package_id.trim().is_empty() {
        return CheckResult::warn("sui.package_id not set; reorder and edit are unavailable");
    }

    let result = CheckResult::ok(format!("Target: {}::{}", sui.package_id, sui.module_name));
    if sui.registry_id.trim().is_empty() {
        result
    } else {
        result.with_details(serde_json::json!({ "registry_id": sui.registry_id }))
    }
}

fn check_outbox(path: &Path) -> CheckResult {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => CheckResult::warn(
            format!("Outbox directory will be created: {}", parent.display()),
        ),
        _ => CheckResult::ok(format!("Outbox: {}", path.display())),
    }
}

fn print_report(report: &DoctorReport) {
    println!("blucky Doctor Report");
    println!("====================");
    println!();

    print_check("Config", &report.config);
    print_check("Network", &report.network);
    print_check("Data Store", &report.data_store);
    print_check("Sui RPC", &report.sui_rpc);
    print_check("Contract", &report.contract);
    print_check("Outbox", &report.outbox);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
