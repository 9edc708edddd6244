use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_profile(dir: &TempDir) -> PathBuf {
    let profile = json!({
        "object_id": "0xprofile",
        "owner": "0x1234567890abcdef1234567890abcdef",
        "name": "Alice",
        "bio": "Painter",
        "avatar_cid": "creative",
        "theme": 4,
        "links": [
            { "label": "Portfolio", "url": "https://alice.example", "position": 0 },
            { "label": "Follow me", "url": "https://instagram.com/alice", "position": 1 },
            { "label": "Tip jar", "url": "https://ko-fi.com/alice", "position": 2 }
        ]
    });
    let path = dir.path().join("profile.json");
    fs::write(&path, profile.to_string()).expect("write profile");
    path
}

fn read_outbox(dir: &TempDir) -> Vec<Value> {
    let content = fs::read_to_string(dir.path().join("outbox.jsonl")).expect("read outbox");
    content
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid json"))
        .collect()
}

#[test]
fn config_init_writes_example_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).expect("read config");
    assert!(content.contains("swap_delay_ms = 1500"));
    assert!(content.contains("rpc_url"));

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_applies_env_overrides() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__MODULE_NAME", "links")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module_name = \"links\""));
}

#[test]
fn log_level_falls_back_to_config_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("config.toml"),
        "[general]\nlog_level = \"debug\"\n",
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["plan", "--current", "A,B", "--desired", "B,A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Planned reorder"));

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--log-level", "warn", "plan", "--current", "A,B", "--desired", "B,A"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Planned reorder").not());
}

#[test]
fn classify_outputs_valid_json() {
    let mut cmd = cargo_bin_cmd!("blucky");
    let output = cmd
        .args([
            "classify",
            "--url",
            "https://www.instagram.com/alice/",
            "--label",
            "Find me",
            "--json",
        ])
        .output()
        .expect("run classify");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["category"], "social");
    assert_eq!(value["platform"], "instagram");
    assert_eq!(value["username"], "alice");
    assert_eq!(value["rule"], "url_social");
}

#[test]
fn classify_label_wins_over_url() {
    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.args([
        "classify",
        "--url",
        "https://patreon.com/alice",
        "--label",
        "My new video",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Category: media"));
}

#[test]
fn plan_outputs_swaps_and_result() {
    let mut cmd = cargo_bin_cmd!("blucky");
    let output = cmd
        .args(["plan", "--current", "A,B,C", "--desired", "C,B,A", "--json"])
        .output()
        .expect("run plan");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["swaps"], json!([{ "index_a": 0, "index_b": 2 }]));
    assert_eq!(value["result"], json!(["C", "B", "A"]));
}

#[test]
fn plan_rejects_non_permutation() {
    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.args(["plan", "--current", "A,B", "--desired", "A,C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot plan reorder"));
}

#[test]
fn show_renders_profile_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let profile = write_profile(&dir);

    let mut cmd = cargo_bin_cmd!("blucky");
    let output = cmd
        .current_dir(dir.path())
        .args(["show", "0xprofile", "--share", "--json", "--profile-file"])
        .arg(&profile)
        .output()
        .expect("run show");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["profile"]["name"], "Alice");
    assert_eq!(value["profile"]["theme"]["name"], "Purple Dream");
    assert_eq!(value["profile"]["links"][1]["id"], "link-1");
    assert_eq!(
        value["profile"]["links"][1]["classification"]["platform"],
        "instagram"
    );
    assert_eq!(
        value["profile"]["links"][2]["classification"]["monetization_kind"],
        "donation"
    );
    assert_eq!(value["profile_url"], "https://blucky.app/profile/0xprofile");
    assert!(
        value["share"]["telegram"]
            .as_str()
            .unwrap()
            .starts_with("https://t.me/share/url?url=")
    );
}

#[test]
fn reorder_dry_run_leaves_outbox_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let profile = write_profile(&dir);

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args([
            "reorder",
            "0xprofile",
            "--order",
            "link-2,link-0,link-1",
            "--dry-run",
            "--profile-file",
        ])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 swap(s)"));

    assert!(!dir.path().join("outbox.jsonl").exists());
}

#[test]
fn reorder_queues_swaps_in_outbox() {
    let dir = TempDir::new().expect("temp dir");
    let profile = write_profile(&dir);

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args([
            "reorder",
            "0xprofile",
            "--order",
            "link-2,link-0,link-1",
            "--swap-delay-ms",
            "0",
            "--profile-file",
        ])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Queued 2 swap(s)"));

    let entries = read_outbox(&dir);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["target"], "0xpkg::linktree::swap_links");
    assert_eq!(entries[0]["object_id"], "0xprofile");
    assert_eq!(entries[0]["args"], json!([0, 2]));
    assert_eq!(entries[1]["args"], json!([1, 2]));
}

#[test]
fn reorder_rejects_unknown_link_id() {
    let dir = TempDir::new().expect("temp dir");
    let profile = write_profile(&dir);

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args([
            "reorder",
            "0xprofile",
            "--order",
            "link-2,link-0,link-9",
            "--profile-file",
        ])
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot plan reorder"));

    assert!(!dir.path().join("outbox.jsonl").exists());
}

#[test]
fn edit_validates_before_queueing() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args([
            "edit",
            "0xprofile",
            "add-link",
            "--label",
            "Blog",
            "--url",
            "blog.example",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid link URL"));

    assert!(!dir.path().join("outbox.jsonl").exists());

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args(["edit", "0xprofile", "theme", "5"])
        .assert()
        .success();

    let entries = read_outbox(&dir);
    assert_eq!(entries[0]["target"], "0xpkg::linktree::set_theme");
    assert_eq!(entries[0]["args"], json!([5]));
}

#[test]
fn edit_avatar_and_delete_target_registry() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args(["edit", "0xprofile", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sui.registry_id is not configured"));

    assert!(!dir.path().join("outbox.jsonl").exists());

    for args in [
        vec!["edit", "0xprofile", "avatar", "music"],
        vec!["edit", "0xprofile", "delete"],
    ] {
        let mut cmd = cargo_bin_cmd!("blucky");
        cmd.current_dir(dir.path())
            .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
            .env("BLUCKY__SUI__REGISTRY_ID", "0xregistry")
            .args(args)
            .assert()
            .success();
    }

    let entries = read_outbox(&dir);
    assert_eq!(entries[0]["target"], "0xpkg::linktree::set_avatar");
    assert_eq!(entries[0]["args"], json!(["music"]));
    assert_eq!(entries[1]["target"], "0xpkg::linktree::delete_profile");
    assert_eq!(entries[1]["args"], json!(["0xregistry", "0xprofile"]));
}

#[test]
fn edit_link_checks_fetched_profile() {
    let dir = TempDir::new().expect("temp dir");
    let profile = write_profile(&dir);

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .env("BLUCKY__POLICY__MAX_LINKS", "3")
        .args(["edit", "0xprofile", "--profile-file"])
        .arg(&profile)
        .args(["add-link", "--label", "Blog", "--url", "https://blog.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum of 3 links"));

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args(["edit", "0xprofile", "--profile-file"])
        .arg(&profile)
        .args(["remove-link", "--index", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!dir.path().join("outbox.jsonl").exists());

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .args(["edit", "0xprofile", "--profile-file"])
        .arg(&profile)
        .args(["add-link", "--label", "Blog", "--url", "https://blog.example"])
        .assert()
        .success();

    let entries = read_outbox(&dir);
    assert_eq!(entries[0]["target"], "0xpkg::linktree::add_link");
    assert_eq!(entries[0]["args"], json!(["Blog", "https://blog.example"]));
}

#[test]
fn create_queues_registry_call() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .env("BLUCKY__SUI__REGISTRY_ID", "0xregistry")
        .args(["create", "--name", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name must not be empty"));

    assert!(!dir.path().join("outbox.jsonl").exists());

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .env("BLUCKY__SUI__PACKAGE_ID", "0xpkg")
        .env("BLUCKY__SUI__REGISTRY_ID", "0xregistry")
        .args([
            "create", "--name", "Alice", "--bio", "Painter", "--avatar", "creative", "--theme",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Queued create profile 'Alice'"));

    let entries = read_outbox(&dir);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["target"], "0xpkg::linktree::create_profile_simple");
    assert!(entries[0].get("object_id").is_none());
    assert_eq!(
        entries[0]["args"],
        json!(["0xregistry", "Alice", "Painter", "creative", 4])
    );
}

#[test]
fn analytics_counts_views_and_clicks() {
    let dir = TempDir::new().expect("temp dir");

    for args in [
        vec!["analytics", "view", "0xprofile"],
        vec!["analytics", "view", "0xprofile"],
        vec!["analytics", "click", "0xprofile", "--label", "Shop"],
    ] {
        let mut cmd = cargo_bin_cmd!("blucky");
        cmd.current_dir(dir.path()).args(args).assert().success();
    }

    let mut cmd = cargo_bin_cmd!("blucky");
    let output = cmd
        .current_dir(dir.path())
        .args(["analytics", "show", "0xprofile", "--json"])
        .output()
        .expect("run analytics show");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["totalViews"], 2);
    assert_eq!(value["totalClicks"], 1);
    assert_eq!(value["clicksByLink"]["Shop"], 1);
}

#[test]
fn accounts_link_and_lookup() {
    let dir = TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .args([
            "accounts",
            "link",
            "--email",
            "alice@example.com",
            "--wallet",
            "0xwallet",
        ])
        .assert()
        .success();

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .args(["accounts", "lookup", "--wallet", "0xwallet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@example.com"));

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .args(["accounts", "unlink", "--email", "alice@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unlinked"));

    let mut cmd = cargo_bin_cmd!("blucky");
    cmd.current_dir(dir.path())
        .args(["accounts", "lookup", "--email", "alice@example.com"])
        .assert()
        .failure();
}
