//! End-to-end flow against a real directory tree: submission through
//! validation, persistence, and the lifecycle listings an external worker
//! drives by moving files between directories.

use rlgate_core::{
    Configuration, ConfigurationFileGateway, ConfigurationFileGatewayFactory, GatewaySettings,
    JsonFileGateway,
};
use serde_json::json;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out the configurations root the way the deployment does.
fn configurations_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    for sub in ["processing", "done", "error"] {
        fs::create_dir(dir.path().join(sub)).unwrap();
    }
    dir
}

fn gateway_over(root: &Path) -> JsonFileGateway {
    JsonFileGateway::new(GatewaySettings::new(root))
}

/// Stand-in for the external worker: move a stored file into a lifecycle
/// subdirectory.
fn worker_moves(root: &Path, filename: &str, state_dir: &str) {
    fs::rename(root.join(filename), root.join(state_dir).join(filename)).unwrap();
}

#[test]
fn submission_flows_into_the_unprocessed_listing() {
    let root = configurations_root();
    let gateway = gateway_over(root.path());

    let submission = json!({
        "algorithm": "PPO",
        "algorithm_config": {"algo": "PPO", "env": "Humanoid-v2", "gamma": 1.5}
    });
    let configuration = Configuration::from_submission(&submission).unwrap();
    let saved = gateway.save(&configuration).unwrap();

    assert!(saved.filename.starts_with("Humanoid-v2_PPO_"));

    let unprocessed = gateway.list_unprocessed().unwrap();
    assert_eq!(unprocessed, vec![configuration.to_json()]);
    assert!(gateway.list_processing().unwrap().is_empty());
    assert!(gateway.list_done().unwrap().is_empty());
    assert!(gateway.list_failed().unwrap().is_empty());
}

#[test]
fn listings_follow_the_worker_through_the_lifecycle() {
    let root = configurations_root();
    let gateway = gateway_over(root.path());

    let done_run = Configuration::from_submission(&json!({
        "algorithm": "acer",
        "algorithm_config": {"algo": "acer", "env_name": "CartPole-v0"}
    }))
    .unwrap();
    let failed_run = Configuration::from_submission(&json!({
        "algorithm": "SAC",
        "algorithm_config": {"algo": "SAC"}
    }))
    .unwrap();

    let done_file = gateway.save(&done_run).unwrap().filename;
    let failed_file = gateway.save(&failed_run).unwrap().filename;
    assert_eq!(gateway.list_unprocessed().unwrap().len(), 2);

    worker_moves(root.path(), &done_file, "processing");
    assert_eq!(gateway.list_unprocessed().unwrap().len(), 1);
    assert_eq!(gateway.list_processing().unwrap(), vec![done_run.to_json()]);

    worker_moves(root.path(), &failed_file, "error");
    assert!(gateway.list_unprocessed().unwrap().is_empty());
    assert_eq!(gateway.list_failed().unwrap(), vec![failed_run.to_json()]);

    fs::rename(
        root.path().join("processing").join(&done_file),
        root.path().join("done").join(&done_file),
    )
    .unwrap();
    assert!(gateway.list_processing().unwrap().is_empty());
    assert_eq!(gateway.list_done().unwrap(), vec![done_run.to_json()]);
}

#[test]
fn listing_is_idempotent_without_intervening_writes() {
    let root = configurations_root();
    let gateway = gateway_over(root.path());

    for _ in 0..3 {
        let configuration = Configuration::from_submission(&json!({
            "algorithm": "acerac",
            "algorithm_config": {"algo": "acerac"}
        }))
        .unwrap();
        gateway.save(&configuration).unwrap();
    }

    let first: HashSet<String> = gateway
        .list_unprocessed()
        .unwrap()
        .into_iter()
        .map(|doc| doc.to_string())
        .collect();
    let second: HashSet<String> = gateway
        .list_unprocessed()
        .unwrap()
        .into_iter()
        .map(|doc| doc.to_string())
        .collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn acer_submissions_gain_an_experiment_name_before_persistence() {
    let root = configurations_root();
    let gateway = gateway_over(root.path());

    let configuration = Configuration::from_submission(&json!({
        "algorithm": "acer",
        "algorithm_config": {"algo": "acer"}
    }))
    .unwrap();
    gateway.save(&configuration).unwrap();

    let stored = gateway.list_unprocessed().unwrap();
    let experiment_name = stored[0]["algorithm_config"]["experiment_name"]
        .as_str()
        .unwrap();
    assert_eq!(experiment_name.len(), 6);
    assert!(experiment_name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn factory_gateways_share_the_same_directory_tree() {
    let root = configurations_root();
    let settings = GatewaySettings::new(root.path());

    let configuration = Configuration::from_submission(&json!({
        "algorithm": "PPO",
        "algorithm_config": {"algo": "PPO"}
    }))
    .unwrap();

    ConfigurationFileGatewayFactory::gateway("json", &settings)
        .unwrap()
        .save(&configuration)
        .unwrap();

    let listed = ConfigurationFileGatewayFactory::default_gateway(&settings)
        .list_unprocessed()
        .unwrap();
    assert_eq!(listed, vec![configuration.to_json()]);
}
