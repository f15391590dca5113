//! CLI tests for the `predict` binary

mod common;

use assert_cmd::Command;
use common::{complete_payload_json, feature_args};
use mockito::{Matcher, Server};
use predicates::prelude::*;

fn predict() -> Command {
    let mut cmd = Command::cargo_bin("predict").unwrap();
    cmd.env_remove("PREDICT_ENDPOINT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_options_lists_catalog_and_keys() {
    predict()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rice husk"))
        .stdout(predicate::str::contains("Shaddock peel"))
        .stdout(predicate::str::contains("Cycle N"))
        .stdout(predicate::str::contains("Pyrolysis Temperature (°C)"));
}

#[test]
fn test_submit_prints_prediction() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/predict/")
        .match_body(Matcher::Json(complete_payload_json()))
        .with_status(200)
        .with_body(r#"{"Reversible_capacity": 123.4}"#)
        .expect(1)
        .create();

    predict()
        .args(["submit", "--biomass", "Rice husk"])
        .args(feature_args("1"))
        .args(["--endpoint", &format!("{}/api/predict/", server.url())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted Reversible Capacity: 123.4"));

    mock.assert();
}

#[test]
fn test_submit_service_error_exits_nonzero() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/predict/")
        .with_status(400)
        .with_body(r#"{"error": "bad pyrolysis value"}"#)
        .create();

    predict()
        .args(["submit", "--biomass", "Rice husk"])
        .args(feature_args("1"))
        .args(["--endpoint", &format!("{}/api/predict/", server.url())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: bad pyrolysis value"));
}

#[test]
fn test_submit_json_output() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/predict/")
        .with_status(200)
        .with_body(r#"{"Reversible_capacity": 98.1}"#)
        .create();

    let output = predict()
        .args(["submit", "--json", "--biomass", "Rice husk"])
        .args(feature_args("1"))
        .env("PREDICT_ENDPOINT", format!("{}/api/predict/", server.url()))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["payload"], complete_payload_json());
    assert_eq!(
        report["outcome"],
        serde_json::json!({"state": "succeeded", "value": 98.1})
    );
}

#[test]
fn test_incomplete_form_is_not_sent() {
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    predict()
        .args(["submit", "--biomass", "Rice husk", "--feature", "BET=12.5"])
        .args(["--endpoint", &format!("{}/api/predict/", server.url())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("form is incomplete"))
        .stderr(predicate::str::contains("Cycle Number"));

    mock.assert();
}

#[test]
fn test_unknown_feature_key_is_rejected() {
    predict()
        .args(["submit", "--biomass", "Rice husk", "--feature", "Cycle Number=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown feature key"));
}

#[test]
fn test_unknown_biomass_is_rejected() {
    predict()
        .args(["submit", "--biomass", "Granite"])
        .args(feature_args("1"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown biomass"));
}

#[test]
fn test_bad_endpoint_scheme_is_rejected() {
    predict()
        .args(["submit", "--biomass", "Rice husk", "--endpoint", "ftp://example.com/"])
        .args(feature_args("1"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported endpoint scheme"));
}
