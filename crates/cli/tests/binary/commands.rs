use predicates::prelude::*;

use crate::harness::{Workspace, berth_cmd, descriptor};

const TASK_ENV: &str = "\
ECR_REGISTRY=registry.example.com
IMAGE_TAG=v1.4.2
EXECUTION_ROLE_ARN=arn:role/exec
TASK_ROLE_ARN=arn:role/task
DB_HOST=db.internal
DB_SECRET_ARN=arn:secret/db
AWS_REGION=us-east-1
";

#[test]
fn render_fragment_to_stdout() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "${REPO}:${TAG}"}"#);

    let output = ws
        .berth("render", &template)
        .args(["--set", "REPO=app", "--set", "TAG=v1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rendered, serde_json::json!({"image": "app:v1"}));
}

#[test]
fn render_task_with_env_file() {
    let ws = Workspace::new();
    let env_file = ws.file(".env", TASK_ENV);

    ws.berth("render", &descriptor("task.json"))
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("registry.example.com/product-api:v1.4.2"))
        .stdout(predicate::str::contains("${").not());
}

#[test]
fn render_reads_process_env() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "${BERTH_TEST_IMAGE}"}"#);

    berth_cmd()
        .arg("render")
        .arg("-f")
        .arg(&template)
        .env("BERTH_TEST_IMAGE", "nginx:alpine")
        .assert()
        .success()
        .stdout(predicate::str::contains("nginx:alpine"));
}

#[test]
fn render_to_output_file() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "${REPO}"}"#);
    let out = ws.path("resolved.json");

    ws.berth("render", &template)
        .args(["--set", "REPO=app"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"app\""));
}

#[test]
fn render_is_byte_identical() {
    let ws = Workspace::new();
    let env_file = ws.file(".env", TASK_ENV);

    let run = || {
        ws.berth("render", &descriptor("task.json"))
            .arg("--env-file")
            .arg(&env_file)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn unresolved_placeholders_fail() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "${REPO}:${TAG}", "name": "${NAME}"}"#);

    ws.berth("render", &template)
        .args(["--set", "REPO=app"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("${TAG}"))
        .stderr(predicate::str::contains("${NAME}"));
}

#[test]
fn json_error_report() {
    let ws = Workspace::new();
    let template = ws.file(
        "task.json",
        r#"{
            "family": "web",
            "executionRoleRef": "arn:role/exec",
            "cpu": 256,
            "memory": 512,
            "requiresCompatibilities": ["FARGATE"],
            "containers": [
                {"name": "app", "image": "${IMAGE}", "portMappings": [{"containerPort": 70000}]}
            ]
        }"#,
    );

    let output = ws.berth("validate", &template).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(report["unresolved"][0]["name"], "IMAGE");
    assert_eq!(
        report["violations"][0]["path"],
        "containers[0].portMappings[0].containerPort"
    );
}

#[test]
fn malformed_template() {
    let ws = Workspace::new();
    let template = ws.file("broken.json", r#"{"image": "#);

    ws.berth("render", &template)
        .assert()
        .failure()
        .code(65)
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn missing_template() {
    let ws = Workspace::new();

    ws.berth("render", &ws.path("absent.json"))
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn bad_set_argument() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "nginx"}"#);

    ws.berth("render", &template)
        .args(["--set", "REPO"])
        .assert()
        .failure()
        .code(64)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn validate_ok() {
    let ws = Workspace::new();
    let env_file = ws.file(".env", TASK_ENV);

    ws.berth("validate", &descriptor("task.json"))
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok (task descriptor)"));
}

#[test]
fn validate_forced_kind() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "nginx"}"#);

    ws.berth("validate", &template)
        .args(["--kind", "service"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("serviceName"));
}

#[test]
fn vars_lists_placeholders() {
    let ws = Workspace::new();
    let template = ws.file("image.json", r#"{"image": "${REPO}:${TAG}"}"#);

    let output =
        ws.berth("vars", &template).args(["--set", "REPO=app", "--json"]).output().unwrap();
    assert!(output.status.success());

    let vars: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        vars,
        serde_json::json!([
            {"name": "REPO", "resolved": true},
            {"name": "TAG", "resolved": false},
        ])
    );
}

#[test]
fn render_hcl_template() {
    let ws = Workspace::new();
    let env_file = ws.file(".env", TASK_ENV);

    ws.berth("render", &descriptor("task.hcl"))
        .arg("--env-file")
        .arg(&env_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"family\": \"product-api\""));
}
