mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::{Value, json};

fn invoke_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("invoke prints JSON")
}

#[test]
fn offline_invoke_returns_first_example_output() {
    let ctx = TestContext::new();

    let output =
        ctx.cli().args(["invoke", "habit_review", "--example", "--offline"]).output().unwrap();

    assert!(output.status.success());
    let result = invoke_json(&output);
    assert_eq!(result["success"], json!(true));
    assert_eq!(result["metrics"]["tokensUsed"], json!(0));
    assert_eq!(result["metrics"]["processingTimeMs"], json!(0));
    assert_eq!(result["data"]["summary"]["overallScore"], json!(65));
    assert_eq!(result["data"]["summary"]["topPerformingHabit"], "Drink 8 glasses of water");
}

#[test]
fn default_configuration_is_offline() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["invoke", "journal_insight"]).output().unwrap();

    assert!(output.status.success());
    let result = invoke_json(&output);
    assert_eq!(result["success"], json!(true));
    assert_eq!(result["data"]["themes"][0]["theme"], "Self-criticism and perfectionism");
}

#[test]
fn unknown_template_prints_failed_result() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["invoke", "sleep_coach", "--offline"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let result = invoke_json(&output);
    assert_eq!(result["success"], json!(false));
    assert_eq!(result["error"], "Template not found: sleep_coach");
    assert!(result.get("data").is_none());
}

#[test]
fn live_mode_without_key_is_a_configuration_error() {
    let ctx = TestContext::new();
    ctx.write_config("[model]\nmode = \"live\"\napi_key_env = \"THRIVE_TEST_UNSET_KEY\"\n");

    ctx.cli()
        .args(["invoke", "habit_review"])
        .env_remove("THRIVE_TEST_UNSET_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Environment variable 'THRIVE_TEST_UNSET_KEY' is not set",
        ));
}

#[test]
fn invalid_config_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("[model]\ntimeout_secs = 0\n");

    ctx.cli()
        .args(["invoke", "habit_review"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs must be greater than 0"));
}

#[test]
fn missing_explicit_config_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["invoke", "habit_review", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: nope.toml"));
}

fn live_config(ctx: &TestContext, server: &mockito::Server) {
    ctx.write_config(&format!(
        "[model]\nmode = \"live\"\napi_url = \"{}/v1/chat/completions\"\napi_key_env = \"THRIVE_TEST_KEY\"\ntimeout_secs = 5\n",
        server.url()
    ));
}

#[test]
fn live_invoke_calls_endpoint_and_validates_answer() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    live_config(&ctx, &server);

    let answer = json!({
        "sentiment": {
            "overall": "positive",
            "confidence": 0.9,
            "emotions": [{"emotion": "calm", "intensity": 0.6, "description": "Rested"}],
            "keywords": ["slept well"]
        },
        "emotionalState": {"primary": "calm", "secondary": [], "stability": "stable"},
        "copingStrategies": [],
        "recommendations": [],
        "followUp": []
    });
    let body = json!({
        "choices": [{"message": {"role": "assistant", "content": answer.to_string()}}],
        "usage": {"total_tokens": 420}
    });
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(mockito::Matcher::PartialJson(json!({
            "model": "gpt-4",
            "temperature": 0.2,
            "response_format": {"type": "json_object"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create();
    let vars = ctx.write_file("vars.json", r#"{"text": "Slept well", "moodRating": 8}"#);

    let output = ctx
        .cli()
        .args(["invoke", "checkin_sentiment", "--model", "gpt-4", "--vars"])
        .arg(&vars)
        .env("THRIVE_TEST_KEY", "sk-test")
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
    let result = invoke_json(&output);
    assert_eq!(result["success"], json!(true));
    assert_eq!(result["metrics"]["tokensUsed"], json!(420));
    assert_eq!(result["data"]["sentiment"]["overall"], "positive");
}

#[test]
fn live_invoke_surfaces_endpoint_errors() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    live_config(&ctx, &server);

    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
        .expect(1)
        .create();

    let output = ctx
        .cli()
        .args(["invoke", "habit_review", "--example"])
        .env("THRIVE_TEST_KEY", "sk-wrong")
        .output()
        .unwrap();

    mock.assert();
    assert_eq!(output.status.code(), Some(1));
    let result = invoke_json(&output);
    assert_eq!(result["error"], "Model API error: 401 - Incorrect API key provided");
}

#[test]
fn offline_flag_overrides_live_config() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    live_config(&ctx, &server);
    let mock = server.mock("POST", "/v1/chat/completions").expect(0).create();

    ctx.cli()
        .args(["invoke", "biohack_suggester", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morning_light_therapy"));

    mock.assert();
}

#[test]
fn live_invoke_calls_endpoint_once_on_server_error() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    live_config(&ctx, &server);

    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("")
        .expect(1)
        .create();

    let output = ctx
        .cli()
        .args(["invoke", "journal_insight", "--example"])
        .env("THRIVE_TEST_KEY", "sk-test")
        .output()
        .unwrap();

    mock.assert();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(invoke_json(&output)["error"], "Model API error: 503 - Server error");
}

#[test]
fn live_invoke_reports_rate_limit_hint_without_retrying() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    live_config(&ctx, &server);

    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_header("retry-after", "3")
        .with_body("")
        .expect(1)
        .create();

    let output = ctx
        .cli()
        .args(["invoke", "habit_review", "--example"])
        .env("THRIVE_TEST_KEY", "sk-test")
        .output()
        .unwrap();

    mock.assert();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        invoke_json(&output)["error"],
        "Model API error: 429 - Rate limited (retry_after_ms=3000)"
    );
}
