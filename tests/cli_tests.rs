mod common;

use common::{run_therapy_summary, TestEnv};

#[test]
fn help_shows_usage() {
    let output = run_therapy_summary(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("serve"));
    assert!(stdout.contains("mask"));
}

#[test]
fn version_shows_version() {
    let output = run_therapy_summary(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("therapy-summary "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_therapy_summary(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("therapy-summary"));
}

#[test]
fn serve_refuses_to_start_without_secrets() {
    let output = run_therapy_summary(&["serve", "--port", "0"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "serve unexpectedly succeeded\nstderr:\n{}",
        stderr
    );
    assert!(stderr.contains("OPENAI_API_KEY"), "stderr:\n{}", stderr);
    assert!(stderr.contains("BACKEND_API_KEY"), "stderr:\n{}", stderr);
}

#[test]
fn mask_argument_is_redacted() {
    let output = run_therapy_summary(&["mask", "Call 555-123-4567 or mail a.b@example.com"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout, "Call [PHONE] or mail [EMAIL]\n");
}

#[test]
fn mask_reads_stdin() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["mask"], "Aadhaar: 1234 5678 9012\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Aadhaar: [AADHAAR]\n");
}

#[test]
fn prompt_prints_message_pair() {
    let output = run_therapy_summary(&[
        "prompt",
        "--notes",
        "Met with client at 9876543210",
        "--anonymize",
        "--action-items",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "prompt should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let messages: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    let user = messages[1]["content"].as_str().unwrap();
    assert!(user.contains("Include Action Items: Yes"));
    assert!(user.contains("Met with client at [PHONE]"));
}

#[test]
fn prompt_rejects_blank_notes() {
    let output = run_therapy_summary(&["prompt", "--notes", "   "]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Session notes are required to generate a summary."));
}

#[test]
fn config_show_redacts_secrets() {
    let env = TestEnv::new();
    env.write_config("[auth]\napi_key = \"super-secret\"\n\n[server]\nport = 9123\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "config show should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("[server]"));
    assert!(stdout.contains("port = 9123"));
    assert!(!stdout.contains("super-secret"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(first.status.success());
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}
