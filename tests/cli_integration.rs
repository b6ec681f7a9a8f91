//! Integration tests for the eliza-starter binary
//!
//! Each test runs the binary with a cleared environment and a temporary
//! HOME so that neither the developer's variables nor their config files
//! leak into plugin selection.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to get the eliza-starter binary path
fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_eliza-starter"))
}

/// Run the binary from `home` with only `vars` set
fn run(home: &Path, vars: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(binary())
        .env_clear()
        .env("HOME", home)
        .envs(vars.iter().copied())
        .current_dir(home)
        .args(args)
        .output()
        .expect("Failed to execute eliza-starter")
}

fn run_json(home: &Path, vars: &[(&str, &str)], args: &[&str]) -> Value {
    let output = run(home, vars, args);
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn plugin_names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_plugins_with_nothing_set() {
    let home = TempDir::new().unwrap();
    let plugins = run_json(home.path(), &[], &["plugins", "--format", "json"]);

    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "bootstrap"]);
    assert_eq!(plugins[0]["package"], "@elizaos/plugin-sql");
}

#[test]
fn test_plugins_with_only_openai_key() {
    let home = TempDir::new().unwrap();
    let plugins = run_json(
        home.path(),
        &[("OPENAI_API_KEY", "sk-test")],
        &["plugins", "--format", "json"],
    );

    assert_eq!(plugin_names(&plugins), vec!["sql", "openai", "bootstrap"]);
}

#[test]
fn test_plugins_with_everything_set() {
    let home = TempDir::new().unwrap();
    let vars = [
        ("ANTHROPIC_API_KEY", "a"),
        ("OPENAI_API_KEY", "b"),
        ("DISCORD_API_TOKEN", "c"),
        ("TWITTER_USERNAME", "d"),
        ("TELEGRAM_BOT_TOKEN", "e"),
        ("IGNORE_BOOTSTRAP", "f"),
    ];
    let plugins = run_json(home.path(), &vars, &["plugins", "--format", "json"]);

    assert_eq!(
        plugin_names(&plugins),
        vec!["sql", "anthropic", "openai", "discord", "twitter", "telegram"]
    );
}

#[test]
fn test_plugins_explain() {
    let home = TempDir::new().unwrap();
    let rules = run_json(
        home.path(),
        &[("IGNORE_BOOTSTRAP", "1")],
        &["plugins", "--explain", "--format", "json"],
    );

    let rules = rules.as_array().unwrap();
    assert_eq!(rules.len(), 8);
    assert_eq!(rules[7]["name"], "bootstrap");
    assert_eq!(rules[7]["selected"], false);
    assert_eq!(rules[7]["condition"], "IGNORE_BOOTSTRAP is not set");
    assert_eq!(rules[0]["selected"], true);
}

#[test]
fn test_show_json_is_wire_shape() {
    let home = TempDir::new().unwrap();
    let character = run_json(
        home.path(),
        &[("ANTHROPIC_API_KEY", "a"), ("IGNORE_BOOTSTRAP", "1")],
        &["show", "--format", "json"],
    );

    assert_eq!(character["name"], "Eliza");
    assert_eq!(
        character["plugins"],
        serde_json::json!(["@elizaos/plugin-sql", "@elizaos/plugin-anthropic", "@elizaos/plugin-local-ai"])
    );
    assert_eq!(character["settings"]["secrets"], serde_json::json!({}));
    assert_eq!(character["messageExamples"].as_array().unwrap().len(), 2);
    assert_eq!(character["style"]["chat"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_environment_fills_unset_variables() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("eliza.yaml");
    fs::write(&config, "environment:\n  TELEGRAM_BOT_TOKEN: from-config\n").unwrap();

    let plugins = run_json(
        home.path(),
        &[],
        &["--config", config.to_str().unwrap(), "plugins", "--format", "json"],
    );

    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "telegram", "bootstrap"]);
}

#[test]
fn test_character_override_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("ada.json");
    fs::write(
        &path,
        r#"{"name": "Ada", "bio": ["Counts things"], "style": {"all": ["Be exact"]}}"#,
    )
    .unwrap();

    let character = run_json(
        home.path(),
        &[("OPENAI_API_KEY", "sk")],
        &["--character", path.to_str().unwrap(), "show", "--format", "json"],
    );

    assert_eq!(character["name"], "Ada");
    assert_eq!(
        character["plugins"],
        serde_json::json!(["@elizaos/plugin-sql", "@elizaos/plugin-openai", "@elizaos/plugin-bootstrap"])
    );
}

#[test]
fn test_invalid_character_file_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yaml");
    fs::write(&path, "name: \"\"\n").unwrap();

    let output = run(home.path(), &[], &["--character", path.to_str().unwrap(), "show", "--format", "json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid character"), "stderr: {stderr}");
}

#[test]
fn test_export_writes_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out").join("eliza.json");

    let output = run(home.path(), &[], &["export", "--output", out.to_str().unwrap()]);
    assert!(output.status.success());

    let exported: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported["name"], "Eliza");
    assert_eq!(exported["plugins"][1], "@elizaos/plugin-local-ai");
}

#[test]
fn test_export_yaml_to_stdout() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &[], &["export", "--format", "yaml"]);
    assert!(output.status.success());

    let exported: Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(exported["name"], "Eliza");
    assert_eq!(exported["plugins"].as_array().unwrap().len(), 3);
    assert_eq!(exported["messageExamples"][0][1]["name"], "Eliza");
}

#[test]
fn test_init_logs_character_name() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &[], &["init"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Initialized"));

    let log_file = home.path().join(".local/share/eliza-starter/logs/eliza-starter.log");
    let log = fs::read_to_string(log_file).unwrap();
    assert!(log.contains("Initializing character"));
    assert!(log.contains("Name: Eliza"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    let output = run(home.path(), &[], &["completions", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("eliza-starter"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_value_counts_as_set() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let home = TempDir::new().unwrap();
    let output = Command::new(binary())
        .env_clear()
        .env("HOME", home.path())
        .env("OPENAI_API_KEY", OsStr::from_bytes(b"sk\xff"))
        .current_dir(home.path())
        .args(["plugins", "--format", "json"])
        .output()
        .expect("Failed to execute eliza-starter");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let plugins: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plugin_names(&plugins), vec!["sql", "openai", "bootstrap"]);
}

#[test]
fn test_config_from_env_var() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    fs::write(&config, "environment:\n  DISCORD_API_TOKEN: from-env-config\n").unwrap();

    let plugins = run_json(
        home.path(),
        &[("ELIZA_STARTER_CONFIG", config.to_str().unwrap())],
        &["plugins", "--format", "json"],
    );

    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "discord", "bootstrap"]);
}

#[test]
fn test_config_from_user_config_dir() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config/eliza-starter");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("eliza.yaml"), "environment:\n  TWITTER_USERNAME: eliza\n").unwrap();

    let plugins = run_json(home.path(), &[], &["plugins", "--format", "json"]);

    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "twitter", "bootstrap"]);
}

#[test]
fn test_config_from_working_directory() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("eliza.yaml"), "environment:\n  TELEGRAM_BOT_TOKEN: t\n").unwrap();

    let plugins = run_json(home.path(), &[], &["plugins", "--format", "json"]);

    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "telegram", "bootstrap"]);
}

#[test]
fn test_process_variables_win_over_config() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("eliza.yaml"), "environment:\n  IGNORE_BOOTSTRAP: \"1\"\n").unwrap();

    let plugins = run_json(
        home.path(),
        &[("OPENAI_API_KEY", "sk"), ("IGNORE_BOOTSTRAP", "")],
        &["plugins", "--format", "json"],
    );

    // An empty process value is unset, so the config value fills it
    assert_eq!(plugin_names(&plugins), vec!["sql", "openai"]);
}

#[test]
fn test_broken_config_falls_through_to_next_file() {
    let home = TempDir::new().unwrap();
    let broken = home.path().join("broken.yaml");
    fs::write(&broken, "log_level: [oops]\n").unwrap();
    fs::write(home.path().join("eliza.yaml"), "environment:\n  ANTHROPIC_API_KEY: a\n").unwrap();

    let output = run(
        home.path(),
        &[("ELIZA_STARTER_CONFIG", broken.to_str().unwrap())],
        &["plugins", "--format", "json"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let plugins: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plugin_names(&plugins), vec!["sql", "anthropic", "local-ai", "bootstrap"]);
}

#[test]
fn test_broken_config_is_reported_and_defaults_apply() {
    let home = TempDir::new().unwrap();
    let broken = home.path().join("broken.yaml");
    fs::write(&broken, "log_level: [oops]\n").unwrap();

    let output = run(
        home.path(),
        &[("ELIZA_STARTER_CONFIG", broken.to_str().unwrap())],
        &["plugins", "--format", "json"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let plugins: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plugin_names(&plugins), vec!["sql", "local-ai", "bootstrap"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "stderr: {stderr}");

    let log_file = home.path().join(".local/share/eliza-starter/logs/eliza-starter.log");
    let log = fs::read_to_string(log_file).unwrap();
    assert!(log.contains("Failed to load config"));
    assert!(log.contains(&broken.display().to_string()));
    assert!(log.contains("No config file found, using defaults"));
}

#[test]
fn test_broken_config_warning_respects_quiet() {
    let home = TempDir::new().unwrap();
    let broken = home.path().join("broken.yaml");
    fs::write(&broken, "log_level: [oops]\n").unwrap();

    let output = run(
        home.path(),
        &[("ELIZA_STARTER_CONFIG", broken.to_str().unwrap())],
        &["--quiet", "plugins", "--format", "json"],
    );

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn test_show_text_marks_third_party_plugins() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bot.yaml");
    fs::write(&path, "name: Bot\nplugins:\n  - \"@elizaos/plugin-sql\"\n  - \"@acme/plugin-weather\"\n").unwrap();

    let output = run(
        home.path(),
        &[],
        &["--character", path.to_str().unwrap(), "show", "--format", "text"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("@elizaos/plugin-sql"));
    assert!(stdout.contains("@acme/plugin-weather"));
    assert_eq!(stdout.matches("(third-party)").count(), 1);
}
