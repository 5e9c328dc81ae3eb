use std::path::PathBuf;
use std::process::Command;

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "allcoin-cli-{}-{}.yaml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).expect("write test config");
    path
}

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_allcoin-cli"));
    command
        .env_remove("ALLCOIN_API_KEY")
        .env_remove("ALLCOIN_API_SECRET")
        .env("RUST_LOG", "error");
    command
}

#[test]
fn cli_dry_run_with_config_works() {
    let config_path = write_config(
        "dry-run",
        "api_key: test-key\napi_secret: test-secret\nclient:\n  request_options:\n    timeout: 5\n",
    );

    let output = cli()
        .arg("--config")
        .arg(&config_path)
        .arg("--dry-run")
        .arg("userinfo")
        .output()
        .expect("Failed to start allcoin-cli binary");

    let _ = std::fs::remove_file(&config_path);
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_signed_command_requires_credentials() {
    let output = cli()
        .arg("--dry-run")
        .arg("open-orders")
        .arg("eth_btc")
        .output()
        .expect("Failed to start allcoin-cli binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api_key"), "unexpected stderr: {stderr}");
}

#[test]
fn cli_public_command_without_credentials_validates() {
    let output = cli()
        .arg("--dry-run")
        .arg("klines")
        .arg("eth_btc")
        .arg("1hour")
        .output()
        .expect("Failed to start allcoin-cli binary");

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_rejects_unknown_kline_type() {
    let output = cli()
        .arg("--dry-run")
        .arg("klines")
        .arg("eth_btc")
        .arg("2min")
        .output()
        .expect("Failed to start allcoin-cli binary");

    assert!(!output.status.success());
}
