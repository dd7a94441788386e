//! Testes de integração para a CLI do Trajeto.

use std::process::Command;

/// Verifica que o binário pode ser executado.
fn trajeto_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trajeto"))
}

#[test]
fn test_version_command() {
    let output = trajeto_bin()
        .arg("version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trajeto"));
}

#[test]
fn test_help_command() {
    let output = trajeto_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("record"));
    assert!(stdout.contains("history"));
    assert!(stdout.contains("reset"));
    assert!(stdout.contains("config"));
}

#[test]
fn test_init_creates_config() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("trajeto.toml");

    let output = trajeto_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "init command failed");
    assert!(config_path.exists(), "Config file was not created");

    // Verifica conteúdo básico
    let content = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert!(content.contains("[history]"));
    assert!(content.contains("[storage]"));
}

#[test]
fn test_record_then_history() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("trajeto.toml");
    let db_path = temp_dir.path().join("trajeto.db");

    let config = format!(
        "[storage]\ndb_path = \"{}\"\n",
        db_path.display()
    );
    fs::write(&config_path, config).expect("Failed to write config");

    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args([
            "record", "--user", "ana", "--start", "Central", "--end", "Luz", "--time", "12",
            "--fare", "3.5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "record command failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Central → Luz"));
    assert!(stdout.contains("central→luz (1x)"));

    // Segundo registro da mesma rota soma no contador
    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args([
            "record", "--user", "ana", "--start", "central", "--end", " luz ", "--time", "12",
            "--fare", "3.5",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("central→luz (2x)"));

    // history relê o mesmo estado sem mutar nada
    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["history", "--user", "ana"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "history command failed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("central→luz (2x)"));
}

#[test]
fn test_history_for_unknown_user_is_empty() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("trajeto.toml");
    let db_path = temp_dir.path().join("trajeto.db");

    let config = format!(
        "[storage]\ndb_path = \"{}\"\n",
        db_path.display()
    );
    fs::write(&config_path, config).expect("Failed to write config");

    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["history", "--user", "ninguem"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nenhuma rota registrada"));
}

#[test]
fn test_reset_clears_history() {
    use std::fs;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("trajeto.toml");
    let db_path = temp_dir.path().join("trajeto.db");

    let config = format!(
        "[storage]\ndb_path = \"{}\"\n",
        db_path.display()
    );
    fs::write(&config_path, config).expect("Failed to write config");

    trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args([
            "record", "--user", "ana", "--start", "a", "--end", "b",
        ])
        .output()
        .expect("Failed to execute command");

    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["reset", "--user", "ana"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "reset command failed");

    let output = trajeto_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["history", "--user", "ana"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nenhuma rota registrada"));
}

#[test]
fn test_invalid_command() {
    let output = trajeto_bin()
        .arg("invalid-command-that-does-not-exist")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_verbose_flag() {
    let output = trajeto_bin()
        .arg("-v")
        .arg("version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}

#[test]
fn test_quiet_flag() {
    let output = trajeto_bin()
        .arg("-q")
        .arg("version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}
