use anyhow::Result;
use std::process::Command;
use tempfile::TempDir;

fn service_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_diabetes-predict"))
}

#[test]
fn test_process_exits_when_artifact_missing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("diabetes_model.json");

    let output = service_binary()
        .arg("--model-path")
        .arg(&missing)
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr.contains("Model file not found"));
    assert!(stderr.contains("train the model first"));
    Ok(())
}

#[test]
fn test_process_exits_when_config_file_missing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("service.toml");

    let output = service_binary().arg("--config").arg(&missing).output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("cannot read config file"));
    Ok(())
}

#[test]
fn test_process_rejects_invalid_log_level_before_loading() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("service.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n")?;

    // 模型路徑不存在，但配置錯誤應先被回報
    let output = service_binary()
        .arg("--config")
        .arg(&config_path)
        .arg("--model-path")
        .arg(temp_dir.path().join("diabetes_model.json"))
        .output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("logging.level"));
    Ok(())
}
