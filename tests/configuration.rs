use fridgeplan::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(None)?;

    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.dashboard.expiring_window_days, 3);
    assert_eq!(config.user.id, "demo");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("fridgeplan.toml");
    std::fs::write(
        &path,
        r#"
[dashboard]
expiring_window_days = 5

[data]
path = "data/snapshot.json"
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.dashboard.expiring_window_days, 5);
    assert_eq!(config.data.path.as_deref(), Some("data/snapshot.json"));
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.user.id, "demo");

    Ok(())
}

#[test]
fn test_negative_window_fails_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("fridgeplan.toml");
    std::fs::write(&path, "[dashboard]\nexpiring_window_days = -2\n")?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(config.validate().is_err());

    Ok(())
}
