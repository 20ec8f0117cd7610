use gastos_app::utils::validation::Validate;
use gastos_app::{ConfigProvider, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("gastos.toml");

    std::fs::write(
        &config_path,
        r#"
[app]
name = "gastos"
mount_point = "app"

[expenses]
amounts = [1000.0, 49.9]
budget = 1200.0
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.app.name, "gastos");
    assert_eq!(config.mount_selector(), "app");
    assert_eq!(config.budget(), Some(1200.0));
    assert_eq!(config.raw_amounts(), vec!["1000", "49.9"]);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = TomlConfig::from_file(temp_dir.path().join("missing.toml"));
    assert!(matches!(result, Err(gastos_app::AppError::Io(_))));
}

#[test]
fn test_broken_toml_is_a_config_file_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[app\nname =").unwrap();

    let result = TomlConfig::from_file(&config_path);
    assert!(matches!(result, Err(gastos_app::AppError::ConfigFile(_))));
}
