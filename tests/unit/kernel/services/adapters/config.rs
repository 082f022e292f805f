use super::*;

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join(CONFIG_FILE));
    assert_eq!(config, DesktopConfig::default());
}

#[test]
fn test_load_config_reads_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, r#"{ "windowScale": 0.5, "viewportHeight": 600 }"#).unwrap();

    let config = load_config(&path);
    assert_eq!(config.window_scale, 0.5);
    assert_eq!(config.viewport_height, 600);
    assert_eq!(config.viewport_width, 1280);
}

#[test]
fn test_load_config_malformed_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_config(&path), DesktopConfig::default());
}

#[test]
fn test_ensure_config_file_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE);

    ensure_config_file(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_config(&path), DesktopConfig::default());

    std::fs::write(&path, r#"{ "storageKey": "mine" }"#).unwrap();
    ensure_config_file(&path).unwrap();
    assert_eq!(load_config(&path).storage_key, "mine");
}
