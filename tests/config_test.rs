//! Integration tests for layered Settings loading.
//!
//! Each layer only overrides the keys it names:
//! defaults → global file → local `.vtree.toml` → `VTREE_*` env vars.
//!
//! Note: these tests pass explicit temp paths to `Settings::load_with`
//! so the user's real global config never leaks in. The env layer is
//! covered in `config_env_test.rs`.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use vtree::application::ApplicationError;
use vtree::config::{local_config_path, OutputFormat, Settings};

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_config_files_when_loading_then_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let missing_global = temp.path().join("absent.toml");

    let settings = Settings::load_with(Some(&missing_global), Some(temp.path())).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_config_when_loading_then_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let global = write_config(
        &temp,
        "vtree.toml",
        r#"
format = "columns"
separator = ","
"#,
    );

    let settings = Settings::load_with(Some(&global), None).unwrap();

    assert_eq!(settings.format, OutputFormat::Columns);
    assert_eq!(settings.separator, ",");
    assert_eq!(settings.null_token, "null", "unset key keeps its default");
}

#[test]
fn given_local_config_when_loading_then_overrides_global() {
    let global_dir = TempDir::new().unwrap();
    let local_dir = TempDir::new().unwrap();
    let global = write_config(
        &global_dir,
        "vtree.toml",
        r#"
format = "columns"
null_token = "nil"
"#,
    );
    fs::write(
        local_config_path(local_dir.path()),
        r#"
null_token = "~"
parallel = false
"#,
    )
    .unwrap();

    let settings = Settings::load_with(Some(&global), Some(local_dir.path())).unwrap();

    assert_eq!(settings.format, OutputFormat::Columns, "global survives");
    assert_eq!(settings.null_token, "~", "local wins");
    assert!(!settings.parallel);
}

#[test]
fn given_malformed_local_config_when_loading_then_returns_config_error() {
    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), "format = [unclosed").unwrap();

    let err = Settings::load_with(None, Some(local_dir.path())).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains(".vtree.toml"));
}

#[test]
fn given_unknown_format_when_loading_then_returns_config_error() {
    let temp = TempDir::new().unwrap();
    let global = write_config(&temp, "vtree.toml", "format = \"diagonal\"\n");

    let err = Settings::load_with(Some(&global), None).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_effective_settings_when_rendered_then_reloads_identically() {
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        format: OutputFormat::Columns,
        separator: " | ".to_string(),
        null_token: "x".to_string(),
        parallel: false,
    };
    let global = write_config(&temp, "vtree.toml", &settings.to_toml().unwrap());

    let reloaded = Settings::load_with(Some(&global), None).unwrap();

    assert_eq!(reloaded, settings);
}
