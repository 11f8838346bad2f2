//! Integration tests for `VTREE_*` environment overrides.
//!
//! Environment variables are process-wide, so everything touching them lives
//! in this binary and runs as a single test, setting and removing variables
//! in sequence.

use std::env;
use std::fs;

use tempfile::TempDir;

use vtree::application::ApplicationError;
use vtree::config::{local_config_path, OutputFormat, Settings};

const VARS: [&str; 4] = [
    "VTREE_FORMAT",
    "VTREE_SEPARATOR",
    "VTREE_NULL_TOKEN",
    "VTREE_PARALLEL",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn given_env_overrides_when_loading_then_they_win_over_local_config() {
    clear_vars();
    let local_dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(local_dir.path()),
        r#"
format = "flat"
null_token = "~"
parallel = true
separator = ","
"#,
    )
    .unwrap();

    // Arrange: single-underscore variables, as documented
    env::set_var("VTREE_FORMAT", "columns");
    env::set_var("VTREE_PARALLEL", "false");
    env::set_var("VTREE_NULL_TOKEN", "nil");

    // Act
    let settings = Settings::load_with(None, Some(local_dir.path()));

    // Assert
    let settings = settings.expect("load settings");
    assert_eq!(settings.format, OutputFormat::Columns);
    assert!(!settings.parallel);
    assert_eq!(settings.null_token, "nil");
    assert_eq!(settings.separator, ",", "unset variable keeps file value");

    // Arrange: misspelt format value
    env::set_var("VTREE_FORMAT", "colums");

    // Act
    let err = Settings::load_with(None, Some(local_dir.path())).unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(
        err.to_string().contains("VTREE_FORMAT"),
        "error should name the variable: {err}"
    );

    // Arrange: non-boolean parallel flag
    env::set_var("VTREE_FORMAT", "flat");
    env::set_var("VTREE_PARALLEL", "sometimes");

    // Act
    let err = Settings::load_with(None, None).unwrap_err();

    // Assert
    assert!(err.to_string().contains("VTREE_PARALLEL"));

    clear_vars();
    assert_eq!(Settings::load_with(None, None).unwrap(), Settings::default());
}
