//! Configuration loading from files and environment variables

use atg_log_colorizer::config::{resolve_location, ConfigLocation, CONFIG_PATH_ENV};
use atg_log_colorizer::{ColorMode, ColorizerConfig, ColorizerError, Palette};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for (key, _) in env::vars() {
        if key.starts_with("ATG_COLORIZER") {
            env::remove_var(key);
        }
    }
}

fn write_config(dir: &TempDir, contents: &str) -> ConfigLocation {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    ConfigLocation {
        path,
        required: true,
    }
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = write_config(
        &dir,
        "[output]\nbanner = false\ncolor = \"always\"\n\n[palette]\nerror = \"dark_red\"\n",
    );

    let config = ColorizerConfig::from_location(Some(&location)).unwrap();
    assert!(!config.output.banner);
    assert_eq!(config.output.color, ColorMode::Always);
    assert!(config.output.reset_to_other);
    assert_eq!(config.palette.error, "dark_red");
    assert_eq!(config.palette.info, "green");
}

#[test]
#[serial]
fn test_missing_optional_file_uses_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = ConfigLocation {
        path: dir.path().join("absent.toml"),
        required: false,
    };

    let config = ColorizerConfig::from_location(Some(&location)).unwrap();
    assert_eq!(config, ColorizerConfig::default());
}

#[test]
#[serial]
fn test_missing_required_file_is_an_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = ConfigLocation {
        path: dir.path().join("absent.toml"),
        required: true,
    };

    let err = ColorizerConfig::from_location(Some(&location)).unwrap_err();
    assert!(matches!(err, ColorizerError::Config(_)));
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = write_config(&dir, "[output]\ncolor = \"always\"\n");

    env::set_var("ATG_COLORIZER__OUTPUT__COLOR", "never");
    env::set_var("ATG_COLORIZER__PALETTE__OTHER", "grey");
    let config = ColorizerConfig::from_location(Some(&location));
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.palette.other, "grey");
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = write_config(&dir, "[output]\nbanner = false\n");

    env::set_var(CONFIG_PATH_ENV, &location.path);
    let resolved = resolve_location(None);
    let config = ColorizerConfig::load(None);
    clear_env();

    assert_eq!(resolved, Some(location));
    assert!(!config.unwrap().output.banner);
}

#[test]
#[serial]
fn test_invalid_palette_rejected() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let location = write_config(&dir, "[palette]\nwarning = \"chartreuse\"\n");

    let config = ColorizerConfig::from_location(Some(&location)).unwrap();
    let err = Palette::from_settings(&config.palette).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid color 'chartreuse' for palette entry 'warning'"
    );
}

#[test]
fn test_print_config_is_loadable() {
    let rendered = ColorizerConfig::default().to_toml().unwrap();
    let dir = TempDir::new().unwrap();
    let location = write_config(&dir, &rendered);

    let parsed: ColorizerConfig = toml::from_str(&fs::read_to_string(&location.path).unwrap()).unwrap();
    assert_eq!(parsed, ColorizerConfig::default());
}
