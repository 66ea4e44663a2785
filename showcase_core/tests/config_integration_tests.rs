//! Integration tests for the configuration module

use serial_test::serial;
use showcase_core::particles::{ParticleField, ParticleFieldConfig, ParticleShape};
use showcase_core::utils::config::{Config, PUBLIC_KEY_ENV};
use showcase_core::{Bounds, Typewriter};
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn test_config_load_or_default_flow() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    let original_home = env::var("HOME").ok();
    env::set_var("HOME", temp_dir.path());
    env::remove_var(PUBLIC_KEY_ENV);

    let config = Config::load_or_default()?;
    assert_eq!(config, Config::default());
    assert_eq!(config.relay.public_key, "");

    let showcase_dir = temp_dir.path().join(".devshowcase");
    fs::create_dir_all(&showcase_dir)?;
    fs::write(
        showcase_dir.join("config.yaml"),
        "background:\n  enabled: false\n  shape: hexagon\n",
    )?;

    let config = Config::load_or_default()?;
    assert!(!config.background.enabled);
    assert_eq!(config.background.shape, ParticleShape::Hexagon);

    fs::write(showcase_dir.join("config.yaml"), "background: [unterminated")?;
    let err = Config::load_or_default().unwrap_err();
    assert!(format!("{err:#}").contains("config.yaml"));

    match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }
    Ok(())
}

#[test]
#[serial]
fn test_config_drives_effects() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "typewriter:\n  phrases: [\"Rust\", \"Systems\"]\n  type_delay_ms: 20\nbackground:\n  shape: hexagon\n  count: 7\n",
    )?;

    let config = Config::load_from_file(&config_path)?;

    let typewriter = Typewriter::from_config(&config.typewriter)?;
    assert_eq!(typewriter.active_phrase(), "Rust");

    let field = ParticleField::with_seed(
        ParticleFieldConfig::from(&config.background),
        Bounds::new(400.0, 300.0),
        7,
    );
    assert_eq!(field.len(), 7);
    assert_eq!(field.shape(), ParticleShape::Hexagon);
    Ok(())
}
