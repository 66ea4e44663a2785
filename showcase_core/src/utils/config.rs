use crate::particles::ParticleShape;
use crate::utils::error::ResultExt;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the relay public key.
pub const PUBLIC_KEY_ENV: &str = "DEVSHOWCASE_EMAILJS_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Email relay used by the contact form
    pub relay: RelayConfig,

    /// Hero headline typewriter
    pub typewriter: TypewriterConfig,

    /// Decorative particle canvas
    pub background: BackgroundConfig,

    /// Resume document offered by the download buttons
    pub resume_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub api_url: String,
    pub service_id: String,
    /// Template delivering the message to the site owner
    pub owner_template_id: String,
    /// Template sending the acknowledgment back to the visitor
    pub acknowledgment_template_id: String,
    pub public_key: String,
    /// Key taken from the environment at load time; never written back.
    #[serde(skip)]
    pub public_key_override: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.emailjs.com".to_string(),
            service_id: String::new(),
            owner_template_id: String::new(),
            acknowledgment_template_id: String::new(),
            public_key: String::new(),
            public_key_override: None,
        }
    }
}

impl RelayConfig {
    /// The key sent to the relay: the environment override when present,
    /// otherwise the one from the file.
    pub fn effective_public_key(&self) -> &str {
        self.public_key_override
            .as_deref()
            .unwrap_or(&self.public_key)
    }

    /// Name of the first identifier that is still blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("api_url", self.api_url.as_str()),
            ("service_id", self.service_id.as_str()),
            ("owner_template_id", self.owner_template_id.as_str()),
            ("acknowledgment_template_id", self.acknowledgment_template_id.as_str()),
            ("public_key", self.effective_public_key()),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u64,
    pub hold_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Full Stack Developer".to_string(),
                "Backend Engineer".to_string(),
                "Java & Spring Boot Specialist".to_string(),
                "Problem Solver".to_string(),
            ],
            type_delay_ms: 100,
            hold_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub enabled: bool,
    pub shape: ParticleShape,
    /// Particle count; `None` uses the shape's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Velocity multiplier
    pub speed: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            shape: ParticleShape::Circle,
            count: None,
            speed: 1.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay: RelayConfig::default(),
            typewriter: TypewriterConfig::default(),
            background: BackgroundConfig::default(),
            resume_path: PathBuf::from("assets/resume.pdf"),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_file_context(&path.display().to_string())?;
        let mut config: Config = serde_yaml::from_str(&content).with_config_context("config.yaml")?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".devshowcase")
            .join("config.yaml")
    }

    /// Loads the user config, or defaults when there is no file yet. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::get_config_path();
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(err) => crate::utils::logger::warn(&format!(
                    "Ignoring unreadable config {}: {}",
                    path.display(),
                    err
                )),
            }
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::get_config_path())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(PUBLIC_KEY_ENV) {
            if !key.trim().is_empty() {
                self.relay.public_key_override = Some(key);
            }
        }
    }
}
