//! Page configuration
//!
//! Everything on the page can be tuned from a TOML file. The file is optional;
//! a missing default config yields the stock page.

use crate::animation::{AnimationSlot, AnimationSpec, LibrarySource};
use crate::ui::social_button::IconSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration value: {0}")]
    Invalid(String),

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageCopy,
    pub progress: ProgressConfig,
    pub animations: AnimationsConfig,
    pub theme: ThemeConfig,
    pub links: Vec<LinkConfig>,
}

/// Text shown on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCopy {
    pub headline: String,
    pub tagline: String,
    /// Word of the tagline rendered in the accent color
    pub highlight: String,
    pub coming_soon_title: String,
    pub coming_soon_body: String,
    pub connect_heading: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationsConfig {
    pub enabled: bool,
    /// `builtin`, a bundle `.json` file, a directory of documents, or an http(s) URL
    pub library: String,
    pub request_timeout_secs: u64,
    pub construction: String,
    pub loading: String,
    pub code: String,
    pub looping: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub icons: IconSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub icon: String,
    pub label: String,
    pub url: String,
}

impl LinkConfig {
    fn new(icon: &str, label: &str, url: &str) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page: PageCopy::default(),
            progress: ProgressConfig::default(),
            animations: AnimationsConfig::default(),
            theme: ThemeConfig::default(),
            links: default_links(),
        }
    }
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            headline: "Portfolio Under Construction".to_string(),
            tagline: "I'm currently building something amazing. Please check back soon!"
                .to_string(),
            highlight: "amazing".to_string(),
            coming_soon_title: "Coming Soon".to_string(),
            coming_soon_body: "My portfolio is currently in development. I'm crafting a showcase of my projects and skills.".to_string(),
            connect_heading: "Connect With Me".to_string(),
            footer: "Check back soon for my complete portfolio!".to_string(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { tick_ms: 100 }
    }
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            library: "builtin".to_string(),
            request_timeout_secs: 10,
            construction: "developer-building-site".to_string(),
            loading: "code-loading-spinner".to_string(),
            code: "coding-terminal".to_string(),
            looping: true,
            autoplay: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "midnight".to_string(),
            icons: IconSet::default(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location if present
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path()?, false),
        };

        if !required && !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/buildsite/config.toml` or the platform equivalent
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("buildsite").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        if config.links.is_empty() {
            config.links = default_links();
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progress.tick_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress.tick_ms must be greater than zero".to_string(),
            ));
        }

        let assets = [
            ("construction", &self.animations.construction),
            ("loading", &self.animations.loading),
            ("code", &self.animations.code),
        ];
        for (name, asset) in assets {
            if asset.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "animations.{} must name an asset",
                    name
                )));
            }
        }

        if self.animations.enabled {
            let source = self.library_source()?;
            if matches!(source, LibrarySource::Remote(_))
                && self.animations.request_timeout_secs == 0
            {
                return Err(ConfigError::Invalid(
                    "animations.request_timeout_secs must be greater than zero for a remote library"
                        .to_string(),
                ));
            }
        }

        for link in &self.links {
            if link.url.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "link '{}' has an empty url",
                    link.label
                )));
            }
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.progress.tick_ms)
    }

    pub fn library_source(&self) -> Result<LibrarySource, ConfigError> {
        self.animations
            .library
            .parse::<LibrarySource>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.animations.request_timeout_secs)
    }

    /// Asset bindings in container order
    pub fn animation_specs(&self) -> [AnimationSpec; 3] {
        let spec = |slot: AnimationSlot, asset: &str| AnimationSpec {
            slot,
            asset: asset.to_string(),
            looping: self.animations.looping,
            autoplay: self.animations.autoplay,
        };
        [
            spec(AnimationSlot::Construction, &self.animations.construction),
            spec(AnimationSlot::Loading, &self.animations.loading),
            spec(AnimationSlot::Code, &self.animations.code),
        ]
    }
}

pub fn default_links() -> Vec<LinkConfig> {
    vec![
        LinkConfig::new("github", "GitHub", "https://github.com/ManikantaPotnuru9176"),
        LinkConfig::new(
            "linkedin",
            "LinkedIn",
            "https://www.linkedin.com/in/manikantapotnuru/",
        ),
        LinkConfig::new("twitter", "Twitter", "https://twitter.com/MANIKANTAPOTNU5"),
        LinkConfig::new("email", "Email", "mailto:manikantapotnuru9176@gmail.com"),
    ]
}
