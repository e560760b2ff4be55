use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_name: String,
    /// Prefix for every route and icon path, e.g. `/mips-ref`
    pub base_path: String,
    /// Route opened when none is given on the command line
    pub start_route: String,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rows for the header and topic nav bar
    pub nav_height: u16,
    /// Help popup width as a percentage of the screen
    pub help_width: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// `tracing` filter directive, e.g. `info` or `mipsref=debug`
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: String::from("dark"),
            base_path: String::new(),
            start_route: String::from("/"),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
            theme: Theme::dark(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            nav_height: 3,
            help_width: 70,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: String::from("info"),
        }
    }
}

impl Config {
    /// Load the user config, writing the defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(content).with_context(|| "Failed to parse config file")?;
        config.theme = Theme::from_name(&config.theme_name);
        Ok(config)
    }

    pub fn set_theme(&mut self, name: &str) {
        self.theme_name = name.to_string();
        self.theme = Theme::from_name(name);
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("com", "mipsref", "mipsref")
            .context("Could not determine config directory")
    }

    fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory holding the log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("theme_name = \"nord\"\n[layout]\nhelp_width = 50\n").unwrap();
        assert_eq!(config.theme.name, "nord");
        assert_eq!(config.layout.help_width, 50);
        assert_eq!(config.layout.nav_height, 3);
        assert_eq!(config.start_route, "/");
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(Config::parse("theme_name = [").is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("mipsref-config-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.set_theme("gruvbox");
        config.base_path = String::from("/mips-ref");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme_name, "gruvbox");
        assert_eq!(loaded.theme.name, "gruvbox");
        assert_eq!(loaded.base_path, "/mips-ref");

        let _ = fs::remove_dir_all(dir);
    }
}
