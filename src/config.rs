use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub theme: ThemeConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Heading at the top of the sidebar
    pub brand: String,
    /// Top bar title
    pub title: String,
    /// Name shown next to the account avatar
    pub account_name: String,
    /// Theme preset: "default", "catppuccin-mocha", "nord", "gruvbox"
    pub theme: String,
    /// Alternate row background in the transactions table
    pub striped_rows: bool,
}

/// Per-color overrides on top of the preset, as hex strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub positive: Option<String>,
    pub negative: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON snapshot to show instead of the built-in data
    pub snapshot: Option<PathBuf>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            brand: "Razorpay".to_string(),
            title: "Merchant Dashboard".to_string(),
            account_name: "Manish Reddy".to_string(),
            theme: "default".to_string(),
            striped_rows: true,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/merchant-console/config.toml` or platform equivalent
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("merchant-console")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Snapshot path with `~` expanded
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.data.snapshot.as_ref().map(|p| {
            let raw = p.to_string_lossy();
            PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
        })
    }

    /// Preset plus overrides. Unknown presets and bad colors fall back with a warning.
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme preset {:?}, using default", self.appearance.theme);
            Theme::default()
        });

        let overrides = [
            ("accent", &self.theme.accent, &mut theme.accent),
            ("positive", &self.theme.positive, &mut theme.positive),
            ("negative", &self.theme.negative, &mut theme.negative),
            ("notice", &self.theme.notice, &mut theme.notice),
        ];
        for (name, value, slot) in overrides {
            let Some(hex) = value else { continue };
            match parse_hex_color(hex) {
                Ok(color) => *slot = color,
                Err(e) => tracing::warn!("Ignoring theme.{} = {:?}: {}", name, hex, e),
            }
        }

        theme
    }
}
