use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, VulxError};

pub const DEFAULT_ACCENT: &str = "#f5c542";

/// Accent colors offered by the settings window
pub const ACCENT_PALETTE: [&str; 5] = ["#f5c542", "#4aa3ff", "#ff5555", "#50fa7b", "#bd93f9"];

/// Image types accepted as wallpaper
pub const WALLPAPER_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Vulx settings (config.json in the install root)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulxConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub wallpaper: Option<PathBuf>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_accent() -> String {
    DEFAULT_ACCENT.to_string()
}

impl Default for VulxConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            accent: default_accent(),
            wallpaper: None,
        }
    }
}

impl VulxConfig {
    /// Load settings, writing defaults back if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Some(config) => config,
            None => {
                debug!("No usable config at {:?}, writing defaults", path);
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    warn!("Failed to write default config: {}", e);
                }
                config
            }
        }
    }

    /// Read settings without touching the file; `None` if missing or unreadable
    pub fn read(path: &Path) -> Option<Self> {
        let data = std::fs::read(path).ok()?;
        serde_json::from_slice(&data).ok()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn set_accent(&mut self, color: &str) -> Result<()> {
        if parse_hex_color(color).is_none() {
            return Err(VulxError::InvalidAccent(color.to_string()));
        }
        self.accent = color.to_lowercase();
        Ok(())
    }

    /// Accent as RGB, falling back to the default accent
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.accent)
            .or_else(|| parse_hex_color(DEFAULT_ACCENT))
            .unwrap_or((0xf5, 0xc5, 0x42))
    }

    pub fn set_wallpaper(&mut self, path: &Path) -> Result<()> {
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| WALLPAPER_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);

        if !is_image || !path.is_file() {
            return Err(VulxError::InvalidWallpaper(path.to_path_buf()));
        }
        self.wallpaper = Some(path.to_path_buf());
        Ok(())
    }

    /// Wallpaper to draw, if one is set and still on disk
    pub fn wallpaper(&self) -> Option<&Path> {
        self.wallpaper.as_deref().filter(|p| p.is_file())
    }
}

/// Parse `#rrggbb`
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
