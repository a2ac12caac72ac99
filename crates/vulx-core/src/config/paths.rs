use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File layout of a Vulx install root
#[derive(Debug, Clone)]
pub struct VulxPaths {
    pub root: PathBuf,
    pub users_file: PathBuf,
    pub config_file: PathBuf,
    pub startup_sound: PathBuf,
    pub apps_dir: PathBuf,
    pub games_dir: PathBuf,
}

impl VulxPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();

        Self {
            users_file: root.join("users.txt"),
            config_file: root.join("config.json"),
            startup_sound: root.join("startup_vulx.wav"),
            apps_dir: root.join("apps"),
            games_dir: root.join("games"),
            root,
        }
    }

    /// Install root used when none is given on the command line
    pub fn default_root() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vulx")
    }

    /// Use `root` when given, otherwise the default root
    pub fn resolve(root: Option<PathBuf>) -> Self {
        Self::new(root.unwrap_or_else(Self::default_root))
    }

    /// Create the apps and games folders
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.apps_dir)?;
        fs::create_dir_all(&self.games_dir)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for VulxPaths {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}
