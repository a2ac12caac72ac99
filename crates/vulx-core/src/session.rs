use compact_str::CompactString;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::accounts::UserStore;
use crate::config::{VulxConfig, VulxPaths};
use crate::error::{Result, VulxError};

/// A logged-in user's context, handed to every desktop component
#[derive(Clone)]
pub struct Session {
    /// Logged in user
    pub username: CompactString,
    /// Install layout
    pub paths: VulxPaths,
    /// Shared configuration
    pub config: Arc<RwLock<VulxConfig>>,
}

impl Session {
    pub fn new(username: &str, paths: VulxPaths) -> Self {
        let config = VulxConfig::load(&paths.config_file);
        Self {
            username: CompactString::from(username.trim()),
            paths,
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Start a session if the credentials check out
    pub fn login(paths: VulxPaths, store: &UserStore, username: &str, password: &str) -> Result<Self> {
        if !store.verify(username, password) {
            return Err(VulxError::InvalidCredentials);
        }
        info!("User {} logged in", username.trim());
        Ok(Self::new(username, paths))
    }

    /// Get current settings
    pub fn settings(&self) -> VulxConfig {
        self.config.read().clone()
    }

    pub fn accent(&self) -> String {
        self.config.read().accent.clone()
    }

    /// Change the accent color and persist it
    pub fn set_accent(&self, color: &str) -> Result<()> {
        self.update(|config| config.set_accent(color))
    }

    /// Change the wallpaper and persist it. Takes effect on the next desktop start.
    pub fn set_wallpaper(&self, path: &Path) -> Result<()> {
        self.update(|config| config.set_wallpaper(path))
    }

    /// Apply `change` to a copy, persist it, then publish it. On any error
    /// the shared config is left as it was.
    fn update(&self, change: impl FnOnce(&mut VulxConfig) -> Result<()>) -> Result<()> {
        let mut config = self.config.write();
        let mut updated = config.clone();
        change(&mut updated)?;
        updated.save_to(&self.paths.config_file)?;
        *config = updated;
        Ok(())
    }
}
