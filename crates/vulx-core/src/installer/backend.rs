// Installer backend - file copy, app store and account creation

use fs_extra::dir::CopyOptions;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::catalog::install_apps;
use crate::accounts::{validate_username, UserStore};
use crate::config::VulxPaths;
use crate::error::{Result, VulxError};

/// Top-level source entries that are never copied
pub const SKIP_NAMES: [&str; 3] = ["vulx-install", "__pycache__", "target"];

/// Installation progress callback: percent done and a status line
pub type ProgressCallback = Box<dyn Fn(u8, &str) + Send>;

/// What to install where, and for whom
#[derive(Clone)]
pub struct InstallPlan {
    pub source: PathBuf,
    pub target: PathBuf,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for InstallPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallPlan")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl InstallPlan {
    pub fn new(
        source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(VulxError::MissingCredentials);
        }
        validate_username(&self.username)?;
        Ok(())
    }
}

/// Summary of a finished install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub target: PathBuf,
    /// Top-level items copied from the source
    pub copied: usize,
    /// Top-level items that failed to copy
    pub failed: usize,
    /// Apps written from the store
    pub apps: usize,
}

/// Run every install step in order
pub fn install(plan: &InstallPlan, progress: ProgressCallback) -> Result<InstallReport> {
    plan.validate()?;
    let paths = VulxPaths::new(&plan.target);
    paths.ensure_dirs()?;

    // Step 1: Copy core files (40%)
    progress(0, "Copying Vulx files...");
    let (copied, failed) = copy_core_files(&plan.source, &plan.target)?;

    // Step 2: App store (80%)
    progress(40, "Installing apps...");
    let apps = install_apps(&paths.apps_dir)?;

    // Step 3: Account (100%)
    progress(80, "Creating user account...");
    let mut store = UserStore::load(&paths.users_file)?;
    store.add(&plan.username, &plan.password)?;

    progress(100, "Installation complete");
    info!(
        "Installed Vulx into {:?}: {} copied, {} failed, {} apps",
        plan.target, copied, failed, apps
    );

    Ok(InstallReport {
        target: plan.target.clone(),
        copied,
        failed,
        apps,
    })
}

/// Copy the top-level items of `source` into `target`.
///
/// Directories merge into existing ones. A failed item is logged and
/// counted; only an unreadable source aborts. Returns (copied, failed).
pub fn copy_core_files(source: &Path, target: &Path) -> Result<(usize, usize)> {
    fs::create_dir_all(target)?;
    let target_real = fs::canonicalize(target)?;
    if fs::canonicalize(source)? == target_real {
        warn!("Source {:?} is the install target, nothing to copy", source);
        return Ok((0, 0));
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;

    let mut copied = 0;
    let mut failed = 0;

    for entry in fs::read_dir(source)?.filter_map(|e| e.ok()) {
        let item = entry.path();
        let name = entry.file_name();
        if is_skipped(&name) {
            continue;
        }
        // Never copy the install target into itself, or a file onto itself
        let item_real = fs::canonicalize(&item).ok();
        if item_real.as_deref() == Some(target_real.as_path()) {
            continue;
        }
        if item_real.is_some() && fs::canonicalize(target.join(&name)).ok() == item_real {
            warn!("Skipping {:?}: already in place", item);
            continue;
        }

        let result = if item.is_dir() {
            fs_extra::dir::copy(&item, target, &options).map(|_| ()).map_err(VulxError::from)
        } else {
            fs::copy(&item, target.join(&name)).map(|_| ()).map_err(VulxError::from)
        };

        match result {
            Ok(()) => copied += 1,
            Err(e) => {
                warn!("Failed to copy {:?}: {}", item, e);
                failed += 1;
            }
        }
    }

    Ok((copied, failed))
}

/// Skip-list match, ignoring a Windows `.exe` suffix
fn is_skipped(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    let bare = name
        .strip_suffix(".exe")
        .or_else(|| name.strip_suffix(".EXE"))
        .unwrap_or(name.as_ref());
    SKIP_NAMES.contains(&bare)
}
