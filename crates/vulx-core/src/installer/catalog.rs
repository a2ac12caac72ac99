// Bundled app store written into apps/ during install

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// How a launcher file opens its app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherKind {
    /// Windows-style `.url` internet shortcut
    InternetShortcut,
    /// Executable shell script
    Script,
}

/// An app shipped with the installer
#[derive(Debug, Clone, Copy)]
pub struct StoreApp {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub launcher: &'static str,
}

pub const APP_STORE: [StoreApp; 2] = [
    StoreApp {
        name: "Vulxium Browser",
        description: "Chromium-based browser for Vulx",
        url: "https://www.google.com",
        launcher: "vulxium.sh",
    },
    StoreApp {
        name: "LibreOffice",
        description: "Free Office Suite",
        url: "https://www.libreoffice.org/download/",
        launcher: "libreoffice.url",
    },
];

impl StoreApp {
    /// Folder name under apps/
    pub fn dir_name(&self) -> String {
        self.name.replace(' ', "_")
    }

    pub fn kind(&self) -> LauncherKind {
        if self.launcher.ends_with(".url") {
            LauncherKind::InternetShortcut
        } else {
            LauncherKind::Script
        }
    }

    pub fn launcher_contents(&self) -> String {
        match self.kind() {
            LauncherKind::InternetShortcut => format!("[InternetShortcut]\nURL={}\n", self.url),
            LauncherKind::Script => format!("#!/bin/sh\nexec xdg-open '{}'\n", self.url),
        }
    }
}

/// Write every store app's launcher, returning how many were installed
pub fn install_apps(apps_dir: &Path) -> Result<usize> {
    for app in APP_STORE.iter() {
        let app_dir = apps_dir.join(app.dir_name());
        fs::create_dir_all(&app_dir)?;

        let launcher = app_dir.join(app.launcher);
        fs::write(&launcher, app.launcher_contents())?;

        if app.kind() == LauncherKind::Script {
            make_executable(&launcher)?;
        }

        debug!("Installed {} ({})", app.name, app.description);
    }
    Ok(APP_STORE.len())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_contents() {
        let office = &APP_STORE[1];
        assert_eq!(office.kind(), LauncherKind::InternetShortcut);
        assert_eq!(
            office.launcher_contents(),
            "[InternetShortcut]\nURL=https://www.libreoffice.org/download/\n"
        );
        assert_eq!(APP_STORE[0].kind(), LauncherKind::Script);
        assert_eq!(APP_STORE[0].dir_name(), "Vulxium_Browser");
    }

    #[test]
    fn test_install_apps_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(install_apps(dir.path()).unwrap(), 2);
        assert_eq!(install_apps(dir.path()).unwrap(), 2);

        let shortcut = dir.path().join("LibreOffice/libreoffice.url");
        assert!(fs::read_to_string(shortcut).unwrap().starts_with("[InternetShortcut]"));
        assert!(dir.path().join("Vulxium_Browser/vulxium.sh").is_file());
    }
}
