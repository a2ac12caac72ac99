use compact_str::CompactString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An app installed under `apps/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: CompactString,
    pub dir: PathBuf,
    pub launcher: Option<PathBuf>,
}

/// Installed apps, sorted by folder name
pub fn scan_apps(apps_dir: &Path) -> Vec<AppEntry> {
    let read_dir = match fs::read_dir(apps_dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!("Could not read apps dir {:?}: {}", apps_dir, e);
            return Vec::new();
        }
    };

    let mut apps: Vec<AppEntry> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .map(|dir| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().replace('_', " "))
                .unwrap_or_default();
            AppEntry {
                name: CompactString::from(name),
                launcher: first_file(&dir),
                dir,
            }
        })
        .collect();

    apps.sort_by(|a, b| a.dir.cmp(&b.dir));
    apps
}

fn first_file(dir: &Path) -> Option<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files.into_iter().next()
}
