use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// Spawn a detached process that won't be killed when the parent exits
pub fn spawn_detached<S: AsRef<OsStr>>(program: &str, args: &[S]) -> bool {
    debug!("Spawning detached: {}", program);

    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(_) => {
            debug!("Successfully spawned: {}", program);
            true
        }
        Err(e) => {
            error!("Failed to spawn '{}': {}", program, e);
            false
        }
    }
}

/// Spawn with fallbacks - tries each program until one starts
pub fn spawn_with_fallbacks<S: AsRef<OsStr>>(programs: &[&str], args: &[S]) -> bool {
    for program in programs {
        if spawn_detached(program, args) {
            return true;
        }
    }
    false
}

/// Hand a file or folder to the platform's default opener
pub fn open_path(path: &Path) -> bool {
    if cfg!(windows) {
        let target = path.as_os_str();
        spawn_detached("cmd", &[OsStr::new("/C"), OsStr::new("start"), OsStr::new(""), target])
    } else if cfg!(target_os = "macos") {
        spawn_detached("open", &[path])
    } else {
        spawn_detached("xdg-open", &[path])
    }
}
