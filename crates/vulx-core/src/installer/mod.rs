//! Vulx installer: copies the distribution into a target folder, writes
//! the bundled apps and creates the first account.
//!
//! The work runs on one background thread; progress comes back over a
//! channel so the front end stays responsive.

mod backend;
mod catalog;

pub use backend::{copy_core_files, install, InstallPlan, InstallReport, ProgressCallback, SKIP_NAMES};
pub use catalog::{install_apps, LauncherKind, StoreApp, APP_STORE};

use async_channel::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::error;

use crate::error::{Result, VulxError};

/// Events FROM the installer thread TO the front end
#[derive(Debug, Clone)]
pub enum InstallEvent {
    /// A step started
    Progress { percent: u8, status: String },
    /// Everything done
    Finished(InstallReport),
    /// The install stopped with an error
    Failed(String),
}

/// A running installation
pub struct InstallHandle {
    events: Receiver<InstallEvent>,
    thread: JoinHandle<()>,
}

impl InstallHandle {
    /// Receiver for progress events (usable from async code too)
    pub fn events(&self) -> &Receiver<InstallEvent> {
        &self.events
    }

    /// Block until the installer finishes, feeding progress to `on_progress`
    pub fn wait(self, mut on_progress: impl FnMut(u8, &str)) -> Result<InstallReport> {
        let outcome = loop {
            match self.events.recv_blocking() {
                Ok(InstallEvent::Progress { percent, status }) => on_progress(percent, &status),
                Ok(InstallEvent::Finished(report)) => break Ok(report),
                Ok(InstallEvent::Failed(message)) => break Err(VulxError::Install(message)),
                Err(_) => break Err(VulxError::InstallerGone),
            }
        };

        if self.thread.join().is_err() {
            error!("Installer thread panicked");
            return Err(VulxError::InstallerGone);
        }
        outcome
    }
}

/// Validate `plan` and start installing on a background thread
pub fn spawn_install(plan: InstallPlan) -> Result<InstallHandle> {
    plan.validate()?;

    let (event_tx, event_rx) = async_channel::unbounded::<InstallEvent>();

    let thread = thread::Builder::new()
        .name("vulx-install".to_string())
        .spawn(move || run_install(plan, event_tx))?;

    Ok(InstallHandle {
        events: event_rx,
        thread,
    })
}

fn run_install(plan: InstallPlan, event_tx: Sender<InstallEvent>) {
    let progress_tx = event_tx.clone();
    let progress: ProgressCallback = Box::new(move |percent: u8, status: &str| {
        let _ = progress_tx.send_blocking(InstallEvent::Progress {
            percent,
            status: status.to_string(),
        });
    });

    let event = match install(&plan, progress) {
        Ok(report) => InstallEvent::Finished(report),
        Err(e) => {
            error!("Installation failed: {}", e);
            InstallEvent::Failed(e.to_string())
        }
    };
    let _ = event_tx.send_blocking(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_spawn_install_streams_progress() {
        let source = tempfile::tempdir().unwrap();
        fs::write(source.path().join("vulx.txt"), "core").unwrap();
        let target = tempfile::tempdir().unwrap();

        let handle = spawn_install(InstallPlan::new(source.path(), target.path(), "ada", "pw")).unwrap();
        let mut statuses = Vec::new();
        let report = handle
            .wait(|percent, status| statuses.push((percent, status.to_string())))
            .unwrap();

        assert_eq!(statuses.first(), Some(&(0, "Copying Vulx files...".to_string())));
        assert_eq!(statuses.last(), Some(&(100, "Installation complete".to_string())));
        assert_eq!(report.copied, 1);
        assert!(target.path().join("vulx.txt").is_file());
    }

    #[test]
    fn test_spawn_install_rejects_missing_credentials_upfront() {
        let plan = InstallPlan::new("/src", "/dst", "", "");
        assert!(matches!(spawn_install(plan), Err(VulxError::MissingCredentials)));
    }

    #[test]
    fn test_failure_is_reported() {
        let target = tempfile::tempdir().unwrap();
        let plan = InstallPlan::new(target.path().join("no-source"), target.path(), "ada", "pw");

        let handle = spawn_install(plan).unwrap();
        assert!(matches!(handle.wait(|_, _| {}), Err(VulxError::Install(_))));
    }
}
