// Simulated desktop: start menu, installed apps, background and sounds

mod apps;
mod menu;

pub use apps::{scan_apps, AppEntry};
pub use menu::{MenuItem, StartMenu};

use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::VulxPaths;
use crate::session::Session;
use crate::utils::spawn::{spawn_detached, spawn_with_fallbacks};

pub const ABOUT_TEXT: &str = "Vulx OS 1.0\n\n\
A desktop shell simulator\n\
Built in Rust\n\n\
Apps \u{2022} Games \u{2022} Customization\n\n\
Developer: CmdBar";

/// Background color used when no wallpaper is available
pub const PLAIN_BACKGROUND: &str = "#111";

/// What the desktop is painted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Wallpaper(PathBuf),
    Solid(&'static str),
}

/// What the shell should do after a start menu pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopAction {
    OpenExplorer,
    OpenSettings,
    OpenFolder(PathBuf),
    ShutDown,
}

/// Desktop state for one session
pub struct Desktop {
    session: Session,
    start_menu: StartMenu,
    background: Background,
    running: bool,
}

impl Desktop {
    /// Build the desktop. The wallpaper is read once here, so settings
    /// changes show up on the next start.
    pub fn new(session: Session) -> Self {
        let background = match session.settings().wallpaper() {
            Some(path) => Background::Wallpaper(path.to_path_buf()),
            None => Background::Solid(PLAIN_BACKGROUND),
        };
        debug!("Desktop background: {:?}", background);

        Self {
            session,
            start_menu: StartMenu::new(),
            background,
            running: true,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn start_menu(&self) -> &StartMenu {
        &self.start_menu
    }

    /// Show or hide the start menu, returning the new visibility
    pub fn toggle_start_menu(&mut self) -> bool {
        self.start_menu.toggle()
    }

    /// Header line of the start menu
    pub fn menu_header(&self) -> String {
        format!("\u{1f464} {}", self.session.username)
    }

    /// Act on a start menu entry; the menu closes afterwards
    pub fn select(&mut self, item: MenuItem) -> DesktopAction {
        self.start_menu.hide();
        match item {
            MenuItem::FileExplorer => DesktopAction::OpenExplorer,
            MenuItem::Settings => DesktopAction::OpenSettings,
            MenuItem::GamesFolder => DesktopAction::OpenFolder(self.session.paths.games_dir.clone()),
            MenuItem::ShutDown => {
                info!("Shutting down Vulx for {}", self.session.username);
                self.running = false;
                DesktopAction::ShutDown
            }
        }
    }

    pub fn installed_apps(&self) -> Vec<AppEntry> {
        scan_apps(&self.session.paths.apps_dir)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Play the startup chime if the install ships one
pub fn play_startup_sound(paths: &VulxPaths) -> bool {
    let sound = &paths.startup_sound;
    if !sound.is_file() {
        return false;
    }

    if cfg!(windows) {
        let script = format!(
            "(New-Object Media.SoundPlayer '{}').PlaySync()",
            sound.display()
        );
        spawn_detached("powershell", &["-NoProfile", "-Command", script.as_str()])
    } else if cfg!(target_os = "macos") {
        spawn_detached("afplay", &[sound])
    } else {
        spawn_with_fallbacks(&["paplay", "aplay"], &[sound])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session_in(dir: &std::path::Path) -> Session {
        Session::new("ada", VulxPaths::new(dir))
    }

    #[test]
    fn test_start_menu_toggles_and_closes_on_select() {
        let dir = tempfile::tempdir().unwrap();
        let mut desktop = Desktop::new(session_in(dir.path()));

        assert!(!desktop.start_menu().is_visible());
        assert!(desktop.toggle_start_menu());
        assert_eq!(desktop.select(MenuItem::Settings), DesktopAction::OpenSettings);
        assert!(!desktop.start_menu().is_visible());
        assert!(desktop.is_running());
    }

    #[test]
    fn test_games_folder_and_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let mut desktop = Desktop::new(session_in(dir.path()));

        assert_eq!(
            desktop.select(MenuItem::GamesFolder),
            DesktopAction::OpenFolder(dir.path().join("games"))
        );
        assert_eq!(desktop.select(MenuItem::ShutDown), DesktopAction::ShutDown);
        assert!(!desktop.is_running());
    }

    #[test]
    fn test_header_shows_user() {
        let dir = tempfile::tempdir().unwrap();
        let desktop = Desktop::new(session_in(dir.path()));
        assert!(desktop.menu_header().ends_with("ada"));
    }

    #[test]
    fn test_background_falls_back_when_wallpaper_missing() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("wall.png");
        fs::write(&image, b"png").unwrap();

        let session = session_in(dir.path());
        session.set_wallpaper(&image).unwrap();
        assert_eq!(
            Desktop::new(session.clone()).background(),
            &Background::Wallpaper(image.clone())
        );

        fs::remove_file(&image).unwrap();
        assert_eq!(
            Desktop::new(session).background(),
            &Background::Solid(PLAIN_BACKGROUND)
        );
    }

    #[test]
    fn test_no_sound_without_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!play_startup_sound(&VulxPaths::new(dir.path())));
    }
}
