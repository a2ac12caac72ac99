/// Start menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    FileExplorer,
    Settings,
    GamesFolder,
    ShutDown,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::FileExplorer,
            MenuItem::Settings,
            MenuItem::GamesFolder,
            MenuItem::ShutDown,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::FileExplorer => "\u{1f4c1} File Explorer",
            MenuItem::Settings => "\u{2699} Settings",
            MenuItem::GamesFolder => "\u{1f579} Games Folder",
            MenuItem::ShutDown => "\u{23fb} Shut Down Vulx",
        }
    }

    /// Parse from a typed command
    pub fn from_command(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "files" | "explorer" | "file-explorer" => Some(Self::FileExplorer),
            "settings" => Some(Self::Settings),
            "games" => Some(Self::GamesFolder),
            "shutdown" | "shut-down" | "quit" => Some(Self::ShutDown),
            _ => None,
        }
    }
}

/// Start menu popup
#[derive(Debug, Default)]
pub struct StartMenu {
    visible: bool,
}

impl StartMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &'static [MenuItem] {
        MenuItem::all()
    }
}
