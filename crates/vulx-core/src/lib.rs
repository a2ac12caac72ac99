pub mod accounts;
pub mod config;
pub mod desktop;
pub mod error;
pub mod explorer;
pub mod installer;
pub mod session;
pub mod utils;

pub use accounts::UserStore;
pub use config::{VulxConfig, VulxPaths, ACCENT_PALETTE};
pub use desktop::{AppEntry, Background, Desktop, DesktopAction, MenuItem, StartMenu, ABOUT_TEXT};
pub use error::{Result, VulxError};
pub use explorer::{listing, Activation, Child, Explorer, Filesystem, History, HostFs, Listing};
pub use installer::{spawn_install, InstallEvent, InstallHandle, InstallPlan, InstallReport};
pub use session::Session;
