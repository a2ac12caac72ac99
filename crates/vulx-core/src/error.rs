use std::path::PathBuf;

/// Errors surfaced by the Vulx core.
#[derive(Debug, thiserror::Error)]
pub enum VulxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("file copy failed: {0}")]
    Copy(#[from] fs_extra::error::Error),

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("password must not be empty")]
    InvalidPassword,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username and password required")]
    MissingCredentials,

    #[error("not an accent color: {0:?}")]
    InvalidAccent(String),

    #[error("not a usable wallpaper image: {}", .0.display())]
    InvalidWallpaper(PathBuf),

    #[error("installation failed: {0}")]
    Install(String),

    #[error("installer thread exited without reporting")]
    InstallerGone,
}

pub type Result<T> = std::result::Result<T, VulxError>;
