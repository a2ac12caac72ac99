mod paths;
mod settings;

pub use paths::VulxPaths;
pub use settings::{parse_hex_color, VulxConfig, ACCENT_PALETTE, DEFAULT_ACCENT, WALLPAPER_EXTENSIONS};
