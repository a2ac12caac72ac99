use colored::{ColoredString, Colorize};

use vulx_core::config::parse_hex_color;
use vulx_core::{Session, VulxConfig};

/// Text drawn in the session's accent color
pub fn accent(session: &Session, text: &str) -> ColoredString {
    paint(&session.settings(), text)
}

/// Text drawn in the accent color of `config`
pub fn paint(config: &VulxConfig, text: &str) -> ColoredString {
    let (r, g, b) = config.accent_rgb();
    text.truecolor(r, g, b).bold()
}

/// A color sample followed by its hex code
pub fn swatch(color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => format!("{} {}", "      ".on_truecolor(r, g, b), color),
        None => color.to_string(),
    }
}
