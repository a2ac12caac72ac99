use colored::Colorize;
use std::thread;
use std::time::Duration;

use vulx_core::desktop::play_startup_sound;
use vulx_core::{VulxConfig, VulxPaths};

use crate::theme;

const SPLASH_TIME: Duration = Duration::from_millis(1500);

/// Boot splash with the startup chime
pub fn welcome(paths: &VulxPaths) {
    // Nothing may be installed yet, so only read the config
    let config = VulxConfig::read(&paths.config_file).unwrap_or_default();

    println!();
    println!("{}", "=".repeat(32).dimmed());
    println!("            {}", theme::paint(&config, "VULX OS"));
    println!("{}", "=".repeat(32).dimmed());
    println!();

    play_startup_sound(paths);
    thread::sleep(SPLASH_TIME);
}
