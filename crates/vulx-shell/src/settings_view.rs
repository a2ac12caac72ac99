use colored::Colorize;
use dialoguer::{Input, Select};
use std::path::PathBuf;

use vulx_core::{Session, ACCENT_PALETTE};

use crate::theme;

/// Settings window: wallpaper and accent color
pub fn run(session: &Session) -> anyhow::Result<()> {
    let options = ["Set Wallpaper", "Accent Color", "Close"];

    loop {
        let choice = Select::new()
            .with_prompt(theme::accent(session, "Settings").to_string())
            .items(&options)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => set_wallpaper(session)?,
            Some(1) => set_accent(session)?,
            _ => return Ok(()),
        }
    }
}

fn set_wallpaper(session: &Session) -> anyhow::Result<()> {
    let current = session
        .settings()
        .wallpaper
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let input: String = Input::new()
        .with_prompt("Image file (.png, .jpg)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }

    match session.set_wallpaper(&PathBuf::from(input)) {
        Ok(()) => println!("{}", "Wallpaper set. Restart Vulx to apply.".green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn set_accent(session: &Session) -> anyhow::Result<()> {
    let swatches: Vec<String> = ACCENT_PALETTE.iter().map(|c| theme::swatch(c)).collect();
    let current = session.accent();
    let default = ACCENT_PALETTE.iter().position(|c| *c == current).unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Accent color")
        .items(&swatches)
        .default(default)
        .interact_opt()?;

    if let Some(i) = choice {
        session.set_accent(ACCENT_PALETTE[i])?;
        println!("{}", theme::accent(session, "Accent updated"));
    }
    Ok(())
}
