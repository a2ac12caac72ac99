use chrono::Local;
use colored::Colorize;
use dialoguer::Select;
use tracing::{info, warn};

use vulx_core::utils::open_path;
use vulx_core::{Background, Desktop, DesktopAction, MenuItem, Session, ABOUT_TEXT};

use crate::{explorer_view, settings_view, theme};

/// Picks on the desktop besides the start menu itself
enum Pick {
    Menu(MenuItem),
    About,
    App(usize),
}

/// Run the desktop until the user shuts down
pub fn run(session: Session) -> anyhow::Result<()> {
    let mut desktop = Desktop::new(session);
    info!("Desktop started for {}", desktop.session().username);

    while desktop.is_running() {
        draw_taskbar(&desktop);

        desktop.toggle_start_menu();
        let apps = desktop.installed_apps();

        let mut picks = Vec::new();
        let mut labels = Vec::new();
        for item in desktop.start_menu().items() {
            picks.push(Pick::Menu(*item));
            labels.push(item.label().to_string());
        }
        picks.push(Pick::About);
        labels.push("\u{2139} About Vulx".to_string());
        for (i, app) in apps.iter().enumerate() {
            picks.push(Pick::App(i));
            labels.push(format!("\u{25b6} {}", app.name));
        }

        let header = theme::accent(desktop.session(), &desktop.menu_header()).to_string();
        let choice = Select::new()
            .with_prompt(header)
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(choice) = choice else {
            // Esc closes the menu
            desktop.toggle_start_menu();
            continue;
        };

        match &picks[choice] {
            Pick::Menu(item) => match desktop.select(*item) {
                DesktopAction::OpenExplorer => explorer_view::run(desktop.session())?,
                DesktopAction::OpenSettings => settings_view::run(desktop.session())?,
                DesktopAction::OpenFolder(dir) => {
                    if !open_path(&dir) {
                        warn!("Could not open {:?}", dir);
                    }
                }
                DesktopAction::ShutDown => println!("{}", "Goodbye.".dimmed()),
            },
            Pick::About => {
                desktop.toggle_start_menu();
                println!("\n{}\n", ABOUT_TEXT);
            }
            Pick::App(i) => {
                desktop.toggle_start_menu();
                let app = &apps[*i];
                let target = app.launcher.as_deref().unwrap_or(app.dir.as_path());
                if !open_path(target) {
                    warn!("Could not launch {}", app.name);
                }
            }
        }
    }

    Ok(())
}

fn draw_taskbar(desktop: &Desktop) {
    let clock = Local::now().format("%H:%M").to_string();
    let background = match desktop.background() {
        Background::Wallpaper(path) => format!("wallpaper {}", path.display()),
        Background::Solid(color) => color.to_string(),
    };

    println!();
    println!(
        "{}  {}  {}",
        theme::accent(desktop.session(), "Start"),
        background.dimmed(),
        clock.bold()
    );
}
