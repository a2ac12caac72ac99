use colored::Colorize;
use dialoguer::Input;
use tracing::warn;

use vulx_core::utils::open_path;
use vulx_core::{Activation, Explorer, Session, VulxConfig};

use crate::theme;

const HELP: &str = "commands: open <name>, go <path>, back, forward, up, ls, help, close";

/// Explorer window starting at the platform default location
pub fn run(session: &Session) -> anyhow::Result<()> {
    run_with(&session.settings(), Explorer::open_default())
}

/// Drive an explorer window until it is closed
pub fn run_with(config: &VulxConfig, mut explorer: Explorer) -> anyhow::Result<()> {
    println!("{}", theme::paint(config, "File Explorer"));
    println!("{}", HELP.dimmed());
    draw(&explorer);

    loop {
        let line: String = Input::new()
            .with_prompt(explorer.path_text())
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" | "ls" => explorer.refresh(),
            "back" | "b" => {
                explorer.back();
            }
            "forward" | "f" => {
                explorer.forward();
            }
            "up" => {
                let parent = explorer.current().and_then(|p| p.parent()).map(|p| p.to_path_buf());
                if let Some(parent) = parent {
                    explorer.navigate(parent);
                }
            }
            "go" | "cd" => {
                if !explorer.go_to(arg) {
                    println!("{}", format!("No such folder: {}", arg).red());
                    continue;
                }
            }
            "open" => match explorer.activate(arg) {
                Activation::Entered(_) => {}
                Activation::File(path) => {
                    if !open_path(&path) {
                        warn!("No opener for {:?}", path);
                    }
                    continue;
                }
                Activation::Missing => {
                    println!("{}", format!("Nothing named {}", arg).red());
                    continue;
                }
            },
            "help" => {
                println!("{}", HELP.dimmed());
                continue;
            }
            "close" | "q" | "quit" | "exit" => return Ok(()),
            other => {
                println!("{}", format!("Unknown command: {}", other).red());
                continue;
            }
        }

        draw(&explorer);
    }
}

fn draw(explorer: &Explorer) {
    let back = if explorer.can_go_back() { "\u{2190}".normal() } else { "\u{2190}".dimmed() };
    let forward = if explorer.can_go_forward() { "\u{2192}".normal() } else { "\u{2192}".dimmed() };
    println!("{} {}  {}", back, forward, explorer.path_text().bold());

    if explorer.entries().is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for child in explorer.entries() {
        if child.is_dir {
            println!("  \u{1f4c1} {}", child.name.as_str().blue());
        } else {
            println!("  \u{1f4c4} {}", child.name);
        }
    }
}
