mod desktop;
mod explorer_view;
mod login;
mod settings_view;
mod splash;
mod theme;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use vulx_core::{Explorer, UserStore, VulxConfig, VulxPaths, ABOUT_TEXT};

#[derive(Parser)]
#[command(name = "vulx")]
#[command(about = "Vulx OS desktop shell simulator")]
#[command(version)]
struct Cli {
    /// Install root (defaults to the local data directory)
    #[arg(long, env = "VULX_ROOT", global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Boot to the login screen and desktop (default)
    Desktop,
    /// Open the file explorer without logging in
    Explore {
        /// Starting folder (home directory when omitted)
        path: Option<PathBuf>,
    },
    /// List accounts on this install
    Users,
    /// Show version information
    About,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vulx_shell=info".parse()?)
                .add_directive("vulx_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let paths = VulxPaths::resolve(cli.root);

    match cli.command {
        Some(Command::Desktop) | None => {
            info!("Booting Vulx from {:?}", paths.root());
            paths.ensure_dirs()?;
            let store = UserStore::load(&paths.users_file)?;
            if store.is_empty() {
                anyhow::bail!(
                    "No accounts in {}. Run vulx-install first.",
                    paths.users_file.display()
                );
            }

            splash::welcome(&paths);
            let Some(session) = login::login_screen(paths, &store)? else {
                return Ok(());
            };
            desktop::run(session)
        }
        Some(Command::Explore { path }) => {
            let mut explorer = Explorer::open_default();
            if let Some(path) = path {
                explorer.navigate(path);
            }
            let config = VulxConfig::read(&paths.config_file).unwrap_or_default();
            explorer_view::run_with(&config, explorer)
        }
        Some(Command::Users) => {
            let store = UserStore::load(&paths.users_file)?;
            for name in store.usernames() {
                println!("{}", name);
            }
            Ok(())
        }
        Some(Command::About) => {
            println!("{}", ABOUT_TEXT);
            Ok(())
        }
    }
}
