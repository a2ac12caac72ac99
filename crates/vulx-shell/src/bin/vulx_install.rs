use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

use vulx_core::{spawn_install, InstallPlan, VulxPaths};

#[derive(Parser)]
#[command(name = "vulx-install")]
#[command(about = "Install Vulx OS into a folder and create the first account")]
#[command(version)]
struct Args {
    /// Folder holding the Vulx distribution (defaults to this program's folder)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Install root
    #[arg(long, env = "VULX_ROOT")]
    target: Option<PathBuf>,

    /// Account name
    #[arg(short, long)]
    username: Option<String>,

    /// Account password
    #[arg(short, long)]
    password: Option<String>,

    /// Start Vulx once installed
    #[arg(long)]
    launch: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vulx_shell=info".parse()?)
                .add_directive("vulx_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    println!("{}", "Vulx OS Installer".bold());
    println!();

    let source = match args.source {
        Some(source) => source,
        None => program_dir()?,
    };
    let target = args.target.unwrap_or_else(VulxPaths::default_root);
    println!("{} {}", "Installing to".dimmed(), target.display());

    let username = match args.username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let plan = InstallPlan::new(&source, &target, &username, &password);
    info!("Starting install: {:?}", plan);
    let handle = spawn_install(plan).context("Failed to start the installer")?;

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% {msg}")?
            .progress_chars("━━─"),
    );

    let report = handle.wait(|percent, status| {
        pb.set_position(u64::from(percent));
        pb.set_message(status.to_string());
    });
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            pb.abandon_with_message("Installation failed".red().to_string());
            return Err(e).context("Installation failed");
        }
    };
    pb.finish_with_message("Installation complete");

    println!();
    println!(
        "{} Vulx installed to {}",
        "✓".green(),
        report.target.display()
    );
    println!(
        "  {} files copied, {} apps installed",
        report.copied, report.apps
    );
    if report.failed > 0 {
        println!(
            "  {}",
            format!("{} items could not be copied", report.failed).yellow()
        );
    }

    if args.launch {
        launch_vulx(&report.target)?;
    }

    Ok(())
}

fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the installer")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .context("Installer has no parent folder")
}

fn launch_vulx(root: &Path) -> Result<()> {
    let sibling = program_dir()?.join("vulx");
    let program = if sibling.is_file() { sibling } else { PathBuf::from("vulx") };

    info!("Launching {:?}", program);
    let status = Command::new(&program)
        .arg("--root")
        .arg(root)
        .status()
        .with_context(|| format!("Failed to launch {}", program.display()))?;
    if !status.success() {
        warn!("Vulx exited with {}", status);
    }
    Ok(())
}
