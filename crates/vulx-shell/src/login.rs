use colored::Colorize;
use dialoguer::{Input, Password};
use tracing::warn;

use vulx_core::{Session, UserStore, VulxError, VulxPaths};

const MAX_ATTEMPTS: usize = 3;

/// Prompt for credentials until they check out. `None` after too many failures.
pub fn login_screen(paths: VulxPaths, store: &UserStore) -> anyhow::Result<Option<Session>> {
    println!("{}", "VULX LOGIN".bold());

    for _ in 0..MAX_ATTEMPTS {
        let username: String = Input::new().with_prompt("Username").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;

        match Session::login(paths.clone(), store, &username, &password) {
            Ok(session) => return Ok(Some(session)),
            Err(VulxError::InvalidCredentials) => {
                println!("{}", "Login Failed: Invalid credentials".red());
            }
            Err(e) => return Err(e.into()),
        }
    }

    warn!("Too many failed login attempts");
    Ok(None)
}
