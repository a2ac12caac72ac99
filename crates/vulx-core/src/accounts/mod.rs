//! User accounts stored in `users.txt`.
//!
//! Each line is `username:<hash>`, where the hash is an argon2 PHC
//! string with its own random salt.

use ahash::AHashMap;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use compact_str::CompactString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, VulxError};

/// Accounts known to this install
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
    users: AHashMap<CompactString, String>,
}

impl UserStore {
    /// Read the user file. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let users = match fs::read_to_string(&path) {
            Ok(contents) => parse_users(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No user file at {:?}", path);
                AHashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, users })
    }

    /// Hash the password and append the account to the user file
    pub fn add(&mut self, username: &str, password: &str) -> Result<()> {
        let username = validate_username(username)?;
        let password = password.trim();
        if password.is_empty() {
            return Err(VulxError::InvalidPassword);
        }

        let hash = hash_password(password)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:{}", username, hash)?;

        info!("Added user {}", username);
        self.users.insert(CompactString::from(username), hash);
        Ok(())
    }

    /// Check a login attempt
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username = username.trim();
        let Some(stored) = self.users.get(username) else {
            return false;
        };

        match PasswordHash::new(stored) {
            Ok(hash) => Argon2::default()
                .verify_password(password.trim().as_bytes(), &hash)
                .is_ok(),
            Err(_) => {
                warn!("Stored credential for {} is not a salted hash, rejecting", username);
                false
            }
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username.trim())
    }

    /// Known usernames, sorted
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_users(contents: &str) -> AHashMap<CompactString, String> {
    contents
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(user, hash)| (CompactString::from(user.trim()), hash.trim().to_string()))
        .collect()
}

/// Usernames are non-empty and free of separators and whitespace
pub fn validate_username(username: &str) -> Result<&str> {
    let username = username.trim();
    if username.is_empty() || username.contains(':') || username.contains(char::is_whitespace) {
        return Err(VulxError::InvalidUsername(username.to_string()));
    }
    Ok(username)
}

/// Salted argon2 hash in PHC string form
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VulxError::Hash(e.to_string()))
}
