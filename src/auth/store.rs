//! Disk persistence for user records and the login session.
//!
//! Goal: keep registrations across program restarts and remember a login
//! for its 24-hour validity window. The on-disk format is a single
//! versioned JSON document, written atomically (temp file + rename).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a login session stays valid.
const SESSION_VALIDITY_MS: i64 = 24 * 60 * 60 * 1000;

const STORE_VERSION: u32 = 1;

/// A registered user. The password is plaintext on purpose (demo prop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    /// Unix timestamp in milliseconds.
    pub register_time: i64,
}

/// The active login, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    /// Unix timestamp in milliseconds.
    pub login_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreState {
    version: u32,
    users: BTreeMap<String, UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session: Option<SessionRecord>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            users: BTreeMap::new(),
            session: None,
        }
    }
}

/// Errors surfaced to the auth form. The display strings double as the
/// user-facing messages.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists!")]
    UsernameTaken,
    #[error("Invalid credentials!")]
    InvalidCredentials,
    #[error("auth store error: {0}")]
    Store(#[from] anyhow::Error),
}

pub fn default_store_path() -> PathBuf {
    // Simple, cross-platform default: ~/.shadow-console/auth.json
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".shadow-console").join("auth.json")
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create auth store directory: {}", parent.display())
        })?;
    }
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).with_context(|| format!("Failed to write temp file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {} with {}", path.display(), tmp.display()))?;
    Ok(())
}

/// Username → record store plus the current session.
#[derive(Debug)]
pub struct AuthStore {
    path: PathBuf,
    state: StoreState,
}

impl AuthStore {
    /// Open the store at `path`, starting empty if the file is missing or
    /// unreadable (a corrupt demo store is not worth failing startup over).
    pub fn open(path: PathBuf) -> Self {
        let state = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("ignoring invalid auth store at {}: {e}", path.display());
                    StoreState::default()
                }
            },
            Err(_) => StoreState::default(),
        };
        Self { path, state }
    }

    fn save(&self) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(&self.state).context("Failed to serialize auth store")?;
        write_atomic(&self.path, &data)
    }

    /// Register a new user. Duplicate usernames are rejected.
    pub fn register(&mut self, username: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if self.state.users.contains_key(username) {
            return Err(AuthError::UsernameTaken);
        }
        self.state.users.insert(
            username.to_string(),
            UserRecord {
                email: email.to_string(),
                password: password.to_string(),
                register_time: Utc::now().timestamp_millis(),
            },
        );
        self.save()?;
        tracing::info!(username, "registered user");
        Ok(())
    }

    /// Compare credentials and record a session on success.
    pub fn login(&mut self, username: &str, password: &str) -> Result<SessionRecord, AuthError> {
        let matches = self
            .state
            .users
            .get(username)
            .is_some_and(|u| u.password == password);
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }
        let session = SessionRecord {
            username: username.to_string(),
            login_time: Utc::now().timestamp_millis(),
        };
        self.state.session = Some(session.clone());
        self.save()?;
        tracing::info!(username, "login succeeded");
        Ok(session)
    }

    /// The session considered active at `now_ms`, honoring the 24-hour
    /// validity window.
    pub fn current_session_at(&self, now_ms: i64) -> Option<&SessionRecord> {
        self.state
            .session
            .as_ref()
            .filter(|s| now_ms - s.login_time < SESSION_VALIDITY_MS)
    }

    pub fn current_session(&self) -> Option<&SessionRecord> {
        self.current_session_at(Utc::now().timestamp_millis())
    }

    pub fn user_count(&self) -> usize {
        self.state.users.len()
    }
}
