//! Subcommand implementations
//!
//! Each module drives the matching view controller from `client` and
//! renders its state to the terminal.

pub mod auth;
pub mod majors;
pub mod notes;
pub mod rankings;
pub mod schedule;

use std::sync::Arc;

use anyhow::{Context as _, Result, bail};

use client::http::HttpApi;
use client::session::{Session, SessionStore};
use common::config::ClientConfig;
use common::storage::LocalStore;

/// Shared wiring handed to every subcommand
pub struct Context {
    pub api: Arc<HttpApi>,
    pub sessions: SessionStore,
}

impl Context {
    /// Build the context from environment configuration
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        let store = LocalStore::open(&config.data_dir)
            .context("opening the local state directory")?;
        let api = Arc::new(HttpApi::new(&config)?);

        Ok(Context {
            api,
            sessions: SessionStore::new(store),
        })
    }

    /// The persisted session, or an error telling the user to sign in
    pub fn require_session(&self) -> Result<Session> {
        match self.sessions.load()? {
            Some(session) => Ok(session),
            None => bail!("Not signed in. Run `studysync login` first."),
        }
    }
}
