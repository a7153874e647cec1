//! CLI command implementations.

mod account;
mod auth;
mod events;
mod feed;
mod orgs;
mod photos;

pub use account::{change_password, delete_account};
pub use auth::{login, logout, register, status};
pub use events::{events_create, events_list};
pub use feed::feed;
pub use orgs::{
    orgs_create, orgs_join, orgs_list, orgs_members, orgs_remove_member, orgs_requests,
    orgs_resolve, orgs_set_role,
};
pub use photos::{photos_list, photos_tag, photos_upload};

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use photocomp_api::ApiClient;
use photocomp_config::Config;
use photocomp_routes::{Navigator, Outcome, Route};
use photocomp_session::SessionStore;
use photocomp_storage::create_session_vault;

/// Shared state every command runs against.
pub struct CliContext {
    pub client: ApiClient,
    pub session: Arc<SessionStore>,
}

impl CliContext {
    /// Wire up the API client and the persisted session.
    pub fn build(config: &Config) -> Result<Self> {
        let session = SessionStore::new(create_session_vault()?);
        session.initialize()?;

        let client = ApiClient::new(config.api_base_url()?);

        Ok(Self {
            client,
            session: Arc::new(session),
        })
    }

    /// Bearer token of the logged-in user.
    pub fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .context("Not logged in. Run 'photocomp login' first")
    }

    /// Walk the navigator into account settings. Fails when the gate
    /// redirects to login instead.
    pub fn open_account_settings(&self) -> Result<Navigator> {
        let mut navigator = Navigator::new(self.session.clone());
        match navigator.navigate(Route::AccountSettings) {
            Outcome::Rendered => Ok(navigator),
            Outcome::RedirectedToLogin { .. } => {
                anyhow::bail!("Not logged in. Run 'photocomp login' first")
            }
        }
    }
}

/// Read one line from stdin with a prompt.
fn prompt_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Ask the user for confirmation.
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
