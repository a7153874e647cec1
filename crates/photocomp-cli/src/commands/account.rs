//! Account management commands.
//!
//! Both commands sit behind the account settings route, so an expired or
//! missing session fails here the same way it does in the app.

use super::{confirm, CliContext};
use crate::output::{self, OutputFormat};
use anyhow::Result;

/// Change the logged-in account's password.
pub async fn change_password(ctx: &CliContext, format: &OutputFormat) -> Result<()> {
    ctx.open_account_settings()?;
    let token = ctx.require_token()?;

    let current = rpassword::prompt_password("Current password: ")?;
    let new = rpassword::prompt_password("New password: ")?;
    let confirmation = rpassword::prompt_password("Confirm new password: ")?;

    if new.len() < 8 {
        output::print_error("Password must be at least 8 characters", format);
        return Ok(());
    }
    if new != confirmation {
        output::print_error("Passwords do not match", format);
        return Ok(());
    }

    match ctx.client.change_password(&token, &current, &new).await {
        Ok(()) => output::print_success("Password changed", format),
        Err(e) => output::print_error(&format!("Password change failed: {}", e), format),
    }

    Ok(())
}

/// Permanently delete the logged-in account.
pub async fn delete_account(ctx: &CliContext, yes: bool, format: &OutputFormat) -> Result<()> {
    ctx.open_account_settings()?;
    let token = ctx.require_token()?;

    let Some(user) = ctx.session.user() else {
        anyhow::bail!("No user on the session. Log in again and retry");
    };

    if !yes && !confirm(&format!("Permanently delete the account for {}?", user.email)) {
        println!("Aborted");
        return Ok(());
    }

    match ctx.client.delete_account(&token, user.id.as_str()).await {
        Ok(()) => {
            ctx.session.logout()?;
            output::print_success("Account deleted", format);
        }
        Err(e) => output::print_error(&format!("Delete failed: {}", e), format),
    }

    Ok(())
}
