//! Authentication commands.

use super::{prompt_line, CliContext};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use photocomp_api::NewAccount;
use photocomp_config::Config;

/// Login with email and password.
pub async fn login(ctx: &CliContext, format: &OutputFormat) -> Result<()> {
    let snapshot = ctx.session.snapshot();
    if snapshot.is_authenticated() {
        let who = snapshot
            .user
            .map(|user| user.email)
            .unwrap_or_else(|| "user".to_string());
        output::print_success(&format!("Already logged in as {}", who), format);
        return Ok(());
    }

    let email = prompt_line("Email")?;
    if email.is_empty() {
        output::print_error("Email is required", format);
        return Ok(());
    }

    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        output::print_error("Password is required", format);
        return Ok(());
    }

    println!("Logging in...");

    match ctx.client.login(&email, &password).await {
        Ok(auth) => {
            let who = auth.user.email.clone();
            ctx.session.set_token(Some(auth.token))?;
            ctx.session.set_user(Some(auth.user))?;
            output::print_success(&format!("Logged in as {}", who), format);
        }
        Err(e) => {
            output::print_error(&format!("Login failed: {}", e), format);
        }
    }

    Ok(())
}

/// Create an account, then log in with it.
pub async fn register(ctx: &CliContext, format: &OutputFormat) -> Result<()> {
    let email = prompt_line("Email")?;
    let first_name = prompt_line("First name")?;
    let last_name = prompt_line("Last name")?;
    let password = rpassword::prompt_password("Password: ")?;
    let confirmation = rpassword::prompt_password("Confirm password: ")?;

    if let Err(problem) =
        validate_registration(&email, &first_name, &last_name, &password, &confirmation)
    {
        output::print_error(problem, format);
        return Ok(());
    }

    println!("Creating account...");

    let account = NewAccount {
        email,
        password,
        first_name,
        last_name,
    };

    match ctx.client.register(&account).await {
        Ok(auth) => {
            let who = auth.user.email.clone();
            ctx.session.set_token(Some(auth.token))?;
            ctx.session.set_user(Some(auth.user))?;
            output::print_success(&format!("Account created. Logged in as {}", who), format);
        }
        Err(e) => {
            output::print_error(&format!("Registration failed: {}", e), format);
        }
    }

    Ok(())
}

/// Logout and clear the stored session.
pub async fn logout(ctx: &CliContext, format: &OutputFormat) -> Result<()> {
    if !ctx.session.snapshot().is_authenticated() {
        output::print_success("Not logged in", format);
        return Ok(());
    }

    ctx.session.logout()?;
    output::print_success("Logged out successfully", format);
    Ok(())
}

/// Show session status.
pub async fn status(ctx: &CliContext, config: &Config, format: &OutputFormat) -> Result<()> {
    let snapshot = ctx.session.snapshot();

    match format {
        OutputFormat::Text => {
            output::print_row("API", &config.api_base_url);
            if snapshot.is_authenticated() {
                output::print_row("Session", "logged in");
                if let Some(user) = &snapshot.user {
                    output::print_row(
                        "User",
                        &format!("{} <{}>", user.display_name(), user.email),
                    );
                    output::print_row("User ID", user.id.as_str());
                }
            } else {
                output::print_row("Session", "not logged in");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "api_url": config.api_base_url,
                "logged_in": snapshot.is_authenticated(),
                "email": snapshot.user.as_ref().map(|user| user.email.as_str()),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

/// Field checks that run before any request is sent.
fn validate_registration(
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirmation {
        return Err("Passwords do not match");
    }
    Ok(())
}
