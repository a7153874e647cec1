//! Organization commands.

use super::CliContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use photocomp_api::{sources::OrganizationSource, NewOrganization};
use photocomp_pager::Loader;
use photocomp_types::MemberRole;

/// List organizations, optionally walking every page.
pub async fn orgs_list(
    ctx: &CliContext,
    all: bool,
    search: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let mut loader = Loader::new(OrganizationSource::new(ctx.client.clone()));
    if let Some(term) = search {
        loader.set_search_term(term);
    }

    loader.initial_load().await;
    while all && loader.state().has_more() && loader.state().last_error().is_none() {
        loader.load_more().await;
    }

    if let Some(message) = loader.state().last_error() {
        output::print_error(message, format);
        return Ok(());
    }

    let organizations = loader.state().filtered_items();

    match format {
        OutputFormat::Text => {
            if organizations.is_empty() {
                println!("No organizations found");
            } else {
                println!("{:<14} {:<28} {}", "ID", "Name", "Description");
                println!("{}", "-".repeat(80));
                for org in &organizations {
                    println!(
                        "{:<14} {:<28} {}",
                        org.id.as_str(),
                        org.name,
                        org.description.as_deref().unwrap_or("-")
                    );
                }
                if loader.state().has_more() {
                    println!("\nMore available. Re-run with --all to fetch every page.");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&organizations)?);
        }
    }

    Ok(())
}

/// Create an organization owned by the caller.
pub async fn orgs_create(
    ctx: &CliContext,
    name: &str,
    description: Option<String>,
    logo_url: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    if name.trim().is_empty() {
        output::print_error("Organization name is required", format);
        return Ok(());
    }

    let organization = NewOrganization {
        name: name.to_string(),
        description,
        logo_url,
    };

    match ctx.client.create_organization(&token, &organization).await {
        Ok(created) => {
            output::print_success(
                &format!("Organization created: {} ({})", created.name, created.id),
                format,
            );
        }
        Err(e) => output::print_error(&format!("Create failed: {}", e), format),
    }

    Ok(())
}

/// Ask to join an organization.
pub async fn orgs_join(ctx: &CliContext, id: &str, format: &OutputFormat) -> Result<()> {
    let token = ctx.require_token()?;

    match ctx.client.join_organization(&token, id).await {
        Ok(()) => output::print_success("Join request sent", format),
        Err(e) => output::print_error(&format!("Join failed: {}", e), format),
    }

    Ok(())
}

/// List the members of an organization.
pub async fn orgs_members(ctx: &CliContext, org: &str, format: &OutputFormat) -> Result<()> {
    let token = ctx.require_token()?;

    let members = match ctx.client.list_members(&token, org).await {
        Ok(members) => members,
        Err(e) => {
            output::print_error(&format!("Failed to list members: {}", e), format);
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            if members.is_empty() {
                println!("No members found");
            } else {
                println!("{:<14} {:<24} {:<28} {}", "User ID", "Name", "Email", "Role");
                println!("{}", "-".repeat(80));
                for member in &members {
                    println!(
                        "{:<14} {:<24} {:<28} {}",
                        member.user.id.as_str(),
                        member.user.display_name(),
                        member.user.email,
                        member.role
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&members)?);
        }
    }

    Ok(())
}

/// Change a member's role.
pub async fn orgs_set_role(
    ctx: &CliContext,
    org: &str,
    user: &str,
    role: MemberRole,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    match ctx.client.update_member_role(&token, org, user, role).await {
        Ok(()) => output::print_success(&format!("Role updated to {}", role), format),
        Err(e) => output::print_error(&format!("Role update failed: {}", e), format),
    }

    Ok(())
}

/// Remove a member from an organization.
pub async fn orgs_remove_member(
    ctx: &CliContext,
    org: &str,
    user: &str,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    match ctx.client.remove_member(&token, org, user).await {
        Ok(()) => output::print_success(&format!("Member {} removed", user), format),
        Err(e) => output::print_error(&format!("Remove failed: {}", e), format),
    }

    Ok(())
}

/// List pending join requests.
pub async fn orgs_requests(ctx: &CliContext, org: &str, format: &OutputFormat) -> Result<()> {
    let token = ctx.require_token()?;

    let requests = match ctx.client.list_join_requests(&token, org).await {
        Ok(requests) => requests,
        Err(e) => {
            output::print_error(&format!("Failed to list join requests: {}", e), format);
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            if requests.is_empty() {
                println!("No pending requests");
            } else {
                println!(
                    "{:<14} {:<24} {:<28} {}",
                    "Request ID", "Name", "Email", "Requested"
                );
                println!("{}", "-".repeat(80));
                for request in &requests {
                    let requested = request
                        .created_at
                        .map(|at| at.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<14} {:<24} {:<28} {}",
                        request.id,
                        request.user.display_name(),
                        request.user.email,
                        requested
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&requests)?);
        }
    }

    Ok(())
}

/// Approve or reject a join request.
pub async fn orgs_resolve(
    ctx: &CliContext,
    org: &str,
    request: &str,
    approve: bool,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    match ctx
        .client
        .resolve_join_request(&token, org, request, approve)
        .await
    {
        Ok(()) => {
            let verdict = if approve { "approved" } else { "rejected" };
            output::print_success(&format!("Request {}", verdict), format);
        }
        Err(e) => output::print_error(&format!("Resolve failed: {}", e), format),
    }

    Ok(())
}
