//! Event commands.

use super::CliContext;
use crate::output::{self, OutputFormat};
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use photocomp_api::{sources::OrganizationEventsSource, NewEvent};
use photocomp_pager::Loader;

/// List an organization's events, optionally walking every page.
pub async fn events_list(
    ctx: &CliContext,
    org: &str,
    all: bool,
    search: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let mut loader = Loader::new(OrganizationEventsSource::new(ctx.client.clone(), org));
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

    let events = loader.state().filtered_items();

    match format {
        OutputFormat::Text => {
            if events.is_empty() {
                println!("No events found");
            } else {
                println!("{:<14} {:<32} {:<20} {}", "ID", "Title", "Location", "Date");
                println!("{}", "-".repeat(88));
                for event in &events {
                    let date = event
                        .date
                        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<14} {:<32} {:<20} {}",
                        event.id.as_str(),
                        event.title,
                        event.location.as_deref().unwrap_or("-"),
                        date
                    );
                }
                if loader.state().has_more() {
                    println!("\nMore available. Re-run with --all to fetch every page.");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

/// Create an event in an organization.
pub async fn events_create(
    ctx: &CliContext,
    org: &str,
    title: &str,
    description: Option<String>,
    location: Option<String>,
    date: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    if title.trim().is_empty() {
        output::print_error("Event title is required", format);
        return Ok(());
    }

    let date = match date {
        Some(raw) => Some(parse_event_date(raw)?),
        None => None,
    };

    let event = NewEvent {
        title: title.to_string(),
        description,
        location,
        date,
    };

    match ctx.client.create_event(&token, org, &event).await {
        Ok(created) => output::print_success(
            &format!("Event created: {} ({})", created.title, created.id),
            format,
        ),
        Err(e) => output::print_error(&format!("Create failed: {}", e), format),
    }

    Ok(())
}

/// Parse an RFC 3339 date argument.
fn parse_event_date(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .with_context(|| {
            format!(
                "Invalid date '{}', expected RFC 3339 like 2026-09-01T18:00:00Z",
                raw
            )
        })
}
