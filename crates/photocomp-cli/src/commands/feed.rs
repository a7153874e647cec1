//! Combined organizations-with-events feed.

use super::CliContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use photocomp_api::sources::{EventsByOrganization, OrganizationSource};
use photocomp_pager::DependentLoader;
use tracing::debug;

/// Walk the organization feed, pulling events in under each one.
pub async fn feed(ctx: &CliContext, pages: usize, format: &OutputFormat) -> Result<()> {
    let mut loader = DependentLoader::new(
        OrganizationSource::new(ctx.client.clone()),
        EventsByOrganization::new(ctx.client.clone()),
    );

    loader.initial_load().await;

    let mut fetched = 1;
    while fetched < pages && loader.has_more() && loader.parents().last_error().is_none() {
        debug!(fetched, "Loading more of the feed");
        loader.load_more().await;
        fetched += 1;
    }

    match format {
        OutputFormat::Text => {
            if let Some(message) = loader.parents().last_error() {
                output::print_error(message, format);
            }
            for warning in loader.child_errors() {
                eprintln!("Warning: {}", warning);
            }

            if loader.parents().is_empty() {
                println!("No organizations found");
                return Ok(());
            }

            for org in loader.parents().items() {
                output::print_heading(&org.name);
                let events = loader.children_of(org.id.as_str());
                if events.is_empty() {
                    println!("  (no events)");
                    continue;
                }
                for event in events {
                    let date = event
                        .date
                        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!("  {:<14} {:<32} {}", event.id.as_str(), event.title, date);
                }
            }

            if loader.has_more() {
                println!("\nMore available. Re-run with a higher --pages.");
            }
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = loader
                .parents()
                .items()
                .iter()
                .map(|org| {
                    serde_json::json!({
                        "organization": org,
                        "events": loader.children_of(org.id.as_str()),
                    })
                })
                .collect();

            let json = serde_json::json!({
                "feed": entries,
                "hasMore": loader.has_more(),
                "warnings": loader.child_errors(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
