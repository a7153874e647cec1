//! Photo commands.

use std::path::Path;

use super::CliContext;
use crate::output::{self, OutputFormat};
use anyhow::{Context as _, Result};
use photocomp_api::NewPhoto;
use photocomp_types::UserId;

/// List an event's photos.
pub async fn photos_list(
    ctx: &CliContext,
    org: &str,
    event: &str,
    format: &OutputFormat,
) -> Result<()> {
    let photos = match ctx.client.list_photos(org, event).await {
        Ok(photos) => photos,
        Err(e) => {
            output::print_error(&format!("Failed to list photos: {}", e), format);
            return Ok(());
        }
    };

    match format {
        OutputFormat::Text => {
            if photos.is_empty() {
                println!("No photos found");
            } else {
                println!("{:<14} {:<28} {:<6} {}", "ID", "File", "Tags", "URL");
                println!("{}", "-".repeat(100));
                for photo in &photos {
                    println!(
                        "{:<14} {:<28} {:<6} {}",
                        photo.id.as_str(),
                        photo.file_name,
                        photo.tagged_users.len(),
                        photo.url
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&photos)?);
        }
    }

    Ok(())
}

/// Upload a photo: announce it, then send the bytes to the returned URL.
pub async fn photos_upload(
    ctx: &CliContext,
    org: &str,
    event: &str,
    file: &Path,
    content_type: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .context("File path has no usable file name")?
        .to_string();

    let bytes = std::fs::read(file).with_context(|| format!("Cannot read {}", file.display()))?;

    let content_type = content_type
        .map(str::to_string)
        .unwrap_or_else(|| guess_content_type(&file_name).to_string());

    println!("Uploading {} ({} bytes)...", file_name, bytes.len());

    let photo = NewPhoto {
        file_name,
        content_type: content_type.clone(),
    };

    let upload = match ctx
        .client
        .request_photo_upload(&token, org, event, &photo)
        .await
    {
        Ok(upload) => upload,
        Err(e) => {
            output::print_error(&format!("Upload rejected: {}", e), format);
            return Ok(());
        }
    };

    match ctx
        .client
        .upload_photo_bytes(&upload.upload_url, &content_type, bytes)
        .await
    {
        Ok(()) => output::print_success(&format!("Photo uploaded: {}", upload.photo.id), format),
        Err(e) => output::print_error(&format!("Upload failed: {}", e), format),
    }

    Ok(())
}

/// Tag users in a photo.
pub async fn photos_tag(
    ctx: &CliContext,
    org: &str,
    event: &str,
    photo: &str,
    users: &[String],
    format: &OutputFormat,
) -> Result<()> {
    let token = ctx.require_token()?;

    let user_ids: Vec<UserId> = users
        .iter()
        .map(|id| UserId::from_string(id.as_str()))
        .collect();

    match ctx
        .client
        .tag_photo(&token, org, event, photo, &user_ids)
        .await
    {
        Ok(()) => output::print_success(&format!("Tagged {} user(s)", user_ids.len()), format),
        Err(e) => output::print_error(&format!("Tagging failed: {}", e), format),
    }

    Ok(())
}

/// MIME type from the file extension. Unknown extensions upload as
/// binary and leave type detection to the server.
fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
