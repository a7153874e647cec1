//! Request and response shapes of the platform API.

use chrono::{DateTime, Utc};
use photocomp_types::{ContinuationToken, Event, Organization, Photo, User};
use serde::{Deserialize, Serialize};

/// Successful authentication. Login and registration both return this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

/// Registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields for creating an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Fields for creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Announcement of a photo about to be uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub file_name: String,
    pub content_type: String,
}

/// One page of organizations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationsPage {
    pub organizations: Vec<Organization>,
    /// Cursor for the next page; absent or null when this is the last one.
    #[serde(default)]
    pub continuation_key: Option<ContinuationToken>,
}

/// One page of an organization's events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub events: Vec<Event>,
    #[serde(default)]
    pub continuation_key: Option<ContinuationToken>,
}

/// All photos of an event. This endpoint is not paginated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotosResponse {
    pub photos: Vec<Photo>,
}

/// Response to a photo upload request: the created record plus the
/// presigned URL the bytes must be PUT to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub photo: Photo,
    pub upload_url: String,
}
