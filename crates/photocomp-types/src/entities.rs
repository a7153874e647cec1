//! Entity models matching the platform's wire format.
//!
//! Field names follow the API's camelCase JSON. Optional fields carry
//! `#[serde(default)]` so older server payloads that omit them still parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EventId, OrganizationId, PhotoId, UserId};

/// Platform-level role of a user account.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// An authenticated platform user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    /// Display name in "First Last" form.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An organization that runs events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// An event within an organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub organization_id: OrganizationId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// A photo uploaded to an event.
///
/// `url` and `thumbnail_url` are presigned and expire; they are opaque to
/// the client and re-fetched rather than cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub event_id: EventId,
    pub file_name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<UserId>,
    #[serde(default)]
    pub tagged_users: Vec<UserId>,
}

/// Role a user holds within one organization.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Admin,
    Owner,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Member => write!(f, "member"),
            MemberRole::Admin => write!(f, "admin"),
            MemberRole::Owner => write!(f, "owner"),
        }
    }
}

/// A user's membership in an organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user: User,
    pub role: MemberRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

/// A pending request to join an organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: String,
    pub organization_id: OrganizationId,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_camel_case_payload() {
        let json = r#"{
            "id": "user-1",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "user"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_str(), "user-1");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn organization_tolerates_missing_optionals() {
        let json = r#"{"id": "org-1", "name": "Hiking Club", "slug": "hiking-club"}"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.description, None);
        assert_eq!(org.logo_url, None);
    }

    #[test]
    fn organization_serializes_with_camel_case_keys() {
        let org = Organization {
            id: OrganizationId::from("org-1"),
            name: "Hiking Club".to_string(),
            slug: "hiking-club".to_string(),
            description: None,
            logo_url: Some("https://cdn.example.com/logo.png".to_string()),
        };

        let json = serde_json::to_string(&org).unwrap();
        assert!(json.contains("\"logoUrl\""));
        assert!(!json.contains("\"description\""));
    }

    #[test]
    fn event_parses_date_and_defaults() {
        let json = r#"{
            "id": "evt-1",
            "organizationId": "org-1",
            "title": "Summit Day",
            "date": "2025-06-14T09:00:00Z"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.date.is_some());
        assert_eq!(event.location, None);
    }

    #[test]
    fn photo_defaults_tagged_users_to_empty() {
        let json = r#"{
            "id": "photo-1",
            "eventId": "evt-1",
            "fileName": "summit.jpg",
            "url": "https://cdn.example.com/signed/summit.jpg"
        }"#;

        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(photo.tagged_users.is_empty());
        assert_eq!(photo.uploaded_by, None);
    }

    #[test]
    fn member_role_values_are_lowercase() {
        let member: Member = serde_json::from_str(
            r#"{
                "user": {
                    "id": "user-2",
                    "email": "grace@example.com",
                    "firstName": "Grace",
                    "lastName": "Hopper",
                    "role": "admin"
                },
                "role": "owner"
            }"#,
        )
        .unwrap();

        assert_eq!(member.role, MemberRole::Owner);
        assert_eq!(member.user.role, UserRole::Admin);
    }
}
