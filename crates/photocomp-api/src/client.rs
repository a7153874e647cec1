//! HTTP client for the PhotoComp platform API.

use photocomp_types::{
    ContinuationToken, Event, JoinRequest, Member, MemberRole, Organization, Photo, UserId,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::types::{
    AuthSuccess, EventsPage, NewAccount, NewEvent, NewOrganization, NewPhoto, OrganizationsPage,
    PhotoUpload, PhotosResponse,
};

/// Page size requested from paginated endpoints.
pub const DEFAULT_PAGE_LIMIT: u32 = 9;

/// The platform's JSON error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct MembersResponse {
    members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct JoinRequestsResponse {
    requests: Vec<JoinRequest>,
}

/// Typed client for the platform API.
///
/// Cheap to clone. Authenticated endpoints take the bearer token as an
/// explicit parameter; the client itself holds no session state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The API base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join a relative path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    // ==========================================
    // Auth
    // ==========================================

    /// Log in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthSuccess> {
        let url = self.endpoint("auth/login");

        debug!(email, "Logging in");

        let response = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let auth: AuthSuccess = self.parse_response(response).await?;
        debug!(user_id = %auth.user.id, "Login succeeded");
        Ok(auth)
    }

    /// Register a new account. A successful registration also logs in.
    pub async fn register(&self, account: &NewAccount) -> ApiResult<AuthSuccess> {
        let url = self.endpoint("auth/register");

        debug!(email = %account.email, "Registering account");

        let response = self.http_client.post(&url).json(account).send().await?;
        self.parse_response(response).await
    }

    /// Change the logged-in account's password.
    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        let url = self.endpoint("auth/password");

        let response = self
            .http_client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({
                "currentPassword": current_password,
                "newPassword": new_password
            }))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!("Password changed");
        Ok(())
    }

    /// Permanently delete an account.
    pub async fn delete_account(&self, token: &str, user_id: &str) -> ApiResult<()> {
        let url = self.endpoint(&format!("users/{}", user_id));

        let response = self
            .http_client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(user_id, "Account deleted");
        Ok(())
    }

    // ==========================================
    // Organizations
    // ==========================================

    /// Fetch one page of organizations.
    ///
    /// `None` asks for the first page; the returned `continuation_key`
    /// feeds the next call.
    pub async fn list_organizations(
        &self,
        cursor: Option<&ContinuationToken>,
        limit: u32,
    ) -> ApiResult<OrganizationsPage> {
        let url = self.endpoint("organizations");

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("limit", limit.to_string())]);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor.as_str())]);
        }

        let response = request.send().await?;
        let page: OrganizationsPage = self.parse_response(response).await?;
        debug!(count = page.organizations.len(), "Fetched organizations page");
        Ok(page)
    }

    /// Create an organization owned by the caller.
    pub async fn create_organization(
        &self,
        token: &str,
        organization: &NewOrganization,
    ) -> ApiResult<Organization> {
        let url = self.endpoint("organizations");

        debug!(name = %organization.name, "Creating organization");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(organization)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Ask to join an organization.
    pub async fn join_organization(&self, token: &str, organization_id: &str) -> ApiResult<()> {
        let url = self.endpoint(&format!("organizations/{}/join", organization_id));

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(organization_id, "Join request submitted");
        Ok(())
    }

    /// List an organization's members.
    pub async fn list_members(&self, token: &str, organization_id: &str) -> ApiResult<Vec<Member>> {
        let url = self.endpoint(&format!("organizations/{}/members", organization_id));

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let parsed: MembersResponse = self.parse_response(response).await?;
        Ok(parsed.members)
    }

    /// Change a member's role within an organization.
    pub async fn update_member_role(
        &self,
        token: &str,
        organization_id: &str,
        user_id: &str,
        role: MemberRole,
    ) -> ApiResult<()> {
        let url = self.endpoint(&format!(
            "organizations/{}/members/{}",
            organization_id, user_id
        ));

        let response = self
            .http_client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({ "role": role }))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(organization_id, user_id, %role, "Member role updated");
        Ok(())
    }

    /// Remove a member from an organization.
    pub async fn remove_member(
        &self,
        token: &str,
        organization_id: &str,
        user_id: &str,
    ) -> ApiResult<()> {
        let url = self.endpoint(&format!(
            "organizations/{}/members/{}",
            organization_id, user_id
        ));

        let response = self
            .http_client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(organization_id, user_id, "Member removed");
        Ok(())
    }

    /// List pending join requests for an organization.
    pub async fn list_join_requests(
        &self,
        token: &str,
        organization_id: &str,
    ) -> ApiResult<Vec<JoinRequest>> {
        let url = self.endpoint(&format!("organizations/{}/requests", organization_id));

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let parsed: JoinRequestsResponse = self.parse_response(response).await?;
        Ok(parsed.requests)
    }

    /// Approve or deny a pending join request.
    pub async fn resolve_join_request(
        &self,
        token: &str,
        organization_id: &str,
        request_id: &str,
        approve: bool,
    ) -> ApiResult<()> {
        let url = self.endpoint(&format!(
            "organizations/{}/requests/{}",
            organization_id, request_id
        ));

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({ "approve": approve }))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(organization_id, request_id, approve, "Join request resolved");
        Ok(())
    }

    // ==========================================
    // Events
    // ==========================================

    /// Fetch one page of an organization's events.
    pub async fn list_organization_events(
        &self,
        organization_id: &str,
        cursor: Option<&ContinuationToken>,
        limit: u32,
    ) -> ApiResult<EventsPage> {
        let url = self.endpoint(&format!("organizations/{}/events", organization_id));

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("limit", limit.to_string())]);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor.as_str())]);
        }

        let response = request.send().await?;
        let page: EventsPage = self.parse_response(response).await?;
        debug!(
            organization_id,
            count = page.events.len(),
            "Fetched events page"
        );
        Ok(page)
    }

    /// Create an event within an organization.
    pub async fn create_event(
        &self,
        token: &str,
        organization_id: &str,
        event: &NewEvent,
    ) -> ApiResult<Event> {
        let url = self.endpoint(&format!("organizations/{}/events", organization_id));

        debug!(organization_id, title = %event.title, "Creating event");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(event)
            .send()
            .await?;

        self.parse_response(response).await
    }

    // ==========================================
    // Photos
    // ==========================================

    /// All photos of an event. Not paginated.
    pub async fn list_photos(
        &self,
        organization_id: &str,
        event_id: &str,
    ) -> ApiResult<Vec<Photo>> {
        let url = self.endpoint(&format!(
            "organizations/{}/events/{}/photos",
            organization_id, event_id
        ));

        let response = self.http_client.get(&url).send().await?;
        let parsed: PhotosResponse = self.parse_response(response).await?;
        debug!(event_id, count = parsed.photos.len(), "Fetched photos");
        Ok(parsed.photos)
    }

    /// Announce a photo upload.
    ///
    /// The server creates the photo record and returns a presigned URL;
    /// the bytes go there via [`upload_photo_bytes`](Self::upload_photo_bytes).
    pub async fn request_photo_upload(
        &self,
        token: &str,
        organization_id: &str,
        event_id: &str,
        photo: &NewPhoto,
    ) -> ApiResult<PhotoUpload> {
        let url = self.endpoint(&format!(
            "organizations/{}/events/{}/photos",
            organization_id, event_id
        ));

        debug!(event_id, file_name = %photo.file_name, "Requesting photo upload");

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(photo)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// PUT the photo bytes to a presigned upload URL.
    ///
    /// The URL carries its own authorization, so no bearer token is sent.
    pub async fn upload_photo_bytes(
        &self,
        upload_url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<()> {
        debug!(size = bytes.len(), "Uploading photo bytes");

        let response = self
            .http_client
            .put(upload_url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        self.check_status(response).await?;
        debug!("Photo bytes uploaded");
        Ok(())
    }

    /// Tag users in a photo.
    pub async fn tag_photo(
        &self,
        token: &str,
        organization_id: &str,
        event_id: &str,
        photo_id: &str,
        user_ids: &[UserId],
    ) -> ApiResult<()> {
        let url = self.endpoint(&format!(
            "organizations/{}/events/{}/photos/{}/tags",
            organization_id, event_id, photo_id
        ));

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&serde_json::json!({ "userIds": user_ids }))
            .send()
            .await?;

        self.check_status(response).await?;
        debug!(photo_id, count = user_ids.len(), "Photo tagged");
        Ok(())
    }

    // ==========================================
    // HTTP helpers
    // ==========================================

    /// Check the status, then decode the JSON body.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-success response into [`ApiError::Server`].
    async fn check_status(&self, response: reqwest::Response) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.trim().is_empty() => format!("request failed with status {}", status),
            Err(_) => body,
        };

        error!(status, "API request failed: {}", message);
        Err(ApiError::Server { status, message })
    }
}
