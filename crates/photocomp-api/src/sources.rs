//! Adapters binding the API client to the pagination engine.
//!
//! Each source wraps an [`ApiClient`] and one paginated endpoint, turning
//! its wire page into the engine's [`Page`]. Views compose these with
//! `Loader` or `DependentLoader` from `photocomp-pager`.

use async_trait::async_trait;
use photocomp_pager::{ChildSource, Page, PageSource};
use photocomp_types::{ContinuationToken, Event, Organization};

use crate::client::{ApiClient, DEFAULT_PAGE_LIMIT};
use crate::error::ApiError;

/// Pages through every organization on the platform.
pub struct OrganizationSource {
    client: ApiClient,
}

impl OrganizationSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for OrganizationSource {
    type Item = Organization;
    type Error = ApiError;

    async fn fetch_page(
        &self,
        cursor: Option<&ContinuationToken>,
    ) -> Result<Page<Organization>, ApiError> {
        let page = self
            .client
            .list_organizations(cursor, DEFAULT_PAGE_LIMIT)
            .await?;
        Ok(Page::new(page.organizations, page.continuation_key))
    }
}

/// Pages through one organization's events.
pub struct OrganizationEventsSource {
    client: ApiClient,
    organization_id: String,
}

impl OrganizationEventsSource {
    pub fn new(client: ApiClient, organization_id: impl Into<String>) -> Self {
        Self {
            client,
            organization_id: organization_id.into(),
        }
    }
}

#[async_trait]
impl PageSource for OrganizationEventsSource {
    type Item = Event;
    type Error = ApiError;

    async fn fetch_page(
        &self,
        cursor: Option<&ContinuationToken>,
    ) -> Result<Page<Event>, ApiError> {
        let page = self
            .client
            .list_organization_events(&self.organization_id, cursor, DEFAULT_PAGE_LIMIT)
            .await?;
        Ok(Page::new(page.events, page.continuation_key))
    }
}

/// Child source for the mixed feed: events fetched per organization.
pub struct EventsByOrganization {
    client: ApiClient,
}

impl EventsByOrganization {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChildSource for EventsByOrganization {
    type Child = Event;
    type Error = ApiError;

    async fn fetch_children(
        &self,
        parent_id: &str,
        cursor: Option<&ContinuationToken>,
    ) -> Result<Page<Event>, ApiError> {
        let page = self
            .client
            .list_organization_events(parent_id, cursor, DEFAULT_PAGE_LIMIT)
            .await?;
        Ok(Page::new(page.events, page.continuation_key))
    }

    fn parent_id_of(child: &Event) -> &str {
        child.organization_id.as_str()
    }
}
