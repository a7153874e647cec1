//! The client's route table.

use std::fmt;

/// Every view the client can show, public and protected.
///
/// Routes are pure data: parsing and formatting round-trip, and the
/// protection class is a property of the variant, not of any session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Public
    Home,
    Login,
    Register,
    Organizations,
    OrganizationDetail { slug: String },
    Events,
    EventDetail { slug: String, event_id: String },

    // Protected
    AccountSettings,
    OrganizationCreate,
    EventCreate { slug: String },
    PhotoUpload { slug: String, event_id: String },
    PhotoTagging { slug: String, event_id: String, photo_id: String },
    Members { slug: String },
    JoinRequests { slug: String },
}

impl Route {
    /// Parse a path into a route. Unknown paths yield `None`.
    ///
    /// Static segments are matched before dynamic ones, so
    /// `/organizations/create` is the creation view and never an
    /// organization whose slug happens to be "create".
    pub fn parse(path: &str) -> Option<Route> {
        let path = match path.find(['?', '#']) {
            Some(i) => &path[..i],
            None => path,
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["register"] => Some(Route::Register),
            ["account-settings"] => Some(Route::AccountSettings),
            ["events"] => Some(Route::Events),
            ["organizations"] => Some(Route::Organizations),
            ["organizations", "create"] => Some(Route::OrganizationCreate),
            ["organizations", slug] => Some(Route::OrganizationDetail {
                slug: slug.to_string(),
            }),
            ["organizations", slug, "members"] => Some(Route::Members {
                slug: slug.to_string(),
            }),
            ["organizations", slug, "requests"] => Some(Route::JoinRequests {
                slug: slug.to_string(),
            }),
            ["organizations", slug, "events", "create"] => Some(Route::EventCreate {
                slug: slug.to_string(),
            }),
            ["organizations", slug, "events", event_id] => Some(Route::EventDetail {
                slug: slug.to_string(),
                event_id: event_id.to_string(),
            }),
            ["organizations", slug, "events", event_id, "upload"] => Some(Route::PhotoUpload {
                slug: slug.to_string(),
                event_id: event_id.to_string(),
            }),
            ["organizations", slug, "events", event_id, "photos", photo_id, "tag"] => {
                Some(Route::PhotoTagging {
                    slug: slug.to_string(),
                    event_id: event_id.to_string(),
                    photo_id: photo_id.to_string(),
                })
            }
            _ => None,
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Organizations => "/organizations".to_string(),
            Route::OrganizationDetail { slug } => format!("/organizations/{}", slug),
            Route::Events => "/events".to_string(),
            Route::EventDetail { slug, event_id } => {
                format!("/organizations/{}/events/{}", slug, event_id)
            }
            Route::AccountSettings => "/account-settings".to_string(),
            Route::OrganizationCreate => "/organizations/create".to_string(),
            Route::EventCreate { slug } => format!("/organizations/{}/events/create", slug),
            Route::PhotoUpload { slug, event_id } => {
                format!("/organizations/{}/events/{}/upload", slug, event_id)
            }
            Route::PhotoTagging {
                slug,
                event_id,
                photo_id,
            } => format!(
                "/organizations/{}/events/{}/photos/{}/tag",
                slug, event_id, photo_id
            ),
            Route::Members { slug } => format!("/organizations/{}/members", slug),
            Route::JoinRequests { slug } => format!("/organizations/{}/requests", slug),
        }
    }

    /// Whether entering this route requires passing the session gate.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::AccountSettings
                | Route::OrganizationCreate
                | Route::EventCreate { .. }
                | Route::PhotoUpload { .. }
                | Route::PhotoTagging { .. }
                | Route::Members { .. }
                | Route::JoinRequests { .. }
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
