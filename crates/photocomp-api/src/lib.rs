//! # PhotoComp API
//!
//! Typed HTTP client for the PhotoComp platform API.
//!
//! [`ApiClient`] wraps every endpoint the client uses: authentication,
//! organizations and their membership, events, and the two-step photo
//! upload (announce, then PUT to a presigned URL). Authenticated calls
//! take the bearer token explicitly; session state lives in
//! `photocomp-session`, never here.
//!
//! The [`sources`] module adapts the paginated endpoints to the
//! pagination engine's `PageSource`/`ChildSource` traits.

mod client;
mod error;
pub mod sources;
mod types;

pub use client::{ApiClient, DEFAULT_PAGE_LIMIT};
pub use error::{ApiError, ApiResult};
pub use types::{
    AuthSuccess, EventsPage, NewAccount, NewEvent, NewOrganization, NewPhoto, OrganizationsPage,
    PhotoUpload, PhotosResponse,
};
