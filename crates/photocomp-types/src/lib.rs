//! # PhotoComp Types
//!
//! Shared domain types for the PhotoComp client.
//!
//! Everything here mirrors the platform's wire format (camelCase JSON):
//! the entity models, string id newtypes, the tagged [`GalleryItem`] union
//! used by mixed detail views, and the [`CollectionItem`] trait the
//! pagination engine consumes.

pub mod collection;
pub mod entities;
pub mod gallery;
pub mod ids;

pub use collection::CollectionItem;
pub use entities::{Event, JoinRequest, Member, MemberRole, Organization, Photo, User, UserRole};
pub use gallery::GalleryItem;
pub use ids::{ContinuationToken, EventId, OrganizationId, PhotoId, UserId};
