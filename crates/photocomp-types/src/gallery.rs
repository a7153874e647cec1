//! Mixed-entity items for gallery and detail views.

use serde::{Deserialize, Serialize};

use crate::entities::{Event, Organization, Photo};

/// One entry in a mixed gallery view.
///
/// The kind is fixed when the value is constructed; consumers match on the
/// variant instead of re-deriving the kind from field shape. On the wire
/// the discriminant travels as a `kind` field alongside the entity's own
/// fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GalleryItem {
    Organization(Organization),
    Event(Event),
    Photo(Photo),
}

impl GalleryItem {
    /// Wire name of this item's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GalleryItem::Organization(_) => "organization",
            GalleryItem::Event(_) => "event",
            GalleryItem::Photo(_) => "photo",
        }
    }

    /// Entity id, regardless of kind.
    pub fn id(&self) -> &str {
        match self {
            GalleryItem::Organization(org) => org.id.as_str(),
            GalleryItem::Event(event) => event.id.as_str(),
            GalleryItem::Photo(photo) => photo.id.as_str(),
        }
    }

    /// Human-facing label: organization name, event title, or photo file name.
    pub fn title(&self) -> &str {
        match self {
            GalleryItem::Organization(org) => &org.name,
            GalleryItem::Event(event) => &event.title,
            GalleryItem::Photo(photo) => &photo.file_name,
        }
    }
}
