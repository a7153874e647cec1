//! The trait paged collections require of their items.

use crate::entities::{Event, Organization, Photo};
use crate::gallery::GalleryItem;

/// Behaviour the pagination engine needs from an entity.
///
/// `item_id` keys de-duplication across pages; `search_fields` feeds the
/// client-side filter and holds the name or title first, then the
/// description when one exists.
pub trait CollectionItem {
    /// Stable identifier used for de-duplication.
    fn item_id(&self) -> &str;

    /// Fields the search filter matches against.
    fn search_fields(&self) -> Vec<&str>;
}

impl CollectionItem for Organization {
    fn item_id(&self) -> &str {
        self.id.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

impl CollectionItem for Event {
    fn item_id(&self) -> &str {
        self.id.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

impl CollectionItem for Photo {
    fn item_id(&self) -> &str {
        self.id.as_str()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.file_name.as_str()]
    }
}

impl CollectionItem for GalleryItem {
    fn item_id(&self) -> &str {
        self.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        match self {
            GalleryItem::Organization(org) => org.search_fields(),
            GalleryItem::Event(event) => event.search_fields(),
            GalleryItem::Photo(photo) => photo.search_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::OrganizationId;

    #[test]
    fn organization_search_fields_include_description_when_present() {
        let mut org = Organization {
            id: OrganizationId::from("org-1"),
            name: "Hiking Club".to_string(),
            slug: "hiking-club".to_string(),
            description: None,
            logo_url: None,
        };
        assert_eq!(org.search_fields(), vec!["Hiking Club"]);

        org.description = Some("Weekend trails".to_string());
        assert_eq!(org.search_fields(), vec!["Hiking Club", "Weekend trails"]);
    }

    #[test]
    fn item_id_matches_entity_id() {
        let org = Organization {
            id: OrganizationId::from("org-9"),
            name: "Climbers".to_string(),
            slug: "climbers".to_string(),
            description: None,
            logo_url: None,
        };
        assert_eq!(org.item_id(), "org-9");
    }
}
