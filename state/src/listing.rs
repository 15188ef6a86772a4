//! The listing record supplied by the data-source collaborator, and the query
//! derived from filter and map state.

use serde::Deserialize;
use serde::Serialize;

use crate::viewport::Bounds;
use crate::viewport::LatLng;
use crate::EntityId;

/// A property listing as supplied by the listing data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: EntityId,
    pub title: String,
    pub position: LatLng,
    /// Asking price in whole US dollars.
    pub price: u64,
    /// Lifestyle tag ids this listing qualifies for.
    #[serde(default)]
    pub lifestyle: Vec<String>,
}

impl Listing {
    pub fn has_tag(&self, id: &str) -> bool {
        self.lifestyle.iter().any(|tag| tag == id)
    }
}

/// What the listing collaborator is asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Every tag must be present on a matching listing.
    pub tags: Vec<String>,
    /// When set, matching listings must lie inside.
    pub bounds: Option<Bounds>,
}

impl ListingQuery {
    pub fn matches(&self, listing: &Listing) -> bool {
        self.tags.iter().all(|tag| listing.has_tag(tag))
            && self
                .bounds
                .map_or(true, |bounds| bounds.contains(listing.position))
    }

    pub fn filter<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// A source of listings. Fetching, caching and paging are the implementor's
/// business.
pub trait ListingSource {
    fn listings(&self, query: &ListingQuery) -> Vec<Listing>;

    /// Looks a listing up by id, e.g. for the favorites page.
    fn listing(&self, id: &EntityId) -> Option<Listing>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, lat: f64, lng: f64, tags: &[&str]) -> Listing {
        Listing {
            id: EntityId::from(id),
            title: format!("Listing {id}"),
            position: LatLng::new(lat, lng),
            price: 500_000,
            lifestyle: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn all_tags_must_match() {
        let query = ListingQuery {
            tags: vec!["golf".into(), "family".into()],
            bounds: None,
        };
        assert!(query.matches(&listing(1, 0.0, 0.0, &["family", "golf", "wellness"])));
        assert!(!query.matches(&listing(2, 0.0, 0.0, &["golf"])));
        assert!(ListingQuery::default().matches(&listing(3, 0.0, 0.0, &[])));
    }

    #[test]
    fn bounds_restrict_by_position() {
        let query = ListingQuery {
            tags: vec![],
            bounds: Some(Bounds {
                north: 1.0,
                south: -1.0,
                east: 1.0,
                west: -1.0,
            }),
        };
        let listings = [listing(1, 0.5, 0.5, &[]), listing(2, 5.0, 0.0, &[])];
        let ids = query
            .filter(&listings)
            .into_iter()
            .map(|l| l.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn lifestyle_defaults_to_empty_when_missing() {
        let json = r#"{"id":7,"title":"Chacra","position":{"lat":-34.8,"lng":-55.0},"price":1}"#;
        let parsed: Listing = serde_json::from_str(json).unwrap();
        assert!(parsed.lifestyle.is_empty());
        assert_eq!(parsed.id, EntityId::from("7"));
    }
}
