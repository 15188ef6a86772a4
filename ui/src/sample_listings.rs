//! A small, bundled listing catalog standing in for the listings API.

use luxe_state::listing::Listing;
use luxe_state::listing::ListingQuery;
use luxe_state::listing::ListingSource;
use luxe_state::EntityId;

const LISTINGS_JSON: &str = include_str!("../data/listings.json");

#[derive(Debug, Clone, PartialEq)]
pub struct SampleListings {
    listings: Vec<Listing>,
}

impl SampleListings {
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(LISTINGS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            listings: serde_json::from_str(json)?,
        })
    }
}

impl ListingSource for SampleListings {
    fn listings(&self, query: &ListingQuery) -> Vec<Listing> {
        query.filter(&self.listings).into_iter().cloned().collect()
    }

    fn listing(&self, id: &EntityId) -> Option<Listing> {
        self.listings.iter().find(|listing| &listing.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_state::catalog::find_tag;

    #[test]
    fn bundled_catalog_parses() {
        let source = SampleListings::load().unwrap();
        assert_eq!(source.listings(&ListingQuery::default()).len(), 12);
    }

    #[test]
    fn bundled_tags_are_all_in_the_catalog() {
        let source = SampleListings::load().unwrap();
        for listing in source.listings(&ListingQuery::default()) {
            for tag in &listing.lifestyle {
                assert!(find_tag(tag).is_some(), "{} has unknown tag {}", listing.id, tag);
            }
        }
    }

    #[test]
    fn lookup_by_numeric_or_string_id() {
        let source = SampleListings::load().unwrap();
        assert!(source.listing(&EntityId::from(101)).is_some());
        assert!(source.listing(&EntityId::from("101")).is_some());
        assert!(source.listing(&EntityId::from("chacra-7")).is_some());
        assert!(source.listing(&EntityId::from(999)).is_none());
    }

    #[test]
    fn query_filters_by_tag() {
        let source = SampleListings::load().unwrap();
        let query = ListingQuery {
            tags: vec!["equestrian".into()],
            bounds: None,
        };
        let ids = source
            .listings(&query)
            .into_iter()
            .map(|l| l.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["chacra-7", "108"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SampleListings::from_json("{").is_err());
    }
}
