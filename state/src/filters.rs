//! Lifestyle filter selection, mirrored into the `lifestyle` query parameter.
//!
//! [`FilterSelection`] is the pure state: every mutation returns the encoded
//! parameter value it implies. [`FilterSync`] owns a selection plus a
//! [`QueryRouter`] and applies that value with exactly one URL write per call.

use dioxus_logger::tracing::debug;
use itertools::Itertools;

use crate::catalog::find_tag;
use crate::catalog::lifestyle_tags;
use crate::catalog::LifestyleTag;
use crate::query::QueryRouter;

/// The query parameter holding the comma-joined selection.
pub const LIFESTYLE_PARAM: &str = "lifestyle";

/// Selected lifestyle tag ids, in selection order, without duplicates.
///
/// Ids that are not in the catalog are kept: the URL is user-editable and may
/// come from a newer catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    selected: Vec<String>,
}

impl FilterSelection {
    /// Decodes the `lifestyle` parameter value. Empty segments are skipped
    /// and the first occurrence of a repeated id wins.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(value) => Self::from_ids(split_ids(value)),
            None => Self::default(),
        }
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_owned())
            .filter(|id| !id.is_empty())
            .unique()
            .collect();
        Self { selected }
    }

    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Removes each id in `ids` if selected, appends it otherwise, and
    /// returns the new parameter value.
    ///
    /// `ids` is split on commas like a parameter value, so an id can never
    /// contain the separator. Blank parts and repeats are skipped.
    pub fn toggle(&mut self, ids: &str) -> Option<String> {
        for id in split_ids(ids) {
            match self.selected.iter().position(|s| s == id) {
                Some(index) => {
                    self.selected.remove(index);
                }
                None => self.selected.push(id.to_owned()),
            }
        }
        self.to_param()
    }

    /// Clears the selection. The resulting parameter value is always `None`.
    pub fn reset(&mut self) -> Option<String> {
        self.selected.clear();
        self.to_param()
    }

    /// Encodes the selection; `None` means the parameter must be removed.
    pub fn to_param(&self) -> Option<String> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.join(","))
        }
    }

    /// Selected ids that are not in the catalog.
    pub fn unknown_ids(&self) -> impl Iterator<Item = &str> {
        self.selected
            .iter()
            .map(String::as_str)
            .filter(|id| find_tag(id).is_none())
    }

    /// Chips for the filter bar: the catalog in catalog order, then any
    /// unknown selected ids, which render inert.
    pub fn chips(&self) -> Vec<FilterChip> {
        let known = lifestyle_tags().iter().map(|tag| FilterChip {
            id: tag.id.to_owned(),
            tag: Some(tag),
            selected: self.is_selected(tag.id),
        });
        let unknown = self.unknown_ids().map(|id| FilterChip {
            id: id.to_owned(),
            tag: None,
            selected: true,
        });
        known.chain(unknown).collect()
    }
}

/// Trimmed, non-empty, distinct ids of a comma-joined value.
fn split_ids(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .unique()
}

/// One chip in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub id: String,
    /// `None` for ids that are not in the catalog.
    pub tag: Option<&'static LifestyleTag>,
    pub selected: bool,
}

impl FilterChip {
    pub fn label(&self) -> &str {
        self.tag.map(|tag| tag.label).unwrap_or(self.id.as_str())
    }

    pub fn is_known(&self) -> bool {
        self.tag.is_some()
    }
}

/// A [`FilterSelection`] kept in sync with the current URL.
#[derive(Debug)]
pub struct FilterSync<R> {
    router: R,
    selection: FilterSelection,
}

impl<R: QueryRouter> FilterSync<R> {
    /// Reads the `lifestyle` parameter once to build the initial selection.
    pub fn mount(router: R) -> Self {
        let param = router.query_param(LIFESTYLE_PARAM);
        let selection = FilterSelection::from_param(param.as_deref());
        Self { router, selection }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Toggles `ids` (one id, or several comma-joined) and writes the URL
    /// once. A value with no non-blank id is ignored and causes no write.
    pub fn toggle(&mut self, ids: &str) {
        if split_ids(ids).next().is_none() {
            return;
        }
        let value = self.selection.toggle(ids);
        self.sync(value.as_deref());
    }

    pub fn reset(&mut self) {
        let value = self.selection.reset();
        self.sync(value.as_deref());
    }

    fn sync(&mut self, value: Option<&str>) {
        debug!("lifestyle filter -> {:?}", value);
        self.router.replace_query_param(LIFESTYLE_PARAM, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MemoryRouter;
    use crate::query::QueryParams;

    #[test]
    fn encodes_and_decodes_the_canonical_form() {
        let selection = FilterSelection::from_ids(["waterfront", "nightlife"]);
        let value = selection.to_param();
        assert_eq!(value.as_deref(), Some("waterfront,nightlife"));

        let mut params = QueryParams::default();
        params.set(LIFESTYLE_PARAM, value.as_deref().unwrap());
        assert_eq!(params.to_query_string(), "lifestyle=waterfront,nightlife");

        let url_params = QueryParams::parse("lifestyle=waterfront,nightlife");
        let parsed = FilterSelection::from_param(url_params.get(LIFESTYLE_PARAM));
        assert_eq!(parsed, selection);
    }

    #[test]
    fn parsing_skips_blanks_and_duplicates() {
        let selection = FilterSelection::from_param(Some("golf,,family, golf ,"));
        assert_eq!(selection.ids(), ["golf", "family"]);
        assert!(FilterSelection::from_param(None).is_empty());
        assert!(FilterSelection::from_param(Some("")).is_empty());
    }

    #[test]
    fn toggle_sequences_apply_symmetrically_in_order() {
        let mut selection = FilterSelection::default();
        for id in ["golf", "family", "golf", "wellness", "family", "golf"] {
            selection.toggle(id);
        }
        assert_eq!(selection.ids(), ["wellness", "golf"]);
        let reparsed = FilterSelection::from_param(selection.to_param().as_deref());
        assert_eq!(reparsed, selection);
    }

    #[test]
    fn emptied_selection_encodes_to_none() {
        let mut selection = FilterSelection::default();
        assert_eq!(selection.toggle("golf").as_deref(), Some("golf"));
        assert_eq!(selection.toggle("golf"), None);
    }

    #[test]
    fn unknown_ids_are_kept_as_inert_chips() {
        let selection = FilterSelection::from_ids(["heliport", "golf"]);
        let chips = selection.chips();
        assert_eq!(chips.len(), lifestyle_tags().len() + 1);

        let golf = chips.iter().find(|chip| chip.id == "golf").unwrap();
        assert!(golf.selected && golf.is_known());

        let last = chips.last().unwrap();
        assert_eq!(last.id, "heliport");
        assert_eq!(last.label(), "heliport");
        assert!(!last.is_known());
        assert!(last.selected);
    }

    #[test]
    fn mount_reads_the_url_once() {
        let router = MemoryRouter::new("/search?lifestyle=golf,heliport");
        let sync = FilterSync::mount(router.clone());
        assert_eq!(sync.selection().ids(), ["golf", "heliport"]);
        assert_eq!(router.write_count(), 0);
    }

    #[test]
    fn each_toggle_writes_the_url_exactly_once() {
        let router = MemoryRouter::new("/search?sort=price");
        let mut sync = FilterSync::mount(router.clone());

        sync.toggle("waterfront");
        assert_eq!(router.write_count(), 1);
        sync.toggle("nightlife");
        assert_eq!(router.write_count(), 2);
        assert_eq!(router.url(), "/search?sort=price&lifestyle=waterfront,nightlife");

        sync.toggle("waterfront");
        sync.toggle("nightlife");
        assert_eq!(router.write_count(), 4);
        assert_eq!(router.url(), "/search?sort=price");
        assert_eq!(router.query_param(LIFESTYLE_PARAM), None);
    }

    #[test]
    fn reset_removes_the_parameter() {
        let router = MemoryRouter::new("/search?lifestyle=golf,family");
        let mut sync = FilterSync::mount(router.clone());
        sync.reset();
        assert!(sync.selection().is_empty());
        assert_eq!(router.history(), ["/search"]);
    }

    #[test]
    fn blank_toggle_is_ignored() {
        let router = MemoryRouter::new("/search");
        let mut sync = FilterSync::mount(router.clone());
        sync.toggle("  ");
        assert_eq!(router.write_count(), 0);
    }

    #[test]
    fn url_reconstructs_the_selection() {
        let router = MemoryRouter::new("/search");
        let mut sync = FilterSync::mount(router.clone());
        for id in ["family", "golf", "beach-access"] {
            sync.toggle(id);
        }
        let remounted = FilterSync::mount(MemoryRouter::new(&router.url()));
        assert_eq!(remounted.selection(), sync.selection());
    }

    #[test]
    fn comma_joined_toggle_applies_to_each_id() {
        let router = MemoryRouter::new("/search");
        let mut sync = FilterSync::mount(router.clone());
        sync.toggle("golf,family");
        assert_eq!(sync.selection().ids(), ["golf", "family"]);
        assert_eq!(router.write_count(), 1);

        let remounted = FilterSync::mount(MemoryRouter::new(&router.url()));
        assert_eq!(remounted.selection(), sync.selection());
    }

    #[test]
    fn repeated_ids_in_one_toggle_never_duplicate_the_url() {
        let router = MemoryRouter::new("/search?lifestyle=golf");
        let mut sync = FilterSync::mount(router.clone());
        sync.toggle("golf,golf");
        assert!(sync.selection().is_empty());
        assert_eq!(router.url(), "/search");

        sync.toggle(" family , , family,wellness");
        assert_eq!(router.query_param(LIFESTYLE_PARAM).as_deref(), Some("family,wellness"));
        let remounted = FilterSync::mount(MemoryRouter::new(&router.url()));
        assert_eq!(remounted.selection(), sync.selection());
    }

    #[test]
    fn separator_only_toggle_is_ignored() {
        let router = MemoryRouter::new("/search");
        let mut sync = FilterSync::mount(router.clone());
        sync.toggle(" , ,");
        assert_eq!(router.write_count(), 0);
        assert!(sync.selection().is_empty());
    }

    #[test]
    fn selection_toggle_splits_on_commas() {
        let mut selection = FilterSelection::from_ids(["golf"]);
        assert_eq!(selection.toggle("golf,nightlife").as_deref(), Some("nightlife"));
        assert_eq!(selection.ids(), ["nightlife"]);
    }
}
