//! Query-string handling and the router abstraction the filters write through.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use url::form_urlencoded;

/// The slice of a routing facility that search state needs.
///
/// Implementations must apply `replace_query_param` in place: no new history
/// entry, no scroll reset, no navigation.
pub trait QueryRouter {
    /// The current path, without query string.
    fn path(&self) -> String;

    fn query_param(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, or removes it when `value` is `None`. Other
    /// parameters are left untouched.
    fn replace_query_param(&mut self, key: &str, value: Option<&str>);
}

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parses a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(
            form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        )
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value of `key` in place, dropping any repeats, or
    /// appends it if absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value.to_owned();
                let mut seen = 0;
                self.0.retain(|(k, _)| {
                    if k == key {
                        seen += 1;
                        seen == 1
                    } else {
                        true
                    }
                });
            }
            None => self.0.push((key.to_owned(), value.to_owned())),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the parameters without a leading `?`.
    ///
    /// Commas in values are kept literal so list parameters stay readable
    /// (`lifestyle=waterfront,nightlife`); everything else is form-encoded.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode_list(v)))
            .join("&")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

fn encode_list(s: &str) -> String {
    s.split(',').map(encode).join(",")
}

/// Joins a path and parameters into a relative URL.
pub fn with_query(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{params}")
    }
}

/// How many past URLs a [`MemoryRouter`] remembers.
pub const HISTORY_LIMIT: usize = 16;

#[derive(Debug, Default)]
struct MemoryRouterInner {
    path: String,
    params: QueryParams,
    history: VecDeque<String>,
    writes: usize,
}

/// A [`QueryRouter`] over an in-memory URL.
///
/// Used by desktop builds, which have no address bar, and by tests. Clones
/// share state. The last [`HISTORY_LIMIT`] writes are kept in
/// [`MemoryRouter::history`].
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    inner: Rc<RefCell<MemoryRouterInner>>,
}

impl MemoryRouter {
    /// Creates a router positioned at `url`, e.g. `/search?lifestyle=golf`.
    pub fn new(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Self {
            inner: Rc::new(RefCell::new(MemoryRouterInner {
                path: path.to_owned(),
                params: QueryParams::parse(query),
                history: VecDeque::new(),
                writes: 0,
            })),
        }
    }

    pub fn url(&self) -> String {
        let inner = self.inner.borrow();
        with_query(&inner.path, &inner.params)
    }

    /// The URL after each recent `replace_query_param` call, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.iter().cloned().collect()
    }

    /// Total `replace_query_param` calls, including those no longer in
    /// [`MemoryRouter::history`].
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl QueryRouter for MemoryRouter {
    fn path(&self) -> String {
        self.inner.borrow().path.clone()
    }

    fn query_param(&self, key: &str) -> Option<String> {
        self.inner.borrow().params.get(key).map(str::to_owned)
    }

    fn replace_query_param(&mut self, key: &str, value: Option<&str>) {
        let mut inner = self.inner.borrow_mut();
        match value {
            Some(value) => inner.params.set(key, value),
            None => inner.params.remove(key),
        }
        let url = with_query(&inner.path, &inner.params);
        if inner.history.len() == HISTORY_LIMIT {
            inner.history.pop_front();
        }
        inner.history.push_back(url);
        inner.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_or_without_question_mark() {
        assert_eq!(QueryParams::parse("?a=1&b=2"), QueryParams::parse("a=1&b=2"));
        assert_eq!(QueryParams::parse("?a=1").get("a"), Some("1"));
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn commas_stay_literal_and_other_characters_are_encoded() {
        let mut params = QueryParams::default();
        params.set("lifestyle", "waterfront,nightlife");
        params.set("q", "sea view&pool");
        assert_eq!(
            params.to_query_string(),
            "lifestyle=waterfront,nightlife&q=sea+view%26pool"
        );
        let reparsed = QueryParams::parse(&params.to_query_string());
        assert_eq!(reparsed, params);
    }

    #[test]
    fn encoded_commas_decode_to_commas() {
        let params = QueryParams::parse("lifestyle=golf%2Cfamily");
        assert_eq!(params.get("lifestyle"), Some("golf,family"));
    }

    #[test]
    fn set_replaces_in_place_and_drops_repeats() {
        let mut params = QueryParams::parse("a=1&k=x&b=2&k=y");
        params.set("k", "z");
        assert_eq!(params.to_query_string(), "a=1&k=z&b=2");
    }

    #[test]
    fn memory_router_records_each_write() {
        let mut router = MemoryRouter::new("/search?page=2");
        router.replace_query_param("lifestyle", Some("golf"));
        router.replace_query_param("lifestyle", None);
        assert_eq!(
            router.history(),
            ["/search?page=2&lifestyle=golf", "/search?page=2"]
        );
        assert_eq!(router.path(), "/search");
        assert_eq!(router.url(), "/search?page=2");
    }

    #[test]
    fn memory_router_history_is_bounded() {
        let mut router = MemoryRouter::new("/search");
        for page in 0..HISTORY_LIMIT + 5 {
            router.replace_query_param("page", Some(&page.to_string()));
        }
        let history = router.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], "/search?page=5");
        assert_eq!(router.write_count(), HISTORY_LIMIT + 5);
        assert_eq!(router.url(), format!("/search?page={}", HISTORY_LIMIT + 4));
    }
}
