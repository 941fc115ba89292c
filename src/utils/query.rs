//! Ordered `application/x-www-form-urlencoded` query handling.
//!
//! Pages are configured entirely through their query string, and edit mode
//! rewrites one parameter while keeping the others in place, so pairs are
//! kept in their original order.

use std::borrow::Cow;

/// A URL split into the part before `?`, the raw query and the `#fragment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub base: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Split a URL (or a bare `?query`) into base, query and fragment.
/// The fragment keeps its leading `#`; the query drops its leading `?`.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let (without_fragment, fragment) = match url.find('#') {
        Some(idx) => (&url[..idx], &url[idx..]),
        None => (url, ""),
    };

    match without_fragment.find('?') {
        Some(idx) => UrlParts {
            base: &without_fragment[..idx],
            query: &without_fragment[idx + 1..],
            fragment,
        },
        None => UrlParts {
            base: without_fragment,
            query: "",
            fragment,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is ignored, `+` decodes to a space
    /// and empty segments are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(segment), String::new()),
            })
            .collect();

        Self { pairs }
    }

    /// First value wins when a key repeats, matching the pair `set` replaces.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first occurrence of `key` and drop any later duplicates,
    /// or append the pair if the key is new.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut idx = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = idx <= first || k != key;
                    idx += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode back to `key=value&...` without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            log::debug!("Keeping undecodable query component {:?}: {}", raw, err);
            spaced.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url_with_query_and_fragment() {
        let parts = split_url("https://example.com/countdown.html?title=Hi&date=x#top");
        assert_eq!(parts.base, "https://example.com/countdown.html");
        assert_eq!(parts.query, "title=Hi&date=x");
        assert_eq!(parts.fragment, "#top");
    }

    #[test]
    fn test_split_url_without_query() {
        let parts = split_url("countdown.html");
        assert_eq!(parts.base, "countdown.html");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let pairs = QueryPairs::parse("?title=New+Year%21&date=2025-06-01T10%3A00%3A00%2B05%3A30");
        assert_eq!(pairs.get("title"), Some("New Year!"));
        assert_eq!(pairs.get("date"), Some("2025-06-01T10:00:00+05:30"));
    }

    #[test]
    fn test_first_value_wins() {
        let pairs = QueryPairs::parse("font=a&font=b");
        assert_eq!(pairs.get("font"), Some("a"));
    }

    #[test]
    fn test_get_reads_the_pair_set_replaces() {
        let mut pairs = QueryPairs::parse("title=a&title=b");
        pairs.set("title", "c");
        assert_eq!(pairs.get("title"), Some("c"));
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_set_replaces_in_place_and_drops_duplicates() {
        let mut pairs = QueryPairs::parse("title=a&date=d&title=b&font=f");
        pairs.set("title", "c");
        assert_eq!(pairs.to_query_string(), "title=c&date=d&font=f");
    }

    #[test]
    fn test_set_appends_new_key() {
        let mut pairs = QueryPairs::parse("title=a");
        pairs.set("edit", "true");
        assert_eq!(pairs.to_query_string(), "title=a&edit=true");
    }

    #[test]
    fn test_bare_key_has_empty_value() {
        let pairs = QueryPairs::parse("preview&title=x");
        assert_eq!(pairs.get("preview"), Some(""));
        assert_eq!(pairs.len(), 2);
    }
}
