//! Query-string codec: `?k=v&...` ↔ decoded key/value mapping.

use std::collections::BTreeMap;

use super::encoding::{decode, encode};

/// Returns everything after the first `?` in a raw location string, or the
/// empty string when there is no `?`.
///
/// # Examples
///
/// ```
/// use waypoint::location::query::extract_query_portion;
///
/// assert_eq!(extract_query_portion("/users/1?tab=posts&page=2"), "tab=posts&page=2");
/// assert_eq!(extract_query_portion("/users/1"), "");
/// ```
pub fn extract_query_portion(raw: &str) -> &str {
    match raw.find('?') {
        Some(pos) => &raw[pos + 1..],
        None => "",
    }
}

/// Parses the query portion of a raw location string into a decoded mapping.
///
/// Pairs are split on `&` (empty pieces from leading, trailing, or doubled
/// `&` are dropped), each pair on the first `=` (a missing `=` yields an
/// empty value), and both halves are percent-decoded. Duplicate keys follow
/// map-insertion semantics: the last occurrence wins.
///
/// # Examples
///
/// ```
/// use waypoint::location::query::parse_query;
///
/// let q = parse_query("?k=1&empty=&j=2");
/// assert_eq!(q.get("k"), Some(&"1".to_string()));
/// assert_eq!(q.get("empty"), Some(&"".to_string()));
/// assert_eq!(q.get("j"), Some(&"2".to_string()));
///
/// let q = parse_query("?k=1&k=2");
/// assert_eq!(q.get("k"), Some(&"2".to_string()));
/// ```
pub fn parse_query(raw: &str) -> BTreeMap<String, String> {
    extract_query_portion(raw)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key).into_owned(), decode(value).into_owned()),
            None => (decode(pair).into_owned(), String::new()),
        })
        .collect()
}

/// Serializes a query mapping back to its `?`-prefixed string form.
///
/// An empty mapping yields the empty string (no dangling `?`). Keys and
/// values are percent-encoded; `BTreeMap` iteration makes the pair order
/// lexicographic by key and therefore stable across runs.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use waypoint::location::query::serialize_query;
///
/// let mut q = BTreeMap::new();
/// q.insert("tab".to_string(), "posts".to_string());
/// q.insert("page".to_string(), "2".to_string());
/// assert_eq!(serialize_query(&q), "?page=2&tab=posts");
///
/// assert_eq!(serialize_query(&BTreeMap::new()), "");
/// ```
pub fn serialize_query(query: &BTreeMap<String, String>) -> String {
    if query.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect();

    format!("?{}", pairs.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_query_portion_first_question_mark() {
        assert_eq!(extract_query_portion("/a?x=1?y=2"), "x=1?y=2");
        assert_eq!(extract_query_portion("?"), "");
        assert_eq!(extract_query_portion(""), "");
    }

    #[test]
    fn test_parse_query_basic() {
        assert_eq!(parse_query("?a=1&b=2"), map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_parse_query_stray_ampersands() {
        assert_eq!(parse_query("?&a=1&&b=2&"), map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_parse_query_missing_equals() {
        assert_eq!(parse_query("?flag"), map(&[("flag", "")]));
    }

    #[test]
    fn test_parse_query_decodes_both_halves() {
        assert_eq!(
            parse_query("?se%26arch=a%3Db"),
            map(&[("se&arch", "a=b")])
        );
    }

    #[test]
    fn test_serialize_query_encodes_reserved() {
        let q = map(&[("se&arch", "a=b")]);
        assert_eq!(serialize_query(&q), "?se%26arch=a%3Db");
    }

    #[test]
    fn test_serialize_query_deterministic_order() {
        let q = map(&[("z", "1"), ("a", "2"), ("m", "3")]);
        assert_eq!(serialize_query(&q), "?a=2&m=3&z=1");
    }

    #[test]
    fn test_round_trip() {
        let q = map(&[("page", "2"), ("search", "rust & cows"), ("tab", "")]);
        assert_eq!(parse_query(&serialize_query(&q)), q);
    }
}
