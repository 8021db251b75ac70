//! Structured application location and its codec.
//!
//! A [`Location`] is the normalized middle ground between the raw string a
//! browser holds and whatever route type the application matches it to:
//! an ordered list of decoded path segments plus a decoded query mapping.
//!
//! Parsing is **total**: any input string, however malformed, yields a
//! (possibly empty) `Location`. Deciding that a location means "not found"
//! is the route matcher's job, never the codec's.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod encoding;
pub mod path;
pub mod query;

pub use encoding::{decode, encode};
pub use path::{dedup_slashes, extract_path_portion, parse_segments};
pub use query::{extract_query_portion, parse_query, serialize_query};

/// A normalized application location: decoded path segments plus query map.
///
/// Value type, immutable by convention — every transformation returns a new
/// `Location` instead of mutating in place. Invariants:
///
/// - no path segment is the empty string
/// - segments and query keys/values are stored decoded, not percent-escaped
/// - query keys are unique; `BTreeMap` keeps serialization order stable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Decoded path segments in left-to-right URL order.
    pub path: Vec<String>,
    /// Decoded query parameters, keyed uniquely.
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Parses a raw location string into a `Location`.
    ///
    /// Total and pure: hash fragments, base-path noise, duplicate slashes,
    /// stray `&`s, and malformed percent sequences all degrade gracefully to
    /// fewer (or zero) segments and query entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::Location;
    ///
    /// let loc = Location::parse("#/users/1?tab=posts");
    /// assert_eq!(loc.path, vec!["users", "1"]);
    /// assert_eq!(loc.query.get("tab"), Some(&"posts".to_string()));
    ///
    /// assert_eq!(Location::parse("///"), Location::default());
    /// ```
    pub fn parse(raw: &str) -> Self {
        Location {
            path: parse_segments(raw),
            query: parse_query(raw),
        }
    }

    /// Builds a `Location` from path segments, with an empty query.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::Location;
    ///
    /// let loc = Location::from_segments(["users", "1"]);
    /// assert_eq!(loc.path, vec!["users", "1"]);
    /// assert!(loc.query.is_empty());
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Location {
            path: segments.into_iter().map(|s| s.into()).collect(),
            query: BTreeMap::new(),
        }
    }

    /// Returns a new `Location` with the path unchanged and the query
    /// replaced entirely (not merged).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use waypoint::Location;
    ///
    /// let mut q = BTreeMap::new();
    /// q.insert("page".to_string(), "2".to_string());
    ///
    /// let loc = Location::parse("/users?old=1").with_query(q);
    /// assert_eq!(loc.path, vec!["users"]);
    /// assert_eq!(loc.query.get("old"), None);
    /// assert_eq!(loc.query.get("page"), Some(&"2".to_string()));
    /// ```
    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_combines_path_and_query() {
        let loc = Location::parse("/app/users/1?tab=posts&page=2");
        assert_eq!(loc.path, vec!["app", "users", "1"]);
        assert_eq!(loc.query.len(), 2);
    }

    #[test]
    fn test_parse_is_total_on_garbage() {
        for raw in ["", "#", "?", "??", "#?&=", "%%%", "///?&&&"] {
            let _ = Location::parse(raw);
        }
    }

    #[test]
    fn test_parse_hash_fragment_wins() {
        let loc = Location::parse("http://host/server/side#/client/side?x=1");
        assert_eq!(loc.path, vec!["client", "side"]);
        assert_eq!(loc.query.get("x"), Some(&"1".to_string()));
    }

    #[test]
    fn test_with_query_replaces() {
        let original = Location::parse("/a?keep=no");
        let mut q = BTreeMap::new();
        q.insert("new".to_string(), "yes".to_string());

        let updated = original.clone().with_query(q);
        assert_eq!(updated.path, original.path);
        assert!(!updated.query.contains_key("keep"));
        // Original is untouched
        assert!(original.query.contains_key("keep"));
    }
}
