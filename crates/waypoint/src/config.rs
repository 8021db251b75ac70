//! Routing configuration and real-path assembly.
//!
//! [`RouterConfig`] is plain application data passed explicitly to every
//! serializer call — never ambient or global state. `R` is the application's
//! route type; the codec never inspects `not_found`, only the navigation
//! facade falls back to it when matching fails.

use std::borrow::Cow;

use crate::location::{dedup_slashes, serialize_query, Location};

/// Read-only routing configuration supplied by the application at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig<R> {
    /// `true` selects hash-style URLs (`#/...`), `false` path-style.
    pub hash_mode: bool,
    /// Fixed prefix the app is mounted under; used only in path mode. No
    /// leading or trailing slash is required, stray ones are collapsed away.
    pub base_path: String,
    /// Route the caller resolves to when no pattern matches.
    pub not_found: R,
}

impl<R> RouterConfig<R> {
    /// Configuration for hash-style URLs.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::RouterConfig;
    ///
    /// let config = RouterConfig::hash("404");
    /// assert!(config.hash_mode);
    /// assert_eq!(config.base_path, "");
    /// ```
    pub fn hash(not_found: R) -> Self {
        RouterConfig {
            hash_mode: true,
            base_path: String::new(),
            not_found,
        }
    }

    /// Configuration for path-style URLs, optionally under a base path.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::RouterConfig;
    ///
    /// let config = RouterConfig::path("app", "404");
    /// assert!(!config.hash_mode);
    /// assert_eq!(config.base_path, "app");
    /// ```
    pub fn path(base_path: impl Into<String>, not_found: R) -> Self {
        RouterConfig {
            hash_mode: false,
            base_path: base_path.into(),
            not_found,
        }
    }

    /// Serializes a [`Location`] into the real path the browser should show.
    ///
    /// Joins the segments, appends the serialized query, applies the
    /// hash-mode / base-path rules, then collapses duplicate slashes in one
    /// pass rather than special-casing every concatenation seam. Never
    /// returns an empty string; the degenerate case is `"/"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{Location, RouterConfig};
    ///
    /// let hash = RouterConfig::hash(());
    /// assert_eq!(hash.to_real_path(&Location::from_segments(["users", "1"])), "#/users/1");
    ///
    /// let plain = RouterConfig::path("", ());
    /// assert_eq!(plain.to_real_path(&Location::default()), "/");
    ///
    /// let based = RouterConfig::path("app", ());
    /// assert_eq!(based.to_real_path(&Location::from_segments(["about"])), "/app/about");
    /// ```
    pub fn to_real_path(&self, location: &Location) -> String {
        let joined = location.path.join("/");
        let query = serialize_query(&location.query);

        let url = if self.hash_mode {
            format!("#/{}{}", joined, query)
        } else if self.base_path.is_empty() {
            format!("/{}{}", joined, query)
        } else if joined.is_empty() {
            format!("/{}{}", self.base_path, query)
        } else {
            format!("/{}/{}{}", self.base_path, joined, query)
        };

        let collapsed = dedup_slashes(&url);
        if collapsed.is_empty() {
            "/".to_string()
        } else {
            collapsed.into_owned()
        }
    }

    /// Serializes an application-level normalized path string (e.g. `"about"`
    /// or `"users/1?tab=posts"`) into a real path.
    ///
    /// Equivalent to parsing the string as a hash fragment and serializing
    /// the result. The route string is the *application* path: with a
    /// non-empty base path, pass `"about"`, not `"/app/about"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::RouterConfig;
    ///
    /// let based = RouterConfig::path("app", ());
    /// assert_eq!(based.to_real_path_from("about"), "/app/about");
    ///
    /// // Idempotent: a produced real path serializes to itself
    /// let hash = RouterConfig::hash(());
    /// assert_eq!(hash.to_real_path_from("about"), "#/about");
    /// assert_eq!(hash.to_real_path_from("#/about"), "#/about");
    /// ```
    pub fn to_real_path_from(&self, route: &str) -> String {
        self.to_real_path(&Location::parse(&ensure_hash_prefixed(route)))
    }
}

/// Prefixes `#` unless the string already carries one, so that
/// [`Location::parse`] reads the whole string as the application path.
fn ensure_hash_prefixed(route: &str) -> Cow<'_, str> {
    if route.contains('#') {
        Cow::Borrowed(route)
    } else {
        Cow::Owned(format!("#{}", route))
    }
}
