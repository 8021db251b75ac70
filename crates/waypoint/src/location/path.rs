//! Path-portion utilities for the location codec.
//!
//! All functions are **pure**: same input, same output, no side effects.

use std::borrow::Cow;

use super::encoding::decode;

/// Collapses every run of `/` characters into a single `/`.
///
/// Zero-copy when the input has no doubled slash (`Cow::Borrowed`), single
/// allocation otherwise. Knows nothing about path semantics; it is applied
/// once during real-path assembly to mask the seams that concatenating an
/// empty base path or an empty joined path can leave behind.
///
/// # Examples
///
/// ```
/// use waypoint::location::path::dedup_slashes;
/// use std::borrow::Cow;
///
/// assert_eq!(dedup_slashes("a///b//c"), "a/b/c");
/// assert_eq!(dedup_slashes(""), "");
/// assert!(matches!(dedup_slashes("/a/b"), Cow::Borrowed("/a/b")));
/// ```
pub fn dedup_slashes(s: &str) -> Cow<'_, str> {
    // Fast path: nothing to collapse, return borrowed
    if !s.contains("//") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut prev_was_slash = false;
    for c in s.chars() {
        if c == '/' {
            if !prev_was_slash {
                out.push('/');
            }
            prev_was_slash = true;
        } else {
            out.push(c);
            prev_was_slash = false;
        }
    }
    Cow::Owned(out)
}

/// Returns only the path portion of a raw location string.
///
/// If the string contains a `#`, everything after the **last** `#` is taken
/// first; hash-mode URLs carry the application path inside the fragment, and
/// anything before it (scheme, host, server path) is noise. From that, the
/// portion before the first `?` is the path.
///
/// # Examples
///
/// ```
/// use waypoint::location::path::extract_path_portion;
///
/// assert_eq!(extract_path_portion("/users/1?tab=posts"), "/users/1");
/// assert_eq!(extract_path_portion("http://host/ignored#/real/path?x=1"), "/real/path");
/// assert_eq!(extract_path_portion(""), "");
/// ```
pub fn extract_path_portion(raw: &str) -> &str {
    let after_hash = match raw.rfind('#') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };

    match after_hash.find('?') {
        Some(pos) => &after_hash[..pos],
        None => after_hash,
    }
}

/// Parses the path portion of a raw location string into decoded segments.
///
/// Splits on `/`, drops empty pieces (which makes leading, trailing, and
/// doubled slashes harmless), and percent-decodes each remaining segment.
/// Order is preserved. Total: any input yields a (possibly empty) list.
///
/// # Examples
///
/// ```
/// use waypoint::location::path::parse_segments;
///
/// assert_eq!(parse_segments("#/a//b?x=1"), vec!["a", "b"]);
/// assert_eq!(parse_segments("///"), Vec::<String>::new());
/// assert_eq!(parse_segments(""), Vec::<String>::new());
/// ```
pub fn parse_segments(raw: &str) -> Vec<String> {
    extract_path_portion(raw)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| decode(s).into_owned())
        .collect()
}
