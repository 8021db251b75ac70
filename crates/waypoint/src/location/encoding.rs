//! Percent-encoding for query keys, query values, and path segments.
//!
//! Thin wrappers around `urlencoding` with one policy decision: decoding is
//! **lenient**. A malformed percent sequence degrades to the original
//! substring instead of failing, so the surrounding parse always completes.

use std::borrow::Cow;

/// Percent-encodes a string for use inside a real path.
///
/// Reserved characters (`&`, `=`, `#`, `/`, `%`, ...) and non-ASCII input are
/// all escaped, so `decode(encode(s)) == s` holds for every `s`.
///
/// # Examples
///
/// ```
/// use waypoint::location::encoding::encode;
///
/// assert_eq!(encode("a&b=c"), "a%26b%3Dc");
/// assert_eq!(encode("café"), "caf%C3%A9");
/// ```
pub fn encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}

/// Percent-decodes a string, falling back to the input on malformed data.
///
/// Sequences that do not decode to valid UTF-8 leave the string unchanged
/// rather than aborting the parse that called us.
///
/// # Examples
///
/// ```
/// use waypoint::location::encoding::decode;
///
/// assert_eq!(decode("a%26b%3Dc"), "a&b=c");
/// assert_eq!(decode("caf%C3%A9"), "café");
///
/// // Lenient fallback: invalid UTF-8 sequence is kept verbatim
/// assert_eq!(decode("%FF"), "%FF");
/// ```
pub fn decode(s: &str) -> Cow<'_, str> {
    urlencoding::decode(s).unwrap_or(Cow::Borrowed(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let inputs = ["", "plain", "a&b=c", "#/x/y", "100%", "über straße", "a b"];
        for input in inputs {
            assert_eq!(decode(&encode(input)), input);
        }
    }

    #[test]
    fn test_decode_borrows_when_unescaped() {
        assert!(matches!(decode("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_decode_malformed_keeps_input() {
        assert_eq!(decode("%FF%FE"), "%FF%FE");
        assert_eq!(decode("%"), "%");
    }
}
