//! Seam between the location codec and the application's route matcher.
//!
//! The pattern language lives entirely on the application side; the codec
//! only hands over decoded path segments and receives back either a route
//! value or "no match".

/// Turns decoded path segments into an application route value.
///
/// Implementations are expected to be pure. Returning `None` means no
/// pattern matched; the navigation facade then falls back to the configured
/// not-found route.
///
/// Any `Fn(&[String]) -> Option<R>` closure is a matcher, so simple
/// applications can pass a plain function:
///
/// ```
/// use waypoint::RouteMatcher;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Page {
///     Home,
///     User(String),
/// }
///
/// let matcher = |segments: &[String]| match segments {
///     [] => Some(Page::Home),
///     [users, id] if users == "users" => Some(Page::User(id.clone())),
///     _ => None,
/// };
///
/// assert_eq!(matcher.match_segments(&[]), Some(Page::Home));
/// assert_eq!(matcher.match_segments(&["nope".to_string()]), None);
/// ```
pub trait RouteMatcher {
    /// The application's route type.
    type Route;

    /// Matches decoded path segments against the application's patterns.
    fn match_segments(&self, segments: &[String]) -> Option<Self::Route>;
}

impl<R, F> RouteMatcher for F
where
    F: Fn(&[String]) -> Option<R>,
{
    type Route = R;

    fn match_segments(&self, segments: &[String]) -> Option<R> {
        self(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_matcher() {
        let matcher = |segments: &[String]| -> Option<&'static str> {
            match segments.first().map(String::as_str) {
                None => Some("home"),
                Some("about") => Some("about"),
                _ => None,
            }
        };

        assert_eq!(matcher.match_segments(&[]), Some("home"));
        assert_eq!(matcher.match_segments(&["about".to_string()]), Some("about"));
        assert_eq!(matcher.match_segments(&["missing".to_string()]), None);
    }
}
