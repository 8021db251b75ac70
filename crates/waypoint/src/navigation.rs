//! Navigation channel seam and the router facade that ties the pipeline
//! together: raw string → [`Location`] → route on the way in, and
//! [`Location`] → real path → driver push on the way out.

use crate::config::RouterConfig;
use crate::location::Location;
use crate::matcher::RouteMatcher;

/// Error from the host navigation backend.
///
/// The codec itself has no failure path; the only thing that can go wrong in
/// this crate is the external channel refusing a pushed real path.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The backend rejected the pushed real path.
    #[error("navigation backend rejected {path:?}: {reason}")]
    PushRejected {
        /// Real path that was being pushed.
        path: String,
        /// Backend-provided reason.
        reason: String,
    },
}

/// Outbound half of the host navigation channel.
///
/// Implementations hand the real path to whatever history API the host
/// provides. The inbound half (location-change events) stays on the host
/// side too; it simply calls [`Router::handle_location_change`] with the raw
/// string of each event.
pub trait NavigationDriver {
    /// Pushes a real path as the new visible location.
    fn push(&mut self, real_path: &str) -> Result<(), NavigationError>;
}

/// Wires the codec between an application matcher and a navigation driver.
///
/// Owns the [`RouterConfig`] so that hash/base-path handling is applied
/// consistently on both directions of the pipeline. All operations are
/// synchronous; the router keeps no queue and no history of its own.
///
/// # Examples
///
/// ```
/// use waypoint::{NavigationDriver, NavigationError, Router, RouterConfig};
///
/// struct NoopDriver;
///
/// impl NavigationDriver for NoopDriver {
///     fn push(&mut self, _real_path: &str) -> Result<(), NavigationError> {
///         Ok(())
///     }
/// }
///
/// let matcher = |segments: &[String]| match segments {
///     [] => Some("home"),
///     [s] if s == "about" => Some("about"),
///     _ => None,
/// };
///
/// let mut router = Router::new(RouterConfig::hash("not found"), matcher, NoopDriver);
///
/// assert_eq!(router.handle_location_change("#/about"), "about");
/// assert_eq!(router.handle_location_change("#/no/such/page"), "not found");
/// router.navigate_to("about").unwrap();
/// ```
pub struct Router<M: RouteMatcher, D: NavigationDriver> {
    config: RouterConfig<M::Route>,
    matcher: M,
    driver: D,
}

impl<M, D> Router<M, D>
where
    M: RouteMatcher,
    M::Route: Clone,
    D: NavigationDriver,
{
    /// Creates a router from explicit configuration, matcher, and driver.
    pub fn new(config: RouterConfig<M::Route>, matcher: M, driver: D) -> Self {
        Router {
            config,
            matcher,
            driver,
        }
    }

    /// The configuration this router serializes with.
    pub fn config(&self) -> &RouterConfig<M::Route> {
        &self.config
    }

    /// Resolves an already-parsed location to a route, falling back to the
    /// configured not-found route when no pattern matches.
    pub fn resolve(&self, location: &Location) -> M::Route {
        self.matcher
            .match_segments(&location.path)
            .unwrap_or_else(|| self.config.not_found.clone())
    }

    /// Entry point for inbound location-change events.
    ///
    /// Called once per event with the raw string the host observed. Total:
    /// malformed input parses to an empty location, which either matches an
    /// application root pattern or resolves to the not-found route.
    pub fn handle_location_change(&self, raw: &str) -> M::Route {
        let location = Location::parse(raw);
        tracing::debug!("location change {:?} -> segments {:?}", raw, location.path);
        self.resolve(&location)
    }

    /// Serializes a location and pushes it through the driver.
    pub fn navigate(&mut self, location: &Location) -> Result<(), NavigationError> {
        let real_path = self.config.to_real_path(location);
        tracing::debug!("navigate -> {}", real_path);
        self.driver.push(&real_path)
    }

    /// Serializes an application-level path string and pushes it through the
    /// driver. Convenience over building a [`Location`] by hand.
    pub fn navigate_to(&mut self, route: &str) -> Result<(), NavigationError> {
        let real_path = self.config.to_real_path_from(route);
        tracing::debug!("navigate -> {}", real_path);
        self.driver.push(&real_path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// Driver that records every pushed real path.
    #[derive(Default)]
    struct RecordingDriver {
        pushed: Vec<String>,
    }

    impl NavigationDriver for RecordingDriver {
        fn push(&mut self, real_path: &str) -> Result<(), NavigationError> {
            self.pushed.push(real_path.to_string());
            Ok(())
        }
    }

    /// Driver that refuses everything.
    struct RejectingDriver;

    impl NavigationDriver for RejectingDriver {
        fn push(&mut self, real_path: &str) -> Result<(), NavigationError> {
            Err(NavigationError::PushRejected {
                path: real_path.to_string(),
                reason: "read-only history".to_string(),
            })
        }
    }

    fn matcher(segments: &[String]) -> Option<String> {
        match segments {
            [] => Some("home".to_string()),
            [users, id] if users == "users" => Some(format!("user:{}", id)),
            _ => None,
        }
    }

    fn hash_router<D: NavigationDriver>(driver: D) -> Router<fn(&[String]) -> Option<String>, D> {
        Router::new(
            RouterConfig::hash("not-found".to_string()),
            matcher as fn(&[String]) -> Option<String>,
            driver,
        )
    }

    #[test]
    fn test_handle_location_change_matches() {
        let router = hash_router(RecordingDriver::default());
        assert_eq!(router.handle_location_change("#/users/42"), "user:42");
        assert_eq!(router.handle_location_change(""), "home");
    }

    #[test]
    fn test_handle_location_change_falls_back() {
        let router = hash_router(RecordingDriver::default());
        assert_eq!(router.handle_location_change("#/no/such"), "not-found");
    }

    #[test]
    fn test_navigate_pushes_real_path() {
        let mut router = hash_router(RecordingDriver::default());

        let mut query = BTreeMap::new();
        query.insert("tab".to_string(), "posts".to_string());
        let location = Location::from_segments(["users", "42"]).with_query(query);

        router.navigate(&location).unwrap();
        router.navigate_to("users/7").unwrap();

        assert_eq!(
            router.driver.pushed,
            vec!["#/users/42?tab=posts", "#/users/7"]
        );
    }

    #[test]
    fn test_navigate_propagates_driver_error() {
        let mut router = hash_router(RejectingDriver);
        let err = router.navigate_to("about").unwrap_err();
        assert!(matches!(err, NavigationError::PushRejected { .. }));
        assert_eq!(
            err.to_string(),
            "navigation backend rejected \"#/about\": read-only history"
        );
    }

    #[test]
    fn test_inbound_outbound_round_trip() {
        let mut router = hash_router(RecordingDriver::default());
        router.navigate(&Location::from_segments(["users", "42"])).unwrap();

        let pushed = router.driver.pushed.last().unwrap().clone();
        assert_eq!(router.handle_location_change(&pushed), "user:42");
    }
}
