//! # Waypoint
//!
//! A bidirectional URL/path ↔ structured-location codec for single-page
//! applications, plus the thin glue that wires it between an application
//! route matcher and a host navigation channel.
//!
//! Three representations of "where the app is" flow through the pipeline:
//!
//! - **Real path** — the literal browser-visible string, hash-prefixed
//!   (`#/users/1`) or mounted under a base path (`/app/users/1`)
//! - **[`Location`]** — ordered decoded path segments plus a query mapping
//! - **Route** — the application's own value, produced by its matcher
//!
//! The codec is **total and pure**: parsing never fails (malformed input
//! degrades to fewer segments or query entries), serialization always yields
//! a valid absolute reference, and neither has side effects. Route matching
//! and history integration stay on the application side behind the
//! [`RouteMatcher`] and [`NavigationDriver`] seams.
//!
//! ## Example
//!
//! ```
//! use waypoint::{Location, RouterConfig};
//!
//! let config = RouterConfig::hash("not found");
//!
//! // Raw string from the browser -> structured location
//! let location = Location::parse("#/users/1?tab=posts");
//! assert_eq!(location.path, vec!["users", "1"]);
//!
//! // Structured location -> real path to push
//! assert_eq!(config.to_real_path(&location), "#/users/1?tab=posts");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
pub mod location;
mod matcher;
mod navigation;

// Re-export the public surface at the crate root
pub use config::RouterConfig;
pub use location::Location;
pub use matcher::RouteMatcher;
pub use navigation::{NavigationDriver, NavigationError, Router};
