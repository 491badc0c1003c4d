//! Routes
//!
//! The closed set of views the app can show, and the table rows that bind
//! them to paths and names.

use serde::{Deserialize, Serialize};

/// A view the app can mount. One variant per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppRoute {
    /// Landing page
    #[serde(rename = "landing")]
    Home,
    /// Chat room
    #[serde(rename = "chat_room")]
    Chat,
}

impl AppRoute {
    /// Every route, in declaration order
    pub const ALL: [Self; 2] = [Self::Home, Self::Chat];

    /// Literal path pattern
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Chat => "/chat",
        }
    }

    /// Symbolic name used for reverse lookups
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Chat => "chat",
        }
    }

    /// Path without its leading slash, as the frontend router declares it.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Chat => "chat",
        }
    }
}

impl std::fmt::Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the route table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Symbolic name
    pub name: &'static str,

    /// Literal path pattern
    pub path: &'static str,

    /// View mounted when this entry is active
    #[serde(rename = "view")]
    pub route: AppRoute,
}

impl RouteEntry {
    /// Entry using the route's own path and name
    pub const fn new(route: AppRoute) -> Self {
        Self {
            name: route.name(),
            path: route.path(),
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_matches_path() {
        for route in AppRoute::ALL {
            assert_eq!(format!("/{}", route.segment()), route.path());
        }
    }

    #[test]
    fn test_entry_serializes_view() {
        let json = serde_json::to_value(RouteEntry::new(AppRoute::Chat)).unwrap();
        assert_eq!(json["name"], "chat");
        assert_eq!(json["path"], "/chat");
        assert_eq!(json["view"], "chat_room");
    }
}
