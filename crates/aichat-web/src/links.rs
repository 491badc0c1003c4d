//! Link building
//!
//! Shared through Leptos context so views never hard-code paths.

use aichat_router::{AppRoute, Base, MatchOptions, Result, RouteTable, RouterConfig};

/// Route table plus deployment base
#[derive(Clone, Debug)]
pub struct RouteLinks {
    table: RouteTable,
    base: Base,
}

impl RouteLinks {
    pub const fn new(table: RouteTable, base: Base) -> Self {
        Self { table, base }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.table(), config.base.clone())
    }

    /// Full href for a typed route
    pub fn href(&self, route: AppRoute) -> String {
        self.base.join(self.table.path_for(route))
    }

    /// Full href by route name, with optional query parameters
    pub fn href_by_name(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let path = self.table.navigate_by_name(name, params)?;
        Ok(self.base.join(&path))
    }

    /// Route for a browser path (base included), under the configured match
    /// options
    pub fn resolve(&self, pathname: &str) -> Option<AppRoute> {
        self.table
            .resolve_location(pathname, &self.base)
            .map(|entry| entry.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_at_root() {
        let links = RouteLinks::new(RouteTable::standard(), Base::root());
        assert_eq!(links.href(AppRoute::Home), "/");
        assert_eq!(links.href(AppRoute::Chat), "/chat");
        assert!(links.href_by_name("pricing", &[]).is_err());
    }

    #[test]
    fn test_every_route_round_trips_through_its_href() {
        let links = RouteLinks::new(RouteTable::standard(), Base::new("/soup"));
        for route in AppRoute::ALL {
            assert_eq!(links.resolve(&links.href(route)), Some(route));
        }
        assert_eq!(links.resolve("/soup/pricing"), None);
        assert_eq!(links.resolve("/chat"), None);
    }

    #[test]
    fn test_resolve_follows_config_options() {
        let strict = RouteLinks::from_config(&RouterConfig::default());
        assert_eq!(strict.resolve("/chat/"), None);

        let loose = RouteLinks::from_config(&RouterConfig {
            base: Base::root(),
            options: MatchOptions { strict: false, sensitive: false },
        });
        assert_eq!(loose.resolve("/Chat/"), Some(AppRoute::Chat));
    }

    #[test]
    fn test_hrefs_under_base() {
        let links = RouteLinks::new(RouteTable::standard(), Base::new("/soup"));
        assert_eq!(links.href(AppRoute::Home), "/soup/");
        assert_eq!(
            links.href_by_name("chat", &[("room", "3")]).unwrap(),
            "/soup/chat?room=3"
        );
    }
}
