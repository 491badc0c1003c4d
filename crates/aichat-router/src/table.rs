//! Route Table
//!
//! Ordered list of route entries with forward (path → route) and reverse
//! (name → path) lookup. Built once at startup and read-only afterwards.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::{Result, RouteError};
use crate::location::{Base, Location};
use crate::route::{AppRoute, RouteEntry};

/// Path comparison rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// When false, one trailing slash on a non-root path is ignored
    pub strict: bool,

    /// When false, ASCII case is ignored
    pub sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strict: true,
            sensitive: true,
        }
    }
}

impl MatchOptions {
    fn normalize(self, path: &str) -> Cow<'_, str> {
        let path = if !self.strict && path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        if self.sensitive {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(path.to_ascii_lowercase())
        }
    }
}

/// Immutable route table
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    options: MatchOptions,
}

impl RouteTable {
    /// Build a table, checking that names and paths are unique
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        Self::with_options(entries, MatchOptions::default())
    }

    /// Build a table with explicit match options
    pub fn with_options(entries: Vec<RouteEntry>, options: MatchOptions) -> Result<Self> {
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path.into()));
            }
            if !names.insert(entry.name) {
                return Err(RouteError::DuplicateName(entry.name.into()));
            }
            // Compared under the same rules resolution uses
            if !paths.insert(options.normalize(entry.path)) {
                return Err(RouteError::DuplicatePath(entry.path.into()));
            }
        }

        tracing::debug!(routes = entries.len(), ?options, "route table built");
        Ok(Self { entries, options })
    }

    /// The app's routes: `/` → home, `/chat` → chat
    pub fn standard() -> Self {
        Self::standard_with(MatchOptions::default())
    }

    /// The app's routes with explicit match options
    pub fn standard_with(options: MatchOptions) -> Self {
        // Unique by construction: one entry per `AppRoute` variant
        Self {
            entries: AppRoute::ALL.into_iter().map(RouteEntry::new).collect(),
            options,
        }
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub const fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the first entry whose path matches `path`
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        let wanted = self.options.normalize(path);
        self.entries
            .iter()
            .find(|entry| self.options.normalize(entry.path) == wanted)
    }

    /// Resolve a full location (`/base/chat?x=1#top`): query and hash are
    /// ignored, and paths outside `base` never match.
    pub fn resolve_location(&self, href: &str, base: &Base) -> Option<&RouteEntry> {
        let location = Location::parse(href);
        let path = location.strip_base(base)?;
        self.resolve(path)
    }

    /// Reverse lookup: build the path for a route name, appending `params`
    /// as a query string.
    pub fn navigate_by_name(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;

        Ok(with_query(entry.path, params))
    }

    /// Path for a typed route. Falls back to the route's own path when the
    /// table was built without it.
    pub fn path_for(&self, route: AppRoute) -> &'static str {
        self.entries
            .iter()
            .find(|entry| entry.route == route)
            .map_or_else(|| route.path(), |entry| entry.path)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/").unwrap().route, AppRoute::Home);
        assert_eq!(table.resolve("/chat").unwrap().route, AppRoute::Chat);
    }

    #[test]
    fn test_resolve_unknown_paths() {
        let table = RouteTable::standard();
        for path in ["", "/chat/", "/CHAT", "/chats", "/chat/room", "/pricing", "chat"] {
            assert!(table.resolve(path).is_none(), "{path} should not match");
        }
    }

    #[test]
    fn test_navigate_by_name() {
        let table = RouteTable::standard();
        assert_eq!(table.navigate_by_name("home", &[]).unwrap(), "/");
        assert_eq!(table.navigate_by_name("chat", &[]).unwrap(), "/chat");
    }

    #[test]
    fn test_navigate_by_unknown_name() {
        let table = RouteTable::standard();
        let err = table.navigate_by_name("settings", &[]).unwrap_err();
        assert_eq!(err, RouteError::UnknownName("settings".into()));
        assert!(table.navigate_by_name("", &[]).is_err());
    }

    #[test]
    fn test_navigate_with_query() {
        let table = RouteTable::standard();
        let path = table
            .navigate_by_name("chat", &[("room", "42"), ("topic", "sea turtle")])
            .unwrap();
        assert_eq!(path, "/chat?room=42&topic=sea%20turtle");
    }

    #[test]
    fn test_standard_table_is_valid() {
        let table = RouteTable::standard();
        assert!(RouteTable::new(table.entries().to_vec()).is_ok());

        let names: HashSet<_> = table.iter().map(|e| e.name).collect();
        let paths: HashSet<_> = table.iter().map(|e| e.path).collect();
        assert_eq!(names.len(), table.len());
        assert_eq!(paths.len(), table.len());
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let entries = vec![
            RouteEntry::new(AppRoute::Home),
            RouteEntry { name: "home", path: "/chat", route: AppRoute::Chat },
        ];
        assert_eq!(
            RouteTable::new(entries).unwrap_err(),
            RouteError::DuplicateName("home".into())
        );
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let entries = vec![
            RouteEntry::new(AppRoute::Chat),
            RouteEntry { name: "room", path: "/chat", route: AppRoute::Chat },
        ];
        assert_eq!(
            RouteTable::new(entries).unwrap_err(),
            RouteError::DuplicatePath("/chat".into())
        );
    }

    #[test]
    fn test_duplicate_path_under_insensitive_match() {
        let entries = vec![
            RouteEntry::new(AppRoute::Chat),
            RouteEntry { name: "room", path: "/Chat", route: AppRoute::Chat },
        ];
        let insensitive = MatchOptions { strict: true, sensitive: false };
        assert!(RouteTable::new(entries.clone()).is_ok());
        assert!(RouteTable::with_options(entries, insensitive).is_err());
    }

    #[test]
    fn test_rejects_relative_path() {
        let entries = vec![RouteEntry { name: "chat", path: "chat", route: AppRoute::Chat }];
        assert_eq!(
            RouteTable::new(entries).unwrap_err(),
            RouteError::InvalidPath("chat".into())
        );
    }

    #[test]
    fn test_trailing_slash_patterns() {
        let entries = vec![
            RouteEntry { name: "chat", path: "/chat", route: AppRoute::Chat },
            RouteEntry { name: "lobby", path: "/chat/", route: AppRoute::Home },
        ];
        let table = RouteTable::new(entries).unwrap();
        assert_eq!(table.resolve("/chat/").unwrap().name, "lobby");

        // Non-strict folds both patterns onto `/chat`
        let loose = MatchOptions { strict: false, sensitive: true };
        let entries = vec![
            RouteEntry { name: "chat", path: "/chat", route: AppRoute::Chat },
            RouteEntry { name: "lobby", path: "/lobby/", route: AppRoute::Home },
        ];
        let table = RouteTable::with_options(entries, loose).unwrap();
        assert_eq!(table.resolve("/chat/").unwrap().name, "chat");
        assert_eq!(table.resolve("/lobby").unwrap().name, "lobby");
    }

    #[test]
    fn test_loose_matching() {
        let table = RouteTable::standard_with(MatchOptions { strict: false, sensitive: false });
        assert_eq!(table.resolve("/chat/").unwrap().route, AppRoute::Chat);
        assert_eq!(table.resolve("/Chat").unwrap().route, AppRoute::Chat);
        assert_eq!(table.resolve("/").unwrap().route, AppRoute::Home);
        assert!(table.resolve("/chat//").is_none());
    }

    #[test]
    fn test_resolve_location_ignores_query_and_hash() {
        let table = RouteTable::standard();
        let root = Base::root();
        assert_eq!(
            table.resolve_location("/chat?room=1#latest", &root).unwrap().route,
            AppRoute::Chat
        );
        assert_eq!(table.resolve_location("?x=1", &root).unwrap().route, AppRoute::Home);
        assert_eq!(
            table
                .resolve_location("/chat?next=https://example.com/pricing", &root)
                .unwrap()
                .route,
            AppRoute::Chat
        );
    }

    #[test]
    fn test_resolve_location_under_base() {
        let table = RouteTable::standard();
        let base = Base::new("/app/");
        assert_eq!(table.resolve_location("/app", &base).unwrap().route, AppRoute::Home);
        assert_eq!(table.resolve_location("/app/", &base).unwrap().route, AppRoute::Home);
        assert_eq!(table.resolve_location("/app/chat", &base).unwrap().route, AppRoute::Chat);
        assert!(table.resolve_location("/chat", &base).is_none());
        assert!(table.resolve_location("/application/chat", &base).is_none());
    }

    #[test]
    fn test_path_for() {
        let table = RouteTable::standard();
        assert_eq!(table.path_for(AppRoute::Home), "/");
        assert_eq!(table.path_for(AppRoute::Chat), "/chat");
    }
}
