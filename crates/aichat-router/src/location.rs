//! Locations and deployment base
//!
//! The app can be served under a sub-path (`/app/chat`), so every location is
//! stripped of its base before it reaches the route table, and every link is
//! prefixed with it on the way out.

/// A parsed location: path, query and hash
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl Location {
    /// Parse a location string. Accepts absolute URLs as well as bare paths.
    pub fn parse(href: &str) -> Self {
        let (rest, hash) = match href.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (href, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };

        // Drop scheme and authority; only the part before `?`/`#` can carry them
        let path = if path.starts_with('/') {
            path
        } else {
            path.split_once("://")
                .map_or(path, |(_, rest)| rest.find('/').map_or("", |i| &rest[i..]))
        };

        Self {
            path: if path.is_empty() { "/".into() } else { path.into() },
            query,
            hash,
        }
    }

    /// Path relative to `base`, or `None` when the location lies outside it.
    pub fn strip_base<'a>(&'a self, base: &Base) -> Option<&'a str> {
        if base.is_root() {
            return Some(&self.path);
        }

        let rest = self.path.strip_prefix(base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Normalised deployment base: `""` for root, otherwise `/segment[/...]`
/// without a trailing slash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Base(String);

impl Base {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub const fn root() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix a route path (optionally carrying a query) with the base
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
