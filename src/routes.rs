//! The application's view routes and the web history they are mounted under.
//!
//! The table is built once at start-up and never mutated afterwards; handlers
//! and templates only ever read it.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// The renderable views an entry can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Converter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const HOME: &str = "home";
pub const CONVERTER: &str = "converter";

pub const ROUTES: &[RouteDefinition] = &[
    RouteDefinition {
        path: "/",
        name: HOME,
        view: View::Home,
    },
    RouteDefinition {
        path: "/converter",
        name: CONVERTER,
        view: View::Converter,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route path {0:?} must start with '/'")]
    InvalidPath(&'static str),

    #[error("Route path {0:?} is declared more than once")]
    DuplicatePath(&'static str),

    #[error("Route name {0:?} is declared more than once")]
    DuplicateName(&'static str),
}

/// Web history: real URL paths below a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    base: String,
}

impl History {
    /// `""`, `"/"`, `"app"`, `"/app/"` all normalise to either `/` or `/app`.
    pub fn web(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            String::from("/")
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_root(&self) -> bool {
        self.base == "/"
    }

    /// Prefixes `path` with the base.
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match (self.is_root(), path.is_empty()) {
            (true, _) => format!("/{}", path),
            (false, true) => self.base.clone(),
            (false, false) => format!("{}/{}", self.base, path),
        }
    }

    /// The part of `path` below the base, always starting with `/`.
    pub fn strip(&self, path: &str) -> Option<String> {
        if self.is_root() {
            return Some(format!("/{}", path.trim_start_matches('/')));
        }

        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some(String::from("/"))
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            None
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::web("/")
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    history: History,
    routes: &'static [RouteDefinition],
}

impl RouteTable {
    pub fn new(history: History, routes: &'static [RouteDefinition]) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in routes {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path));
            }
            if !paths.insert(route.path) {
                return Err(RouteError::DuplicatePath(route.path));
            }
            if !names.insert(route.name) {
                return Err(RouteError::DuplicateName(route.name));
            }
        }

        Ok(Self { history, routes })
    }

    /// The application's own table under `base`.
    pub fn with_base(base: &str) -> Result<Self, RouteError> {
        Self::new(History::web(base), ROUTES)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn routes(&self) -> &'static [RouteDefinition] {
        self.routes
    }

    /// Matches a request URL (query and fragment are ignored) against the table.
    pub fn resolve(&self, url: &str) -> Option<&'static RouteDefinition> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let relative = self.history.strip(path)?;
        let relative = match relative.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        self.routes.iter().find(|route| route.path == relative)
    }

    pub fn by_name(&self, name: &str) -> Option<&'static RouteDefinition> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// The absolute URL of the route called `name`.
    pub fn href(&self, name: &str) -> Option<String> {
        self.by_name(name).map(|route| self.history.join(route.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::with_base("/").unwrap()
    }

    #[test]
    fn table_has_two_distinct_entries() {
        let table = table();
        assert_eq!(table.routes().len(), 2);

        let paths: HashSet<_> = table.routes().iter().map(|route| route.path).collect();
        let names: HashSet<_> = table.routes().iter().map(|route| route.name).collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn root_resolves_to_home() {
        let route = table().resolve("/").unwrap();
        assert_eq!(route.name, "home");
        assert_eq!(route.view, View::Home);
    }

    #[test]
    fn converter_resolves_to_converter() {
        let route = table().resolve("/converter").unwrap();
        assert_eq!(route.name, "converter");
        assert_eq!(route.view, View::Converter);
    }

    #[test]
    fn resolved_routes_outlive_the_table() {
        let route = {
            let table = RouteTable::with_base("/app").unwrap();
            table.resolve("/app/converter").unwrap()
        };
        assert_eq!(route.name, CONVERTER);
        assert_eq!(table().by_name(HOME).unwrap().path, "/");
    }

    #[test]
    fn resolve_ignores_query_fragment_and_trailing_slash() {
        let table = table();
        assert_eq!(table.resolve("/converter/").unwrap().view, View::Converter);
        assert_eq!(table.resolve("/converter?width=80").unwrap().view, View::Converter);
        assert_eq!(table.resolve("/#top").unwrap().view, View::Home);
        assert!(table.resolve("/converters").is_none());
        assert!(table.resolve("/missing").is_none());
    }

    #[test]
    fn resolve_under_base() {
        let table = RouteTable::with_base("/app/").unwrap();
        assert_eq!(table.history().base(), "/app");
        assert_eq!(table.resolve("/app").unwrap().view, View::Home);
        assert_eq!(table.resolve("/app/").unwrap().view, View::Home);
        assert_eq!(table.resolve("/app/converter").unwrap().view, View::Converter);
        assert!(table.resolve("/converter").is_none());
        assert!(table.resolve("/application/converter").is_none());
    }

    #[test]
    fn href_joins_base() {
        assert_eq!(table().href(HOME).as_deref(), Some("/"));
        assert_eq!(table().href(CONVERTER).as_deref(), Some("/converter"));

        let table = RouteTable::with_base("app").unwrap();
        assert_eq!(table.href(HOME).as_deref(), Some("/app"));
        assert_eq!(table.href(CONVERTER).as_deref(), Some("/app/converter"));
        assert_eq!(table.href("missing"), None);
    }

    #[test]
    fn history_normalises_base() {
        assert_eq!(History::web("").base(), "/");
        assert_eq!(History::web("///").base(), "/");
        assert_eq!(History::web("tools/ascii/").base(), "/tools/ascii");
        assert_eq!(History::web("/app").join("/assets/app.css"), "/app/assets/app.css");
        assert_eq!(History::default().join("assets/app.css"), "/assets/app.css");
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        static DUPLICATE: &[RouteDefinition] = &[
            RouteDefinition { path: "/", name: "home", view: View::Home },
            RouteDefinition { path: "/", name: "other", view: View::Converter },
        ];
        let err = RouteTable::new(History::default(), DUPLICATE).unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        static DUPLICATE: &[RouteDefinition] = &[
            RouteDefinition { path: "/", name: "home", view: View::Home },
            RouteDefinition { path: "/converter", name: "home", view: View::Converter },
        ];
        let err = RouteTable::new(History::default(), DUPLICATE).unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("home"));
    }

    #[test]
    fn relative_paths_are_rejected() {
        static RELATIVE: &[RouteDefinition] = &[
            RouteDefinition { path: "converter", name: "converter", view: View::Converter },
        ];
        let err = RouteTable::new(History::default(), RELATIVE).unwrap_err();
        assert_eq!(err, RouteError::InvalidPath("converter"));
    }
}
