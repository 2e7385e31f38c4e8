//! Route table

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::helpers::{decode_segment, normalize_path, post_path};

lazy_static! {
    static ref POST_ROUTE: Regex = Regex::new(r"^/blog/([^/]+)$").unwrap();
}

/// A recognized location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    BlogIndex,
    BlogPost { slug: String },
    /// Matched nothing; keeps the normalized path for display
    NotFound { path: String },
}

impl Route {
    /// Map a location to exactly one route
    ///
    /// The location is normalized first (query, fragment and trailing slash
    /// are dropped). The slug of a post route is percent-decoded; a slug that
    /// does not decode to UTF-8 is kept as written, so the post page can
    /// still report it as unknown.
    pub fn recognize(location: &str) -> Route {
        let path = normalize_path(location);

        match path.as_str() {
            "/" => Route::Home,
            "/about" => Route::About,
            "/blog" => Route::BlogIndex,
            _ => POST_ROUTE
                .captures(&path)
                .map(|caps| decode_segment(&caps[1]).unwrap_or_else(|| caps[1].to_string()))
                .map(|slug| Route::BlogPost { slug })
                .unwrap_or_else(|| Route::NotFound { path: path.clone() }),
        }
    }

    /// Single spelling of a location, used as its history and page key
    ///
    /// Two locations that recognize to the same route share one canonical
    /// path, e.g. `/blog/a b` and `/blog/a%20b`.
    pub fn canonical(location: &str) -> String {
        Route::recognize(location).path()
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::BlogIndex => "/blog".to_string(),
            Route::BlogPost { slug } => post_path(slug),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::About => write!(f, "about"),
            Route::BlogIndex => write!(f, "blog"),
            Route::BlogPost { slug } => write!(f, "blog post `{}`", slug),
            Route::NotFound { path } => write!(f, "not found `{}`", path),
        }
    }
}

/// Paths of the statically known routes, for listings
pub const ROUTE_PATTERNS: &[(&str, &str)] = &[
    ("/", "home"),
    ("/about", "about"),
    ("/blog", "blog index"),
    ("/blog/:slug", "blog post"),
];
