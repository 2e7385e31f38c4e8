//! Error types

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Problems with the site definition itself, found while building the registry
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("duplicate post slug `{0}`")]
    DuplicateSlug(String),

    #[error("post slug `{0}` is not URL-safe (expected `{1}`)")]
    InvalidSlug(String, String),

    #[error("post `{slug}` has an invalid date `{date}` (expected YYYY-MM-DD)")]
    InvalidDate { slug: String, date: String },

    #[error("failed to read content directory {path:?}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Failure while resolving a post body
#[derive(Debug, Error)]
pub enum ContentError {
    /// The loader has nothing for this slug
    #[error("no content for `{0}`")]
    Missing(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no answer after {0:?}")]
    TimedOut(Duration),

    #[error("{0}")]
    Other(String),
}

/// Recovered faults, recorded by the shell as they happen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// Path matched no route; the not-found page was shown
    #[error("no route for `{0}`")]
    RouteNotFound(String),

    /// Slug had no metadata; redirected to the blog index
    #[error("no post `{0}`, redirected to the blog index")]
    PostNotFound(String),

    /// Slug had metadata but no body; the placeholder was kept
    #[error("post `{0}` has no body")]
    BodyNotFound(String),

    /// Body loader failed; the error was shown in the page
    #[error("body of `{slug}` failed to load: {message}")]
    TransientResolutionFailure { slug: String, message: String },
}
