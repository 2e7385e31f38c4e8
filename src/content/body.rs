//! Post bodies and their loaders
//!
//! A body is resolved on demand through a loader registered for its slug.
//! Loaders return the markdown source; the registry renders it.

use std::fmt;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::rc::Rc;

use crate::ContentError;

/// Future returned by a body loader
pub type BodyFuture = Pin<Box<dyn Future<Output = Result<String, ContentError>>>>;

/// Factory producing the markdown source of one post body
pub type BodyLoader = Rc<dyn Fn() -> BodyFuture>;

/// Rendered body of a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody {
    pub html: String,
}

/// Resolution state of a post body
#[derive(Debug)]
pub enum BodyState {
    Loading,
    Ready(PostBody),
    NotFound,
    Failed(ContentError),
}

impl BodyState {
    pub fn is_loading(&self) -> bool {
        matches!(self, BodyState::Loading)
    }
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyState::Loading => write!(f, "loading"),
            BodyState::Ready(_) => write!(f, "ready"),
            BodyState::NotFound => write!(f, "not found"),
            BodyState::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Loader for a body compiled into the binary
pub fn embedded(source: &'static str) -> BodyLoader {
    Rc::new(move || Box::pin(async move { Ok(source.to_string()) }))
}

/// Loader reading `path` each time the body is requested
///
/// A file that has disappeared since registration resolves to
/// [`ContentError::Missing`], other IO errors to [`ContentError::Io`].
pub fn file(slug: &str, path: PathBuf) -> BodyLoader {
    let slug = slug.to_string();
    Rc::new(move || {
        let slug = slug.clone();
        let path = path.clone();
        Box::pin(async move {
            tracing::debug!("Loading body for {} from {:?}", slug, path);
            match tokio::fs::read_to_string(&path).await {
                Ok(source) => Ok(source),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ContentError::Missing(slug)),
                Err(source) => Err(ContentError::Io { path, source }),
            }
        })
    })
}

/// Loader backed by an arbitrary async function
pub fn from_fn<F, Fut>(f: F) -> BodyLoader
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<String, ContentError>> + 'static,
{
    Rc::new(move || Box::pin(f()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_embedded_loader() {
        let loader = embedded("# hi");
        assert_eq!(loader().await.unwrap(), "# hi");
        // Loaders are factories and can be called again
        assert_eq!(loader().await.unwrap(), "# hi");
    }

    #[tokio::test]
    async fn test_file_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        fs::write(&path, "body").unwrap();

        let loader = file("post", path.clone());
        assert_eq!(loader().await.unwrap(), "body");

        fs::remove_file(&path).unwrap();
        assert!(matches!(loader().await, Err(ContentError::Missing(slug)) if slug == "post"));
    }

    #[tokio::test]
    async fn test_file_loader_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // Reading a directory as a file is an IO error, not a missing file
        let loader = file("post", dir.path().to_path_buf());
        assert!(matches!(loader().await, Err(ContentError::Io { .. })));
    }

    #[tokio::test]
    async fn test_from_fn_loader() {
        let loader = from_fn(|| async { Err(ContentError::Other("offline".to_string())) });
        let err = loader().await.unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }
}
