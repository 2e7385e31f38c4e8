//! Content registry - post metadata and on-demand bodies by slug

use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::body::{self, BodyLoader, BodyState, PostBody};
use super::posts::{BODIES, POSTS};
use super::{MarkdownRenderer, PostEntry, PostMeta};
use crate::config::SiteConfig;
use crate::{ContentError, SiteError};

/// Maps slugs to post metadata and body loaders
///
/// Metadata is fixed once built and kept in declaration order. The registry
/// is never mutated after construction, so pages share it through an `Rc`.
pub struct ContentRegistry {
    posts: IndexMap<String, PostMeta>,
    bodies: HashMap<String, BodyLoader>,
    renderer: MarkdownRenderer,
}

impl ContentRegistry {
    /// Start an empty registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with the posts and bodies compiled into the binary
    pub fn builtin() -> Result<Self, SiteError> {
        Self::builtin_builder().build()
    }

    /// Builtin posts plus bodies found in `content_dir`
    ///
    /// A `<slug>.md` file on disk takes precedence over the embedded body.
    pub fn load(config: &SiteConfig, content_dir: &Path) -> Result<Self, SiteError> {
        let mut builder = Self::builtin_builder().renderer(MarkdownRenderer::with_options(
            &config.highlight.theme,
            config.highlight.line_number,
        ));

        for (slug, path) in scan_content_dir(content_dir)? {
            builder = builder.body(&slug, body::file(&slug, path));
        }

        builder.build()
    }

    fn builtin_builder() -> RegistryBuilder {
        let builder = POSTS
            .iter()
            .fold(Self::builder(), |builder, entry| builder.entry(entry));

        BODIES.iter().fold(builder, |builder, &(slug, source)| {
            builder.body(slug, body::embedded(source))
        })
    }

    /// All posts in declaration order
    pub fn list_posts(&self) -> impl ExactSizeIterator<Item = &PostMeta> + '_ {
        self.posts.values()
    }

    /// Metadata for a slug, `None` when there is no such post
    pub fn get_post_meta(&self, slug: &str) -> Option<&PostMeta> {
        self.posts.get(slug)
    }

    /// Whether a body loader is registered for the slug
    pub fn has_body(&self, slug: &str) -> bool {
        self.bodies.contains_key(slug)
    }

    /// Resolve and render the body of a post
    ///
    /// Never resolves to [`BodyState::Loading`]. A slug without metadata, a
    /// slug without a loader and a loader reporting [`ContentError::Missing`]
    /// all resolve to [`BodyState::NotFound`].
    pub async fn get_post_body(&self, slug: &str) -> BodyState {
        if !self.posts.contains_key(slug) {
            return BodyState::NotFound;
        }
        let Some(loader) = self.bodies.get(slug) else {
            return BodyState::NotFound;
        };

        match loader().await {
            Ok(markdown) => BodyState::Ready(PostBody {
                html: self.renderer.render(&markdown),
            }),
            Err(ContentError::Missing(_)) => BodyState::NotFound,
            Err(e) => BodyState::Failed(e),
        }
    }

    /// Slugs that have a body but no metadata
    pub fn orphan_bodies(&self) -> Vec<&str> {
        let mut orphans: Vec<&str> = self
            .bodies
            .keys()
            .filter(|slug| !self.posts.contains_key(slug.as_str()))
            .map(String::as_str)
            .collect();
        orphans.sort_unstable();
        orphans
    }

    /// Every tag with the number of posts using it, most used first
    pub fn tags(&self) -> Vec<(&str, usize)> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for post in self.posts.values() {
            for tag in &post.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        let mut tags: Vec<_> = counts.into_iter().collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1));
        tags
    }
}

/// Builds a [`ContentRegistry`], validating slugs on the way
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<Result<PostMeta, SiteError>>,
    bodies: Vec<(String, BodyLoader)>,
    renderer: Option<MarkdownRenderer>,
}

impl RegistryBuilder {
    /// Add a post
    pub fn post(mut self, meta: PostMeta) -> Self {
        self.entries.push(Ok(meta));
        self
    }

    /// Add a post declared in source
    pub fn entry(mut self, entry: &PostEntry) -> Self {
        self.entries.push(PostMeta::try_from(entry));
        self
    }

    /// Register the body loader for a slug, replacing an earlier one
    pub fn body(mut self, slug: &str, loader: BodyLoader) -> Self {
        self.bodies.push((slug.to_string(), loader));
        self
    }

    pub fn renderer(mut self, renderer: MarkdownRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn build(self) -> Result<ContentRegistry, SiteError> {
        let mut posts = IndexMap::with_capacity(self.entries.len());
        for meta in self.entries {
            let meta = meta?;
            let expected = slug::slugify(&meta.slug);
            if expected != meta.slug {
                return Err(SiteError::InvalidSlug(meta.slug, expected));
            }
            if posts.contains_key(&meta.slug) {
                return Err(SiteError::DuplicateSlug(meta.slug));
            }
            posts.insert(meta.slug.clone(), meta);
        }

        let bodies: HashMap<String, BodyLoader> = self.bodies.into_iter().collect();

        let registry = ContentRegistry {
            posts,
            bodies,
            renderer: self.renderer.unwrap_or_default(),
        };

        for slug in registry.orphan_bodies() {
            tracing::warn!("Body for `{}` has no post metadata and will never be shown", slug);
        }

        tracing::debug!(
            "Registry built with {} posts and {} bodies",
            registry.posts.len(),
            registry.bodies.len()
        );

        Ok(registry)
    }
}

/// Markdown files directly inside the content directory, as `(slug, path)`
pub fn scan_content_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>, SiteError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|source| SiteError::ContentDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_markdown_file(path) {
            if let Some(slug) = path.file_stem().and_then(|s| s.to_str()) {
                found.push((slug.to_string(), path.to_path_buf()));
            }
        }
    }
    found.sort();

    Ok(found)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::parse_iso_date;
    use std::fs;

    fn meta(slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            date: parse_iso_date("2026-01-01").unwrap(),
            description: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let registry = ContentRegistry::builtin().unwrap();
        for post in registry.list_posts() {
            let found = registry.get_post_meta(&post.slug).unwrap();
            assert_eq!(found.slug, post.slug);
        }
        assert!(registry.get_post_meta("does-not-exist").is_none());
        assert!(registry.get_post_meta("").is_none());
    }

    #[test]
    fn test_builtin_scenario_post() {
        let registry = ContentRegistry::builtin().unwrap();
        let posts: Vec<_> = registry.list_posts().collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "building-this-site-with-claude");
        assert_eq!(posts[0].title, "More coming soon");
        assert_eq!(
            posts[0].tags,
            vec!["software", "ai", "animation", "full-stack"]
        );
        assert_eq!(posts[0].display_date(), "February 18, 2026");
        assert!(registry.has_body("building-this-site-with-claude"));
    }

    #[test]
    fn test_list_posts_is_stable() {
        let registry = ContentRegistry::builder()
            .post(meta("c"))
            .post(meta("a"))
            .post(meta("b"))
            .build()
            .unwrap();
        let first: Vec<_> = registry.list_posts().map(|p| p.slug.clone()).collect();
        let second: Vec<_> = registry.list_posts().map(|p| p.slug.clone()).collect();
        assert_eq!(first, vec!["c", "a", "b"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = ContentRegistry::builder()
            .post(meta("a"))
            .post(meta("a"))
            .build();
        assert!(matches!(result, Err(SiteError::DuplicateSlug(s)) if s == "a"));
    }

    #[test]
    fn test_unsafe_slug_rejected() {
        let result = ContentRegistry::builder().post(meta("Hello World")).build();
        assert!(matches!(result, Err(SiteError::InvalidSlug(_, expected)) if expected == "hello-world"));
    }

    #[test]
    fn test_orphan_bodies() {
        let registry = ContentRegistry::builder()
            .post(meta("a"))
            .body("a", body::embedded("a"))
            .body("ghost", body::embedded("boo"))
            .build()
            .unwrap();
        assert_eq!(registry.orphan_bodies(), vec!["ghost"]);
    }

    #[test]
    fn test_tags_counted() {
        let mut a = meta("a");
        a.tags = vec!["rust".into(), "web".into()];
        let mut b = meta("b");
        b.tags = vec!["rust".into()];
        let registry = ContentRegistry::builder().post(a).post(b).build().unwrap();
        assert_eq!(registry.tags(), vec![("rust", 2), ("web", 1)]);
    }

    #[tokio::test]
    async fn test_body_resolution() {
        let registry = ContentRegistry::builder()
            .post(meta("ready"))
            .post(meta("no-body"))
            .post(meta("broken"))
            .body("ready", body::embedded("Hello *there*"))
            .body(
                "broken",
                body::from_fn(|| async { Err(ContentError::Other("disk on fire".into())) }),
            )
            .body("orphan", body::embedded("never shown"))
            .build()
            .unwrap();

        match registry.get_post_body("ready").await {
            BodyState::Ready(body) => assert!(body.html.contains("<em>there</em>")),
            other => panic!("unexpected {}", other),
        }
        assert!(matches!(
            registry.get_post_body("no-body").await,
            BodyState::NotFound
        ));
        assert!(matches!(
            registry.get_post_body("broken").await,
            BodyState::Failed(_)
        ));
        // Bodies without metadata are never resolved
        assert!(matches!(
            registry.get_post_body("orphan").await,
            BodyState::NotFound
        ));
    }

    #[tokio::test]
    async fn test_load_prefers_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("building-this-site-with-claude.md"),
            "Edited on disk.",
        )
        .unwrap();
        fs::write(content.join("draft.md"), "No metadata yet.").unwrap();
        fs::write(content.join("notes.txt"), "ignored").unwrap();

        let registry = ContentRegistry::load(&SiteConfig::default(), &content).unwrap();
        assert_eq!(registry.orphan_bodies(), vec!["draft"]);

        match registry.get_post_body("building-this-site-with-claude").await {
            BodyState::Ready(body) => assert!(body.html.contains("Edited on disk.")),
            other => panic!("unexpected {}", other),
        }
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_content_dir(&dir.path().join("nope")).unwrap().is_empty());
    }
}
