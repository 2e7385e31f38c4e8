//! kuyk-site: a personal site with client-side routing, animated page
//! transitions and a small blog
//!
//! The site runs headless: a [`shell::Shell`] owns the router, the nav bar
//! and the animated page region, and the CLI drives it from the terminal.

pub mod commands;
pub mod config;
pub mod content;
mod error;
pub mod helpers;
pub mod nav;
pub mod pages;
pub mod router;
pub mod shell;
pub mod transition;
pub mod view;

pub use error::{ContentError, Fault, SiteError};

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use content::ContentRegistry;
use router::MemoryHistory;
use shell::Shell;

/// The site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding `<slug>.md` post bodies
    pub content_dir: PathBuf,
}

impl Site {
    /// Open the site in a directory, reading `_config.yml` if there is one
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Build the content registry: builtin posts plus bodies on disk
    pub fn registry(&self) -> Result<ContentRegistry> {
        Ok(ContentRegistry::load(&self.config, &self.content_dir)?)
    }

    /// A shell whose history starts at `path`
    pub fn shell(&self, path: &str) -> Result<Shell> {
        let registry = self.registry()?;
        Ok(Shell::new(
            Rc::new(self.config.clone()),
            Rc::new(registry),
            Box::new(MemoryHistory::new(path)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_site_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "kuyk.dev");
        assert_eq!(site.content_dir, dir.path().join("content"));
    }

    #[test]
    fn test_site_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "title: example.dev\ncontent_dir: posts\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "example.dev");
        assert_eq!(site.content_dir, dir.path().join("posts"));

        let shell = site.shell("/about").unwrap();
        assert_eq!(shell.location(), "/about");
    }

    #[test]
    fn test_registry_reads_configured_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "content_dir: posts\n").unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/draft.md"), "# draft").unwrap();

        let registry = Site::new(dir.path()).unwrap().registry().unwrap();
        assert_eq!(registry.orphan_bodies(), vec!["draft"]);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "transition: [1, 2").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
