//! Validate the site content

use anyhow::Result;

use crate::content::ContentRegistry;
use crate::Site;

/// Findings of a check run
#[derive(Debug, Default)]
pub struct Report {
    pub posts: usize,
    pub warnings: Vec<String>,
}

/// Build the registry and report anything that would misbehave at runtime
///
/// Registry construction already rejects duplicate or non URL-safe slugs and
/// unparseable dates; those come back as errors.
pub fn run(site: &Site) -> Result<()> {
    let registry = site.registry()?;
    let report = inspect(&registry);

    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    println!(
        "Checked {} posts: {} warnings",
        report.posts,
        report.warnings.len()
    );

    Ok(())
}

pub fn inspect(registry: &ContentRegistry) -> Report {
    let mut warnings = Vec::new();

    for post in registry.list_posts() {
        if !registry.has_body(&post.slug) {
            warnings.push(format!(
                "post `{}` has no body; its page will stay on the placeholder",
                post.slug
            ));
        }
        if post.description.trim().is_empty() {
            warnings.push(format!("post `{}` has an empty description", post.slug));
        }
    }

    for slug in registry.orphan_bodies() {
        warnings.push(format!(
            "body `{}` has no post metadata and will never be shown",
            slug
        ));
    }

    Report {
        posts: registry.list_posts().len(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{body, PostMeta};
    use crate::helpers::parse_iso_date;
    use std::fs;

    #[test]
    fn test_builtin_is_clean() {
        let report = inspect(&ContentRegistry::builtin().unwrap());
        assert_eq!(report.posts, 1);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_reports_missing_and_orphan_bodies() {
        let registry = ContentRegistry::builder()
            .post(PostMeta {
                slug: "bare".to_string(),
                title: "Bare".to_string(),
                date: parse_iso_date("2026-01-01").unwrap(),
                description: "something".to_string(),
                tags: vec![],
            })
            .body("ghost", body::embedded("boo"))
            .build()
            .unwrap();

        let report = inspect(&registry);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("`bare` has no body"));
        assert!(report.warnings[1].contains("`ghost`"));
    }

    #[test]
    fn test_orphan_file_in_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/draft.md"), "# draft").unwrap();

        let site = Site::new(dir.path()).unwrap();
        let report = inspect(&site.registry().unwrap());
        assert_eq!(
            report.warnings,
            vec!["body `draft` has no post metadata and will never be shown"]
        );
        assert!(run(&site).is_ok());
    }
}
