//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::ContentRegistry;
use crate::helpers::{iso_date, post_path};
use crate::router::ROUTE_PATTERNS;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    let registry = site.registry()?;
    print!("{}", format(&registry, content_type, json)?);
    Ok(())
}

/// Listing text for one content type
pub fn format(registry: &ContentRegistry, content_type: &str, json: bool) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            if json {
                let posts: Vec<_> = registry.list_posts().collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&posts)?)?;
            } else {
                writeln!(out, "Posts ({}):", registry.list_posts().len())?;
                for post in registry.list_posts() {
                    let body = if registry.has_body(&post.slug) {
                        ""
                    } else {
                        " (no body)"
                    };
                    writeln!(
                        out,
                        "  {} - {} [{}]{}",
                        iso_date(&post.date),
                        post.title,
                        post.slug,
                        body
                    )?;
                }
            }
        }
        "route" | "routes" => {
            writeln!(out, "Routes:")?;
            for (pattern, name) in ROUTE_PATTERNS {
                writeln!(out, "  {:<16} {}", pattern, name)?;
            }
            for post in registry.list_posts() {
                writeln!(out, "  {}", post_path(&post.slug))?;
            }
        }
        "tag" | "tags" => {
            let tags = registry.tags();
            writeln!(out, "Tags ({}):", tags.len())?;
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, routes, tags",
                content_type
            );
        }
    }

    Ok(out)
}
