//! Posts shipped with the site

use super::PostEntry;

/// All posts, newest first. Order here is the order on the blog index.
pub const POSTS: &[PostEntry] = &[PostEntry {
    slug: "building-this-site-with-claude",
    title: "More coming soon",
    date: "2026-02-18",
    description: "Writing on software engineering, AI, full-stack development, and animation experiments. Stay tuned.",
    tags: &["software", "ai", "animation", "full-stack"],
}];

/// Markdown bodies compiled into the binary, keyed by slug
pub const BODIES: &[(&str, &str)] = &[(
    "building-this-site-with-claude",
    include_str!("../../content/building-this-site-with-claude.md"),
)];
