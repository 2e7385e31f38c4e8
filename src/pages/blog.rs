//! Blog index

use super::{eyebrow, tag_list};
use crate::content::{ContentRegistry, PostMeta};
use crate::helpers::{iso_date, post_path};
use crate::view::{el, text, Element, Node};

pub fn view(registry: &ContentRegistry) -> Node {
    el("main")
        .class("page-blog")
        .child(eyebrow("// writing"))
        .child(el("h1").child(text("blog")))
        .child(el("div").class("post-list").children(registry.list_posts().map(entry)))
        .into()
}

/// `<time>` plus tag chips
pub(super) fn post_meta_line(post: &PostMeta) -> Element {
    el("div")
        .class("post-meta")
        .child(
            el("time")
                .attr("datetime", iso_date(&post.date))
                .child(text(post.display_date())),
        )
        .child(tag_list(&post.tags))
}

fn entry(post: &PostMeta) -> Element {
    el("a")
        .class("post-link")
        .attr("href", post_path(&post.slug))
        .child(
            el("article")
                .class("post-entry")
                .child(post_meta_line(post))
                .child(el("h2").child(text(post.title.as_str())))
                .child(el("p").child(text(post.description.as_str()))),
        )
}
