//! Blog post detail

use super::blog::post_meta_line;
use crate::content::{BodyState, ContentRegistry, PostMeta};
use crate::view::{el, link, text, Node};
use crate::Fault;

/// Where the index lives; unknown slugs are sent here
pub const BLOG_INDEX: &str = "/blog";

/// Outcome of looking up a post route
#[derive(Debug, Clone, PartialEq)]
pub enum PostResolution {
    Render(PostMeta),
    /// No such post; replace the current history entry with this path
    Redirect(&'static str),
}

pub fn resolve_post(slug: &str, registry: &ContentRegistry) -> PostResolution {
    match registry.get_post_meta(slug) {
        Some(meta) => PostResolution::Render(meta.clone()),
        None => PostResolution::Redirect(BLOG_INDEX),
    }
}

/// A post page; metadata renders at once, the body when it resolves
#[derive(Debug)]
pub struct PostPage {
    meta: PostMeta,
    body: BodyState,
}

impl PostPage {
    pub fn new(meta: PostMeta) -> Self {
        Self {
            meta,
            body: BodyState::Loading,
        }
    }

    pub fn slug(&self) -> &str {
        &self.meta.slug
    }

    pub fn meta(&self) -> &PostMeta {
        &self.meta
    }

    pub fn body(&self) -> &BodyState {
        &self.body
    }

    /// Take the resolved body; only the first resolution counts
    pub fn resolve(&mut self, state: BodyState) -> Option<Fault> {
        if !self.body.is_loading() {
            tracing::debug!("body for {} already resolved, ignoring", self.meta.slug);
            return None;
        }

        let fault = match &state {
            BodyState::Loading | BodyState::Ready(_) => None,
            BodyState::NotFound => Some(Fault::BodyNotFound(self.meta.slug.clone())),
            BodyState::Failed(e) => Some(Fault::TransientResolutionFailure {
                slug: self.meta.slug.clone(),
                message: e.to_string(),
            }),
        };
        self.body = state;
        fault
    }

    pub fn view(&self) -> Node {
        el("main")
            .class("page-post")
            .child(link(BLOG_INDEX, "← writing").class("back"))
            .child(post_meta_line(&self.meta))
            .child(el("h1").child(text(self.meta.title.as_str())))
            .child(el("p").class("description").child(text(self.meta.description.as_str())))
            .child(self.body_view())
            .into()
    }

    fn body_view(&self) -> Node {
        let body = el("div").class("post-body");
        match &self.body {
            BodyState::Loading => body.attr("aria-busy", "true").into(),
            BodyState::NotFound => body.into(),
            BodyState::Ready(b) => body.child(Node::Raw(b.html.clone())).into(),
            BodyState::Failed(e) => body
                .child(
                    el("p")
                        .class("post-body-error")
                        .attr("role", "alert")
                        .child(text(format!("Couldn't load this post: {}", e))),
                )
                .into(),
        }
    }
}
