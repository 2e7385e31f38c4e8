//! Page components
//!
//! A page is built when the shell mounts a route and dropped when its
//! transition has finished exiting. Pages only read shared state; anything
//! asynchronous (post bodies) is requested by the shell and fed back through
//! [`Page::resolve_body`].

mod about;
mod blog;
mod home;
mod not_found;
mod post;

pub use home::HomePage;
pub use post::{resolve_post, PostPage, PostResolution};

use std::rc::Rc;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::{BodyState, ContentRegistry};
use crate::router::Route;
use crate::shell::PointerBus;
use crate::view::{el, text, Element, Node};
use crate::Fault;

/// Shared state pages are built from
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub registry: &'a Rc<ContentRegistry>,
    pub pointer: &'a PointerBus,
}

/// A mounted page
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    About,
    BlogIndex,
    BlogPost(PostPage),
    NotFound { path: String },
}

impl Page {
    /// Build the page for a route
    ///
    /// A post route whose slug has no metadata falls back to the not-found
    /// page; the shell redirects such routes before they get here.
    pub fn mount(route: Route, ctx: &PageContext<'_>) -> Page {
        match route {
            Route::Home => Page::Home(HomePage::mount(ctx)),
            Route::About => Page::About,
            Route::BlogIndex => Page::BlogIndex,
            Route::BlogPost { slug } => match resolve_post(&slug, ctx.registry) {
                PostResolution::Render(meta) => Page::BlogPost(PostPage::new(meta)),
                PostResolution::Redirect(_) => Page::NotFound {
                    path: route_path(&slug),
                },
            },
            Route::NotFound { path } => Page::NotFound { path },
        }
    }

    /// Slug of a body this page is waiting for
    pub fn pending_body(&self) -> Option<&str> {
        match self {
            Page::BlogPost(page) if page.body().is_loading() => Some(page.slug()),
            _ => None,
        }
    }

    /// Deliver a resolved body; returns the fault to record, if any
    pub fn resolve_body(&mut self, state: BodyState) -> Option<Fault> {
        match self {
            Page::BlogPost(page) => page.resolve(state),
            _ => None,
        }
    }

    /// Advance page-local animation
    pub fn tick(&mut self, dt: Duration) {
        if let Page::Home(home) = self {
            home.tick(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Page::Home(home) => home.is_animating(),
            _ => false,
        }
    }

    pub fn view(&self, ctx: &PageContext<'_>) -> Node {
        match self {
            Page::Home(home) => home.view(ctx.config),
            Page::About => about::view(ctx.config),
            Page::BlogIndex => blog::view(ctx.registry),
            Page::BlogPost(page) => page.view(),
            Page::NotFound { path } => not_found::view(path),
        }
    }

    /// Title for the document `<title>`
    pub fn title(&self, config: &SiteConfig) -> String {
        match self {
            Page::Home(_) => config.title.clone(),
            Page::About => format!("about | {}", config.title),
            Page::BlogIndex => format!("blog | {}", config.title),
            Page::BlogPost(page) => format!("{} | {}", page.meta().title, config.title),
            Page::NotFound { .. } => format!("not found | {}", config.title),
        }
    }
}

fn route_path(slug: &str) -> String {
    Route::BlogPost {
        slug: slug.to_string(),
    }
    .path()
}

/// Small mono label above a heading ("// about")
fn eyebrow(label: &str) -> Element {
    el("span").class("eyebrow").child(text(label))
}

/// A run of tag chips in the given order
fn tag_list(tags: &[String]) -> Element {
    el("div")
        .class("tags")
        .children(tags.iter().map(|t| el("span").class("tag").child(text(t.as_str()))))
}
