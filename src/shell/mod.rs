//! Application shell
//!
//! The shell owns the router, the navigation bar and the animated page
//! region. It is a plain state machine: feed it [`Event`]s, render it, and
//! carry out the [`Command`]s it asks for (body loads). The async side of
//! that lives in [`Runtime`].

mod pointer;
mod runtime;

pub use pointer::{PointerBus, PointerPosition, PointerSubscription};
pub use runtime::Runtime;

use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::content::{BodyState, ContentRegistry};
use crate::nav::NavBar;
use crate::pages::{resolve_post, Page, PageContext, PostResolution};
use crate::router::{History, Route, Router};
use crate::transition::{Change, InstanceId, Phase, Presence, TransitionSpec};
use crate::view::{el, Node};
use crate::Fault;

/// Input to the shell
#[derive(Debug)]
pub enum Event {
    /// Follow a link (push)
    Navigate(String),
    /// Go somewhere without adding a history entry
    Replace(String),
    Back,
    Forward,
    /// One animation frame has elapsed
    Frame(Duration),
    /// A body load finished for a page instance
    BodyResolved {
        instance: InstanceId,
        state: BodyState,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
}

/// Work the shell needs done outside of itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadBody { instance: InstanceId, slug: String },
    /// The instance is gone; its load result is no longer wanted
    CancelBody { instance: InstanceId },
}

/// Top-level view: persistent nav bar plus the animated page region
pub struct Shell {
    config: Rc<SiteConfig>,
    registry: Rc<ContentRegistry>,
    router: Router,
    presence: Presence,
    nav: NavBar,
    pointer: PointerBus,
    page: Option<(InstanceId, Page)>,
    commands: Vec<Command>,
    faults: Vec<Fault>,
}

impl Shell {
    /// Build the shell and mount the page for the history's current entry
    pub fn new(
        config: Rc<SiteConfig>,
        registry: Rc<ContentRegistry>,
        history: Box<dyn History>,
    ) -> Self {
        let presence = Presence::new(
            TransitionSpec::from_config(&config.transition),
            config.interruption,
        );
        let nav = NavBar::new(&config.title, &config.nav);

        let mut shell = Self {
            config,
            registry,
            router: Router::new(history),
            presence,
            nav,
            pointer: PointerBus::new(),
            page: None,
            commands: Vec::new(),
            faults: Vec::new(),
        };
        shell.location_changed();
        shell
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Navigate(path) => {
                if self.router.push(&path) {
                    self.location_changed();
                } else {
                    debug!("already at {}", self.location());
                }
            }
            Event::Replace(path) => {
                self.router.replace(&path);
                self.location_changed();
            }
            Event::Back => {
                if self.router.back() {
                    self.location_changed();
                }
            }
            Event::Forward => {
                if self.router.forward() {
                    self.location_changed();
                }
            }
            Event::Frame(dt) => {
                self.nav.tick(dt);
                if let Some((_, page)) = self.page.as_mut() {
                    page.tick(dt);
                }
                let changes = self.presence.tick(dt);
                self.apply(changes);
            }
            Event::BodyResolved { instance, state } => match self.page.as_mut() {
                Some((id, page)) if *id == instance => {
                    debug!("body for instance {} resolved: {}", instance, state);
                    if let Some(fault) = page.resolve_body(state) {
                        self.record(fault);
                    }
                }
                _ => debug!("discarding body for unmounted instance {}", instance),
            },
            Event::PointerMove { x, y } => self.pointer.publish(PointerPosition { x, y }),
        }
    }

    /// Commands issued since the last call
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Current path
    pub fn location(&self) -> &str {
        self.router.location()
    }

    pub fn route(&self) -> Route {
        self.router.route()
    }

    /// History entries, oldest first
    pub fn history(&self) -> Vec<String> {
        self.router.entries()
    }

    pub fn registry(&self) -> &Rc<ContentRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Faults recorded so far, oldest first
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    /// Key (path) of the page instance in the render tree
    pub fn current_key(&self) -> Option<&str> {
        self.presence.current().map(|i| i.key.as_str())
    }

    /// Transition phase of the page instance in the render tree
    pub fn phase(&self) -> Option<Phase> {
        self.presence.current().map(|i| i.transition.phase())
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref().map(|(_, page)| page)
    }

    /// Whether frames still change anything
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
            || self.nav.is_animating()
            || self.page.as_ref().map(|(_, p)| p.is_animating()).unwrap_or(false)
    }

    /// Whether the mounted page is still waiting for its body
    pub fn is_loading(&self) -> bool {
        self.page
            .as_ref()
            .map(|(_, p)| p.pending_body().is_some())
            .unwrap_or(false)
    }

    /// Nothing is animating and nothing is loading
    pub fn is_idle(&self) -> bool {
        !self.is_animating() && !self.is_loading()
    }

    /// Document title for the mounted page
    pub fn title(&self) -> String {
        self.page()
            .map(|p| p.title(&self.config))
            .unwrap_or_else(|| self.config.title.clone())
    }

    pub fn render(&self) -> Node {
        let ctx = self.context();
        let stage = el("div").class("stage");
        let stage = match (self.presence.current(), self.page.as_ref()) {
            (Some(instance), Some((id, page))) if instance.id == *id => {
                stage.child(instance.transition.wrap(page.view(&ctx)))
            }
            _ => stage,
        };

        Node::Fragment(vec![self.nav.view(self.location()), stage.into()])
    }

    fn context(&self) -> PageContext<'_> {
        PageContext {
            config: &self.config,
            registry: &self.registry,
            pointer: &self.pointer,
        }
    }

    /// React to the history's current entry
    fn location_changed(&mut self) {
        if let Route::BlogPost { slug } = self.router.route() {
            if let PostResolution::Redirect(to) = resolve_post(&slug, &self.registry) {
                self.record(Fault::PostNotFound(slug));
                self.router.replace(to);
            }
        }

        let key = self.router.location().to_string();
        info!("navigated to {}", key);
        let changes = self.presence.show(&key);
        self.apply(changes);
    }

    fn apply(&mut self, changes: Vec<Change>) {
        for change in changes {
            match change {
                Change::Mount { id, key } => self.mount(id, &key),
                Change::Unmount { id } => self.unmount(id),
                Change::Settled { id } => debug!("instance {} settled", id),
                Change::Exiting { id } => debug!("instance {} exiting", id),
            }
        }
    }

    fn mount(&mut self, id: InstanceId, key: &str) {
        let route = Route::recognize(key);
        if let Route::NotFound { path } = &route {
            self.record(Fault::RouteNotFound(path.clone()));
        }

        let page = Page::mount(route, &self.context());
        if let Some(slug) = page.pending_body() {
            self.commands.push(Command::LoadBody {
                instance: id,
                slug: slug.to_string(),
            });
        }
        debug!("instance {} mounted for {}", id, key);
        self.page = Some((id, page));
    }

    fn unmount(&mut self, id: InstanceId) {
        match self.page.take() {
            Some((current, page)) if current == id => {
                if page.pending_body().is_some() {
                    self.commands.push(Command::CancelBody { instance: id });
                }
                debug!("instance {} unmounted", id);
            }
            other => self.page = other,
        }
    }

    fn record(&mut self, fault: Fault) {
        warn!("{}", fault);
        self.faults.push(fault);
    }
}
