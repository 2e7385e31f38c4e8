//! Navigation bar

use std::time::Duration;

use crate::config::{ActiveMatch, NavConfig};
use crate::transition::{CubicBezier, Tween, Visual};
use crate::view::{el, link, Node};

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

/// Links in display order
pub const LINKS: &[NavLink] = &[
    NavLink { label: "home", to: "/" },
    NavLink { label: "blog", to: "/blog" },
    NavLink { label: "about", to: "/about" },
];

/// Whether the link to `to` is active at `current`
///
/// `/` is only ever active on `/` itself, in both modes.
pub fn is_active(to: &str, current: &str, mode: ActiveMatch) -> bool {
    if to == current {
        return true;
    }
    match mode {
        ActiveMatch::Exact => false,
        ActiveMatch::Prefix => {
            to != "/"
                && current
                    .strip_prefix(to)
                    .map(|rest| rest.starts_with('/'))
                    .unwrap_or(false)
        }
    }
}

/// Persistent navigation bar with a one-time entrance animation
#[derive(Debug, Clone)]
pub struct NavBar {
    brand: String,
    mode: ActiveMatch,
    entrance: Tween,
}

impl NavBar {
    pub fn new(brand: &str, config: &NavConfig) -> Self {
        Self {
            brand: brand.to_string(),
            mode: config.active_match,
            entrance: Tween::new(
                Visual::new(0.0, -16.0),
                Visual::new(1.0, 0.0),
                Duration::from_millis(config.entrance_ms),
                CubicBezier::EASE_OUT,
            ),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.entrance.advance(dt);
    }

    pub fn is_animating(&self) -> bool {
        !self.entrance.is_finished()
    }

    /// Label of the active link at `current`, if any
    pub fn active(&self, current: &str) -> Option<&'static str> {
        LINKS
            .iter()
            .find(|l| is_active(l.to, current, self.mode))
            .map(|l| l.label)
    }

    pub fn view(&self, current: &str) -> Node {
        let links = LINKS.iter().map(|l| {
            if is_active(l.to, current, self.mode) {
                link(l.to, l.label)
                    .class("nav-link active")
                    .attr("aria-current", "page")
            } else {
                link(l.to, l.label).class("nav-link")
            }
        });

        el("header")
            .class("site-nav")
            .attr("style", self.entrance.value().style())
            .child(link("/", self.brand.as_str()).class("brand"))
            .child(el("nav").children(links))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(mode: ActiveMatch) -> NavBar {
        NavBar::new(
            "kuyk.dev",
            &NavConfig {
                active_match: mode,
                ..NavConfig::default()
            },
        )
    }

    #[test]
    fn test_exact_matching() {
        let nav = nav(ActiveMatch::Exact);
        assert_eq!(nav.active("/"), Some("home"));
        assert_eq!(nav.active("/blog"), Some("blog"));
        assert_eq!(nav.active("/about"), Some("about"));
        assert_eq!(nav.active("/blog/some-post"), None);
        assert_eq!(nav.active("/nowhere"), None);
    }

    #[test]
    fn test_prefix_matching() {
        let nav = nav(ActiveMatch::Prefix);
        assert_eq!(nav.active("/blog/some-post"), Some("blog"));
        assert_eq!(nav.active("/about"), Some("about"));
        assert!(!is_active("/blog", "/blogroll", ActiveMatch::Prefix));
        assert!(!is_active("/", "/about", ActiveMatch::Prefix));
    }

    #[test]
    fn test_view_marks_exactly_one_link() {
        let view = nav(ActiveMatch::Exact).view("/blog");
        let active = view.find_by_class("active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].get_attr("href"), Some("/blog"));
        assert_eq!(view.find_by_class("nav-link").len(), 3);

        let brand = view.find_by_class("brand");
        assert_eq!(brand[0].get_attr("href"), Some("/"));
        assert_eq!(view.links()[0].1, "kuyk.dev");
    }

    #[test]
    fn test_entrance_runs_once() {
        let mut nav = nav(ActiveMatch::Exact);
        assert!(nav.is_animating());
        for _ in 0..40 {
            nav.tick(Duration::from_millis(16));
        }
        assert!(!nav.is_animating());
        let header = nav.view("/");
        assert_eq!(
            header.elements()[0].get_attr("style"),
            Some("opacity:1.000;transform:translateY(0.00px)")
        );
    }
}
