//! Home page

use std::time::Duration;

use super::{eyebrow, tag_list, PageContext};
use crate::config::SiteConfig;
use crate::shell::PointerSubscription;
use crate::transition::Spring;
use crate::view::{el, text, Node};

/// Home page with a glow that follows the pointer
///
/// The pointer subscription lives exactly as long as the page.
#[derive(Debug)]
pub struct HomePage {
    pointer: PointerSubscription,
    x: Spring,
    y: Spring,
    glow_offset: f64,
}

impl HomePage {
    pub fn mount(ctx: &PageContext<'_>) -> Self {
        let config = &ctx.config.pointer;
        Self {
            pointer: ctx.pointer.subscribe(),
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
            glow_offset: config.glow_offset,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Some(position) = self.pointer.latest() {
            self.x.set_target(position.x);
            self.y.set_target(position.y);
        }
        self.x.step(dt);
        self.y.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        !self.x.is_resting() || !self.y.is_resting()
    }

    /// Top-left corner of the glow
    pub fn glow_position(&self) -> (f64, f64) {
        (
            self.x.value() - self.glow_offset,
            self.y.value() - self.glow_offset,
        )
    }

    pub fn view(&self, config: &SiteConfig) -> Node {
        let (gx, gy) = self.glow_position();

        let glow = el("div")
            .class("glow")
            .attr("aria-hidden", "true")
            .attr("style", format!("transform:translate({:.1}px,{:.1}px)", gx, gy));

        let content = el("main")
            .class("page-home")
            .child(eyebrow("// hello world"))
            .child(el("h1").child(text(config.title.as_str())))
            .child(tag_list(&config.home_tags))
            .child(
                el("div").class("links").child(
                    el("a")
                        .class("button")
                        .attr("href", config.github.as_str())
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .child(text("github")),
                ),
            );

        Node::Fragment(vec![glow.into(), content.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;
    use crate::shell::{PointerBus, PointerPosition};
    use std::rc::Rc;

    #[test]
    fn test_glow_follows_pointer() {
        let config = SiteConfig::default();
        let registry = Rc::new(ContentRegistry::builtin().unwrap());
        let bus = PointerBus::new();
        let ctx = PageContext {
            config: &config,
            registry: &registry,
            pointer: &bus,
        };

        let mut home = HomePage::mount(&ctx);
        assert_eq!(home.glow_position(), (-350.0, -350.0));
        assert!(!home.is_animating());

        bus.publish(PointerPosition { x: 400.0, y: 200.0 });
        home.tick(Duration::from_millis(16));
        assert!(home.is_animating());

        for _ in 0..600 {
            home.tick(Duration::from_millis(16));
        }
        assert!(!home.is_animating());
        assert_eq!(home.glow_position(), (50.0, -150.0));
    }

    #[test]
    fn test_subscription_released_on_drop() {
        let config = SiteConfig::default();
        let registry = Rc::new(ContentRegistry::builtin().unwrap());
        let bus = PointerBus::new();
        let ctx = PageContext {
            config: &config,
            registry: &registry,
            pointer: &bus,
        };

        let home = HomePage::mount(&ctx);
        assert_eq!(bus.listener_count(), 1);
        drop(home);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_view() {
        let config = SiteConfig::default();
        let registry = Rc::new(ContentRegistry::builtin().unwrap());
        let bus = PointerBus::new();
        let ctx = PageContext {
            config: &config,
            registry: &registry,
            pointer: &bus,
        };

        let view = HomePage::mount(&ctx).view(&config);
        let text = view.text_content();
        assert!(text.contains("// hello world"));
        assert!(text.contains("kuyk.dev"));
        let tags: Vec<String> = view
            .find_by_class("tag")
            .iter()
            .map(|e| Node::Element((*e).clone()).text_content())
            .collect();
        assert_eq!(tags, config.home_tags);
        assert_eq!(
            view.links(),
            vec![("https://github.com/bkuyk".to_string(), "github".to_string())]
        );
    }
}
