//! About page

use super::eyebrow;
use crate::config::SiteConfig;
use crate::view::{el, text, Node};

pub fn view(config: &SiteConfig) -> Node {
    let sections = config.about.iter().map(|section| {
        el("section")
            .class("about-section")
            .child(el("span").class("label").child(text(section.label.as_str())))
            .child(el("p").child(text(section.content.as_str())))
    });

    el("main")
        .class("page-about")
        .child(eyebrow("// about"))
        .child(el("h1").child(text("a bit about me")))
        .child(el("div").class("sections").children(sections))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AboutSection;

    #[test]
    fn test_sections_in_order() {
        let config = SiteConfig {
            about: vec![
                AboutSection::new("first", "one"),
                AboutSection::new("second", "two"),
            ],
            ..SiteConfig::default()
        };
        let view = view(&config);
        assert_eq!(view.find_by_class("about-section").len(), 2);
        assert_eq!(view.to_text(), "// about\na bit about me\nfirst\none\nsecond\ntwo");
    }
}
