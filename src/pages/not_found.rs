//! Page for paths that match no route

use super::eyebrow;
use crate::view::{el, link, text, Node};

pub fn view(path: &str) -> Node {
    el("main")
        .class("page-not-found")
        .child(eyebrow("// 404"))
        .child(el("h1").child(text("nothing here")))
        .child(el("p").child(text(format!("There is no page at {}.", path))))
        .child(link("/", "← home").class("back"))
        .into()
}
