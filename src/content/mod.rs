//! Content module - post metadata, bodies and the registry resolving them

pub mod body;
mod markdown;
mod post;
mod posts;
pub mod registry;

pub use body::{BodyLoader, BodyState, PostBody};
pub use markdown::MarkdownRenderer;
pub use post::{PostEntry, PostMeta};
pub use registry::{ContentRegistry, RegistryBuilder};
