//! Helper functions shared by pages, the router and the CLI

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
