//! Configuration module

mod site;

pub use site::AboutSection;
pub use site::ActiveMatch;
pub use site::HighlightConfig;
pub use site::InterruptionPolicy;
pub use site::NavConfig;
pub use site::PointerConfig;
pub use site::SiteConfig;
pub use site::TransitionConfig;
