//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub github: String,

    // Pages
    pub home_tags: Vec<String>,
    pub about: Vec<AboutSection>,

    // Directory
    pub content_dir: String,

    // Rendering
    pub frame_interval_ms: u64,
    /// How long a post body may take to resolve before the page gives up
    pub body_timeout_ms: u64,
    pub interruption: InterruptionPolicy,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub pointer: PointerConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "kuyk.dev".to_string(),
            author: "Ben Kuyk".to_string(),
            github: "https://github.com/bkuyk".to_string(),

            home_tags: ["react", "typescript", "design systems", "animation", "dx"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            about: vec![
                AboutSection::new(
                    "background",
                    "Software engineer with a focus on frontend and product engineering.",
                ),
                AboutSection::new(
                    "this site",
                    "Built in Rust: a small router, an explicit transition state machine and markdown posts loaded on demand.",
                ),
            ],

            content_dir: "content".to_string(),

            frame_interval_ms: 16,
            body_timeout_ms: 10_000,
            interruption: InterruptionPolicy::default(),
            transition: TransitionConfig::default(),
            nav: NavConfig::default(),
            pointer: PointerConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Time between two animation frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn body_timeout(&self) -> Duration {
        Duration::from_millis(self.body_timeout_ms)
    }
}

/// One labelled paragraph on the about page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutSection {
    pub label: String,
    pub content: String,
}

impl AboutSection {
    pub fn new(label: &str, content: &str) -> Self {
        Self {
            label: label.to_string(),
            content: content.to_string(),
        }
    }
}

/// What happens to an exit animation that is still running when another
/// navigation arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterruptionPolicy {
    /// Drop the outgoing page at once and mount the latest target
    #[default]
    CancelAndSwitch,
    /// Let the exit finish, then mount only the latest target
    FinishThenSwitch,
}

/// Page transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    /// Cubic-bezier control points (x1, y1, x2, y2)
    pub easing: [f64; 4],
    /// Vertical offset a page enters from, in px
    pub enter_offset: f64,
    /// Vertical offset a page exits to, in px
    pub exit_offset: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            easing: [0.25, 0.1, 0.25, 1.0],
            enter_offset: 24.0,
            exit_offset: -16.0,
        }
    }
}

/// Which nav links count as active for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveMatch {
    #[default]
    Exact,
    /// `/blog` is also active on `/blog/<slug>`
    Prefix,
}

/// Navigation bar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub entrance_ms: u64,
    pub active_match: ActiveMatch,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            entrance_ms: 500,
            active_match: ActiveMatch::Exact,
        }
    }
}

/// Spring that makes the home page glow follow the pointer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Glow is drawn this many px up and left of the sprung position
    pub glow_offset: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            stiffness: 60.0,
            damping: 20.0,
            mass: 1.0,
            glow_offset: 350.0,
        }
    }
}

/// Code highlighting inside post bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
