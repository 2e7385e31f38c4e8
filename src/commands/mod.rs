//! CLI commands

pub mod browse;
pub mod check;
pub mod list;
pub mod render;
