//! JSON configuration for the command-line tool.

pub mod render;

pub use render::{load_config, RenderOutputConfig, RenderToolConfig};
