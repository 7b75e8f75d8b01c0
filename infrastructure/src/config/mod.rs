//! Configuration file loading for studyhall
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./studyhall.toml` or `./.studyhall.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/studyhall/config.toml`
//! 4. Fallback: `~/.config/studyhall/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileOllamaConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
