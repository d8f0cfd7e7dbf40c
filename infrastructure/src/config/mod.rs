//! Configuration file loading for podlens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `PODLENS_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./podlens.toml` or `./.podlens.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/podlens/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileQueryConfig, FileReplConfig, FileServiceConfig,
};
pub use loader::ConfigLoader;
