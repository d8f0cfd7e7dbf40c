//! Infrastructure layer for podlens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod wolfram;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileQueryConfig, FileReplConfig,
    FileServiceConfig,
};
pub use wolfram::client::{DEFAULT_ENDPOINT, WolframAlphaClient, WolframSettings};
