//! Configuration management module
//! 
//! This module handles loading the node configuration, the registry of known
//! identifiers, the resolved configuration view, and the tool's own settings.

pub mod loader;
pub mod registry;
pub mod resolved;
pub mod settings;

pub use loader::load_raw_config;
pub use registry::Registry;
pub use resolved::ResolvedConfig;
pub use settings::ValidatorSettings;
