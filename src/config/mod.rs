//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_TTS_MODEL, KoeConfig, ProviderConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};
