mod manager;

pub use manager::{
    API_KEY_ENV, ConfigError, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig,
    TranslateDefaults, resolve_config,
};
