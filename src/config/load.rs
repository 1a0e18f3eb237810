use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings: struct defaults, overlaid by the optional config
    /// file, overlaid by `AUDIOPHILE__*` environment variables.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_file_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("AUDIOPHILE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.library.extensions.is_empty() {
            return Err("library.extensions must not be empty".to_string());
        }
        Ok(())
    }
}

/// Where the config file lives: `$AUDIOPHILE_CONFIG_PATH` when set,
/// otherwise `audiophile/config.toml` under the XDG config home
/// (`$XDG_CONFIG_HOME`, falling back to `~/.config`).
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os("AUDIOPHILE_CONFIG_PATH") {
        return Some(PathBuf::from(explicit));
    }

    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

    Some(config_home.join("audiophile").join("config.toml"))
}
