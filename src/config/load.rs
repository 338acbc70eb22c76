use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment
/// variables (prefix `MARQUEE__`) on top of struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MARQUEE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.fade_step <= 0.0 {
            return Err("audio.fade_step must be > 0".to_string());
        }
        if !(self.audio.fade_ceiling > 0.0 && self.audio.fade_ceiling <= 1.0) {
            return Err("audio.fade_ceiling must be in (0, 1]".to_string());
        }
        if self.audio.fade_interval_ms == 0 {
            return Err("audio.fade_interval_ms must be >= 1".to_string());
        }
        if self.ui.progress_refresh_ms == 0 {
            return Err("ui.progress_refresh_ms must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MARQUEE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MARQUEE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/marquee/config.toml`
/// or `~/.config/marquee/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("marquee").join("config.toml"))
}
