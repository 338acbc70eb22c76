use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/marquee/config.toml` or
/// `~/.config/marquee/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MARQUEE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub loading: LoadingSettings,
    pub tagline: TaglineSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume added per fade tick.
    pub fade_step: f32,
    /// Volume the fade-in ramps to and holds (0.0..=1.0).
    pub fade_ceiling: f32,
    /// Fade tick interval (milliseconds).
    pub fade_interval_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            fade_step: 0.02,
            fade_ceiling: 0.3,
            fade_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoadingSettings {
    /// How long the loading bar takes to fill before input unlocks
    /// anything (milliseconds).
    pub warmup_ms: u64,
    /// Duration of the unlock transition before the content view appears
    /// (milliseconds).
    pub unlock_ms: u64,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            warmup_ms: 3000,
            unlock_ms: 700,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaglineSettings {
    /// Lines cycled under the header, in order.
    pub lines: Vec<String>,
    /// How long each line stays fully visible (milliseconds).
    pub hold_ms: u64,
    /// How long the fade-out phase lasts (milliseconds).
    pub fade_ms: u64,
    /// Delay after the content view appears before the rotation starts
    /// (milliseconds).
    pub initial_delay_ms: u64,
}

impl Default for TaglineSettings {
    fn default() -> Self {
        Self {
            lines: vec![
                "Photographer".into(),
                "Developer".into(),
                "Volleyball".into(),
                "You :)".into(),
            ],
            hold_ms: 2500,
            fade_ms: 500,
            initial_delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered in the header box of the content view.
    pub header_text: String,
    /// Minimum interval between refreshes of the time display and
    /// progress gauge (milliseconds).
    pub progress_refresh_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ welcome ~ ".to_string(),
            progress_refresh_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
