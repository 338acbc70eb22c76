use std::path::PathBuf;
use std::time::Duration;

/// One playable audio file with its display metadata.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    /// "Title - Artist" label shown in the now-playing panel.
    pub display: String,
}
