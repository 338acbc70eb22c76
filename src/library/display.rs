/// Build the now-playing label for a track: `Title - Artist`, or just the
/// title when no artist tag is present.
pub fn display_label(title: &str, artist: Option<&str>) -> String {
    match artist.map(str::trim).filter(|a| !a.is_empty()) {
        Some(artist) => format!("{} - {}", title.trim(), artist),
        None => title.trim().to_string(),
    }
}
