use std::fs::{self, File};

use tempfile::tempdir;

use super::display::display_label;
use super::scan::scan;
use crate::config::LibrarySettings;

#[test]
fn display_label_formats_title_and_artist() {
    assert_eq!(display_label("Song", Some("Artist")), "Song - Artist");
    assert_eq!(display_label("Song", Some("  Artist  ")), "Song - Artist");
    assert_eq!(display_label("Song", Some("   ")), "Song");
    assert_eq!(display_label("Song", None), "Song");
}

#[test]
fn scan_picks_up_configured_extensions_only() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.mp3")).unwrap();
    File::create(dir.path().join("b.FLAC")).unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();

    let tracks = scan(dir.path(), &LibrarySettings::default());
    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b"]);
    // Untagged files fall back to the file stem.
    assert_eq!(tracks[0].display, "a");
    assert!(tracks[0].artist.is_none());
}

#[test]
fn scan_skips_hidden_files_unless_included() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join(".hidden.mp3")).unwrap();
    File::create(dir.path().join("visible.mp3")).unwrap();

    let mut settings = LibrarySettings::default();
    settings.include_hidden = false;
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "visible");

    settings.include_hidden = true;
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 2);
}

#[test]
fn scan_can_be_limited_to_the_root_directory() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("top.mp3")).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    File::create(dir.path().join("sub").join("nested.mp3")).unwrap();

    let mut settings = LibrarySettings::default();
    settings.recursive = false;
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "top");

    settings.recursive = true;
    let tracks = scan(dir.path(), &settings);
    assert_eq!(tracks.len(), 2);
}
