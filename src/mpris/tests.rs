use std::sync::mpsc;

use super::*;

fn player() -> (PlayerIface, Arc<Mutex<SharedState>>, mpsc::Receiver<ControlCmd>) {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    (iface, state, rx)
}

#[test]
fn playback_status_maps_session_state() {
    let (iface, state, _rx) = player();

    assert_eq!(iface.playback_status(), "Stopped");

    state.lock().unwrap().playing = true;
    assert_eq!(iface.playback_status(), "Playing");
}

#[test]
fn media_keys_map_onto_session_commands() {
    let (iface, _state, rx) = player();

    iface.play_pause();
    iface.next();
    iface.stop();
    // Unsupported controls send nothing.
    iface.pause();
    iface.previous();

    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Begin)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Skip)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Quit)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn metadata_includes_title_and_artist_when_set() {
    let (iface, state, _rx) = player();

    {
        let mut s = state.lock().unwrap();
        s.title = Some("Title".to_string());
        s.artist = Some("Artist".to_string());
    }

    let map = iface.metadata();
    for k in ["xesam:title", "xesam:artist"] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn handle_updates_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = MprisHandle {
        state: state.clone(),
    };

    handle.set_playing(true);
    handle.set_track(Some("Song".into()), Some("Someone".into()));
    {
        let s = state.lock().unwrap();
        assert!(s.playing);
        assert_eq!(s.title.as_deref(), Some("Song"));
        assert_eq!(s.artist.as_deref(), Some("Someone"));
    }

    handle.set_track(None, None);
    let s = state.lock().unwrap();
    assert_eq!(s.title, None);
    assert_eq!(s.artist, None);
}
