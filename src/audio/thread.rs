use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::OutputStreamBuilder;

use crate::error::PlaybackError;
use crate::library::Track;
use crate::sequencer::{FadePlan, Phase, Sequencer};

use super::sink::{SinkDeck, seek_target};
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    fade: FadePlan,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                log::error!("{}", PlaybackError::Output(e.to_string()));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut rng = rand::rng();
        let mut sequencer = Sequencer::new(tracks.len(), fade, &mut rng);
        log::info!(
            "session order over {} tracks: {:?}",
            tracks.len(),
            sequencer.order()
        );

        let mut decks: Vec<SinkDeck> = tracks
            .iter()
            .map(|t| SinkDeck::new(&stream, t.path.clone(), t.duration))
            .collect();

        let mut last_tick = Instant::now();

        loop {
            match rx.recv_timeout(fade.interval) {
                Ok(cmd) => match cmd {
                    AudioCmd::Begin => {
                        if sequencer.phase() == Phase::Idle {
                            if let Err(e) = sequencer.begin(&mut decks, &mut rng) {
                                log::warn!("music playback failed: {e}");
                            }
                        }
                    }
                    AudioCmd::Skip => {
                        if let Err(e) = sequencer.advance(&mut decks, &mut rng) {
                            log::warn!("music playback failed: {e}");
                        }
                    }
                    AudioCmd::ToggleMute => {
                        if let Some(i) = sequencer.current() {
                            let muted = !decks[i].muted();
                            decks[i].set_muted(muted);
                        }
                    }
                    AudioCmd::SeekTo(fraction) => {
                        if let Some(i) = sequencer.current() {
                            if let Some(total) = decks[i].duration() {
                                if let Err(e) = decks[i].seek_to(seek_target(total, fraction)) {
                                    log::warn!("seek failed: {e}");
                                }
                            }
                        }
                    }
                    AudioCmd::Quit => {
                        sequencer.teardown(&mut decks);
                        publish(&playback_info, &sequencer, &decks);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    sequencer.teardown(&mut decks);
                    break;
                }
            }

            // Fade ramp and auto-advance run on the fixed tick cadence even
            // when commands arrive in between.
            if last_tick.elapsed() >= fade.interval {
                last_tick = Instant::now();
                sequencer.tick(&mut decks);
                if let Some(i) = sequencer.current() {
                    if decks[i].is_finished() {
                        if let Err(e) = sequencer.advance(&mut decks, &mut rng) {
                            log::warn!("music playback failed: {e}");
                        }
                    }
                }
            }

            publish(&playback_info, &sequencer, &decks);
        }
    })
}

fn publish(playback_info: &PlaybackHandle, sequencer: &Sequencer, decks: &[SinkDeck<'_>]) {
    let Ok(mut info) = playback_info.lock() else {
        return;
    };
    match sequencer.current() {
        Some(i) => {
            info.index = Some(i);
            info.elapsed = decks[i].position();
            info.playing = true;
            info.muted = decks[i].muted();
        }
        None => {
            info.index = None;
            info.elapsed = Duration::ZERO;
            info.playing = false;
            info.muted = false;
        }
    }
}
