//! The rodio-backed deck: one track's transport over a `Sink`.
//!
//! Sinks cannot rewind or jump within an appended source, so `begin` and
//! `seek_to` rebuild the sink with `skip_duration` at the wanted offset.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::PlaybackError;
use crate::sequencer::Deck;

pub(super) struct SinkDeck<'a> {
    stream: &'a OutputStream,
    path: PathBuf,
    duration: Option<Duration>,
    sink: Option<Sink>,
    volume: f32,
    muted: bool,
    /// Position the current sink was started from, and accumulated
    /// elapsed while stopped.
    offset: Duration,
    started_at: Option<Instant>,
}

impl<'a> SinkDeck<'a> {
    pub fn new(stream: &'a OutputStream, path: PathBuf, duration: Option<Duration>) -> Self {
        Self {
            stream,
            path,
            duration,
            sink: None,
            volume: 0.0,
            muted: false,
            offset: Duration::ZERO,
            started_at: None,
        }
    }

    fn build_sink(&self, start_at: Duration) -> Result<Sink, PlaybackError> {
        let file = File::open(&self.path)
            .map_err(|e| PlaybackError::Open(format!("{}: {e}", self.path.display())))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| PlaybackError::Decode(format!("{}: {e}", self.path.display())))?
            .skip_duration(start_at);
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Current playback position of this deck.
    pub fn position(&self) -> Duration {
        self.offset + self.started_at.map_or(Duration::ZERO, |t| t.elapsed())
    }

    /// True once the sink has drained its source (natural track end).
    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(|s| s.empty())
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(s) = &self.sink {
            s.set_volume(self.effective_volume());
        }
    }

    /// Jump to `target` (clamped to the track duration when known) while
    /// keeping the current volume and mute state.
    pub fn seek_to(&mut self, target: Duration) -> Result<(), PlaybackError> {
        if self.sink.is_none() {
            return Ok(());
        }
        let target = match self.duration {
            Some(total) => target.min(total),
            None => target,
        };

        let new_sink = self.build_sink(target)?;
        new_sink.set_volume(self.effective_volume());
        new_sink.play();
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(new_sink);
        self.offset = target;
        self.started_at = Some(Instant::now());
        Ok(())
    }
}

impl Deck for SinkDeck<'_> {
    fn begin(&mut self) -> Result<(), PlaybackError> {
        let new_sink = self.build_sink(self.offset)?;
        new_sink.set_volume(self.effective_volume());
        new_sink.play();
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(new_sink);
        self.started_at = Some(Instant::now());
        Ok(())
    }

    fn halt(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.offset = Duration::ZERO;
        self.started_at = None;
        self.volume = 0.0;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = &self.sink {
            s.set_volume(self.effective_volume());
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }
}

/// Map a fractional offset within the progress bar onto a track position.
pub(super) fn seek_target(duration: Duration, fraction: f64) -> Duration {
    duration.mul_f64(fraction.clamp(0.0, 1.0))
}
