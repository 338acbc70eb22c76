use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Stage};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config::Settings;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::tagline::Rotator;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
struct EventLoopState {
    /// When the loading bar started filling.
    started_at: Instant,
    /// Last refresh of the now-playing snapshot (progress debounce).
    last_progress: Instant,
    /// Last now-playing index emitted to MPRIS.
    last_mpris_index: Option<usize>,
    /// Last playing flag emitted to MPRIS.
    last_mpris_playing: bool,
}

/// Main terminal event loop: stage timing, input, drawing and sync with
/// the audio thread and MPRIS. Returns `Ok(())` on shutdown.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let warmup = Duration::from_millis(settings.loading.warmup_ms);
    let unlock = Duration::from_millis(settings.loading.unlock_ms);
    let progress_refresh = Duration::from_millis(settings.ui.progress_refresh_ms);

    let now = Instant::now();
    let mut state = EventLoopState {
        started_at: now,
        last_progress: now,
        last_mpris_index: None,
        last_mpris_playing: false,
    };

    loop {
        let now = Instant::now();

        // Stage timing: the loading bar fills over the warm-up, the
        // unlock transition runs for its configured duration, and the
        // tagline rotation starts once the content view is up.
        match app.stage {
            Stage::Loading if now.duration_since(state.started_at) >= warmup => {
                app.mark_ready();
            }
            Stage::Unlocking { since } if now.duration_since(since) >= unlock => {
                app.show_content();
                app.tagline = Some(Rotator::start(
                    settings.tagline.lines.clone(),
                    Duration::from_millis(settings.tagline.hold_ms),
                    Duration::from_millis(settings.tagline.fade_ms),
                    Duration::from_millis(settings.tagline.initial_delay_ms),
                    now,
                ));
            }
            _ => {}
        }

        if let Some(rotator) = &mut app.tagline {
            rotator.tick(now);
        }

        // Debounced progress updates: the time display and gauge only
        // refresh at the configured cadence.
        if now.duration_since(state.last_progress) >= progress_refresh {
            app.refresh_now_playing();
            state.last_progress = now;
        }

        // Keep MPRIS in sync when the track or playback state changes.
        if app.now_playing.index != state.last_mpris_index
            || app.now_playing.playing != state.last_mpris_playing
        {
            let track = app.current_track();
            mpris.set_track(
                track.map(|t| t.title.clone()),
                track.and_then(|t| t.artist.clone()),
            );
            mpris.set_playing(app.now_playing.playing);
            state.last_mpris_index = app.now_playing.index;
            state.last_mpris_playing = app.now_playing.playing;
        }

        let loading_ratio = match app.stage {
            Stage::Loading => {
                now.duration_since(state.started_at).as_secs_f64() / warmup.as_secs_f64().max(f64::EPSILON)
            }
            _ => 1.0,
        };
        terminal.draw(|f| ui::draw(f, app, settings, loading_ratio))?;

        while let Ok(cmd) = control_rx.try_recv() {
            match cmd {
                ControlCmd::Begin => try_unlock(app, audio_player, Instant::now()),
                ControlCmd::Skip => {
                    if !app.is_locked() {
                        let _ = audio_player.send(AudioCmd::Skip);
                    }
                }
                ControlCmd::Quit => {
                    audio_player.quit();
                    return Ok(());
                }
            }
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') => {
                            audio_player.quit();
                            return Ok(());
                        }
                        KeyCode::Enter | KeyCode::Char(' ') if app.is_locked() => {
                            try_unlock(app, audio_player, Instant::now());
                        }
                        KeyCode::Char('n') if !app.is_locked() => {
                            let _ = audio_player.send(AudioCmd::Skip);
                        }
                        KeyCode::Char('m') if !app.is_locked() => {
                            let _ = audio_player.send(AudioCmd::ToggleMute);
                        }
                        KeyCode::Char('e') if !app.is_locked() => {
                            app.toggle_expanded();
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if app.is_locked() {
                            try_unlock(app, audio_player, Instant::now());
                        } else {
                            let size = terminal.size()?;
                            let area = Rect::new(0, 0, size.width, size.height);
                            let bar = ui::progress_bar_area(area);
                            if let Some(fraction) =
                                ui::seek_fraction(bar, mouse.column, mouse.row)
                            {
                                let _ = audio_player.send(AudioCmd::SeekTo(fraction));
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// The unlock interaction: ignored before ready and during the
/// transition; otherwise starts the overlay fade and the first track.
fn try_unlock(app: &mut App, audio_player: &AudioPlayer, now: Instant) {
    if app.try_unlock(now) {
        let _ = audio_player.send(AudioCmd::Begin);
    }
}
