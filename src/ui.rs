//! UI rendering for the front page: the loading overlay while the
//! session is locked, then the content view with the tagline, the
//! now-playing panel and its progress bar.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{App, Stage};
use crate::config::Settings;
use crate::tagline::TaglinePhase;

/// Format a `Duration` as `M:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn content_chunks(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// The clickable progress-bar row inside the now-playing panel, used for
/// mouse hit testing by the event loop. Must match `draw_now_playing`.
pub fn progress_bar_area(frame_area: Rect) -> Rect {
    let panel = content_chunks(frame_area)[3];
    Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(3),
        width: panel.width.saturating_sub(2),
        height: 1,
    }
}

/// Map a click column inside `bar` to a fractional seek offset.
pub fn seek_fraction(bar: Rect, column: u16, row: u16) -> Option<f64> {
    if row != bar.y || bar.width == 0 || column < bar.x || column >= bar.x + bar.width {
        return None;
    }
    Some(f64::from(column - bar.x) / f64::from(bar.width))
}

/// Render the entire UI for the current stage.
pub fn draw(frame: &mut Frame, app: &App, settings: &Settings, loading_ratio: f64) {
    if app.is_locked() {
        draw_overlay(frame, app, settings, loading_ratio);
    } else {
        draw_content(frame, app, settings);
    }
}

/// The locked front page: a loading bar that fills over the warm-up
/// interval and a prompt once the session is ready to unlock.
fn draw_overlay(frame: &mut Frame, app: &App, settings: &Settings, loading_ratio: f64) {
    let area = centered_rect_sized(48, 7, frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(settings.ui.header_text.as_str())
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let bar = Gauge::default()
        .ratio(loading_ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(bar, rows[1]);

    let (prompt, style) = match app.stage {
        Stage::Loading => ("loading...", Style::default().add_modifier(Modifier::DIM)),
        Stage::Ready => ("click or press enter to begin", Style::default()),
        Stage::Unlocking { .. } | Stage::Content => {
            ("", Style::default().add_modifier(Modifier::DIM))
        }
    };
    let prompt = Paragraph::new(prompt)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(prompt, rows[3]);
}

/// The unlocked content view.
fn draw_content(frame: &mut Frame, app: &App, settings: &Settings) {
    let chunks = content_chunks(frame.area());

    let header = Paragraph::new(settings.ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" marquee ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if let Some(rotator) = &app.tagline {
        if let Some((line, phase)) = rotator.current() {
            let style = match phase {
                TaglinePhase::Hold => Style::default(),
                TaglinePhase::FadingOut => Style::default().add_modifier(Modifier::DIM),
            };
            let tagline = Paragraph::new(line).style(style).alignment(Alignment::Center);
            frame.render_widget(tagline, chunks[1]);
        }
    }

    draw_now_playing(frame, app, chunks[3]);

    let footer = Paragraph::new(
        "[n] skip | [m] mute | [e] expand | [q] quit | click the bar to seek",
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" controls ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    if app.expanded {
        draw_expanded(frame, app, chunks[2]);
    }
}

fn draw_now_playing(frame: &mut Frame, app: &App, panel: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" now playing ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let Some(track) = app.current_track() else {
        let idle = Paragraph::new("silence")
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(idle, rows[0]);
        return;
    };

    let song = if app.now_playing.muted {
        format!("{} [muted]", track.display)
    } else {
        track.display.clone()
    };
    let song = Paragraph::new(song).alignment(Alignment::Center);
    frame.render_widget(song, rows[0]);

    let elapsed = app.now_playing.elapsed;
    let clamped = match track.duration {
        Some(total) => elapsed.min(total),
        None => elapsed,
    };
    let time = match track.duration {
        Some(total) => format!("{} / {}", format_mmss(clamped), format_mmss(total)),
        None => format_mmss(clamped),
    };
    let time = Paragraph::new(time).alignment(Alignment::Center);
    frame.render_widget(time, rows[1]);

    let ratio = track
        .duration
        .filter(|total| !total.is_zero())
        .map(|total| (clamped.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0))
        .unwrap_or(0.0);
    let progress = Gauge::default().ratio(ratio).label("");
    frame.render_widget(progress, rows[2]);
}

/// The expanded now-playing details popup (toggled with `e`).
fn draw_expanded(frame: &mut Frame, app: &App, within: Rect) {
    let popup = centered_rect_sized(60, 7, within);
    frame.render_widget(Clear, popup);

    let body = match app.current_track() {
        Some(track) => format!(
            "Title: {}\nArtist: {}\nDuration: {}\nFile: {}",
            track.title,
            track.artist.as_deref().unwrap_or("-"),
            track
                .duration
                .map(format_mmss)
                .unwrap_or_else(|| "-".to_string()),
            track.path.display()
        ),
        None => "Nothing playing".to_string(),
    };
    let details = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" details (e closes) ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, popup);
}
