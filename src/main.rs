mod app;
mod audio;
mod config;
mod error;
mod library;
mod mpris;
mod runtime;
mod sequencer;
mod tagline;
mod ui;

use std::path::PathBuf;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The handle must stay alive for the duration of the program;
    // dropping it shuts the logger down.
    let _logger = init_logging()?;

    // The terminal owns stderr while the alternate screen is up, so a
    // panic anywhere lands in the log before the default hook runs.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("runtime error: {info}");
        default_hook(info);
    }));

    runtime::run()
}

/// Log to rotating files under the state directory. The TUI owns the
/// terminal, so nothing goes to stdout or stderr.
fn init_logging() -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(log_directory()))
        .rotate(
            Criterion::Size(1_000_000),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(3),
        )
        .start()?;
    Ok(handle)
}

/// `$XDG_STATE_HOME/marquee/logs`, falling back to `~/.local/state` and
/// finally the working directory.
fn log_directory() -> PathBuf {
    let state_home = if let Some(xdg) = std::env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = std::env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home
        .map(|d| d.join("marquee").join("logs"))
        .unwrap_or_else(|| PathBuf::from("."))
}
