//! Logging initialization.
//!
//! Logs go to a file so they never interfere with the TUI. Each run writes
//! its own timestamped file under `logs/` next to the executable, e.g.
//! `logs/shadow-console.2026-08-29-14-30-25.log`.
//!
//! The level is controlled by `RUST_LOG` (default `info`).

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize file-based logging. Failures are reported on stderr and
/// otherwise ignored; a demo without logs still runs.
pub fn init_logging() {
    let log_dir = match std::env::current_exe() {
        Ok(exe_path) => exe_path
            .parent()
            .map(|p| p.join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs")),
        Err(_) => PathBuf::from("logs"),
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_path = log_dir.join(format!("shadow-console.{}.log", timestamp));

    let log_file = match fs::File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {}", e);
            return;
        }
    };

    // Non-blocking writer so logging never stalls the draw loop.
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole program; leaking one guard in
    // main is fine.
    std::mem::forget(guard);

    tracing::info!("Logging initialized - writing to {}", log_path.display());
}
