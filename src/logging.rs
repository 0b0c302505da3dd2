use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/log.txt";

/// Routes diagnostics to an append-only `logs/log.txt`.
///
/// Best effort: if the directory or file cannot be opened, or a subscriber
/// is already installed, the command simply runs without logging.
pub fn init() {
    if fs::create_dir_all(LOG_DIR).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
