use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";

/// Create the log directory. Runs before the subscriber exists, so failures go to stderr.
fn ensure_log_dir(dir: &Path) -> bool {
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "Warning: failed to create log directory '{}': {}",
                dir.display(),
                e
            );
            false
        }
    }
}

/// Initializes the logging system with console output and, when the log
/// directory is usable, a daily-rotated JSON file.
pub fn init_logging() {
    let file_layer = if ensure_log_dir(Path::new(LOG_DIR)) {
        let file_appender = tracing_appender::rolling::daily(LOG_DIR, "lolomo.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        // Keep the writer alive for the life of the process so logs are flushed
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    } else {
        None
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stdout);

    // Respect RUST_LOG if set; otherwise info for our crate and dependencies
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lolomo=info,info"));

    // try_init so a second call is a no-op instead of a panic
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();
}
