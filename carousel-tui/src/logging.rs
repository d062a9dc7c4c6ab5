//! File logging. The terminal is in the alternate screen while the app runs,
//! so structured JSON events go to a log file instead of stderr.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The binary logs under `carousel`; the library crates under their own names.
const DEFAULT_DIRECTIVES: &str = "carousel=info,carousel_core=info,carousel_tui=info";

/// `<cache_dir>/carousel/carousel.log`, or `./carousel.log` without one.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("carousel"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel.log")
}

/// Initialize logging to `path`. `RUST_LOG` overrides the default directives.
///
/// Returns false, leaving logging disabled, when the file cannot be opened
/// or a global subscriber is already installed.
pub fn init_logging(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(f) => f,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init()
        .is_ok()
}
