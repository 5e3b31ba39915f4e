//! Log file setup.
//!
//! The terminal belongs to the UI, so log records go to a file instead.
//! Filtering follows `RUST_LOG` directives (`info`, `ecostar=debug,rusqlite=warn`).

use std::env;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Builds the filter for `directives`, falling back to `info` when they are
/// absent or do not parse.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| match EnvFilter::try_new(d) {
            Ok(filter) => Some(filter),
            Err(e) => {
                eprintln!("Ignoring RUST_LOG={:?}: {}", d, e);
                None
            }
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Routes `log` records to `path`, appending.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_file_logging(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = log_filter(env::var("RUST_LOG").ok().as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_is_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn per_target_directives_are_kept() {
        let filter = log_filter(Some("rusqlite=trace,ecostar=warn"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
        let text = filter.to_string();
        assert!(text.contains("rusqlite=trace"), "{text}");
        assert!(text.contains("ecostar=warn"), "{text}");

        let quiet = log_filter(Some("ecostar=warn"));
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_directives_fall_back_to_info() {
        let filter = log_filter(Some("ecostar=loud"));
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("ecostar.log");
        init_file_logging(&path).unwrap();
        assert!(path.exists());
    }
}
