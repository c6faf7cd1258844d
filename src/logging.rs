use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGET: &str = "memory_wall";
/// Request spans emitted by `TraceLayer` in the router.
const HTTP_TARGET: &str = "tower_http";
const DEFAULT_LOG_NAME: &str = "memory-wall.log";

/// Filter used when `RUST_LOG` is unset. Request spans are only interesting
/// while debugging, so quiet mode keeps them at warnings.
fn default_directive(verbose: bool) -> String {
    let (wall, http) = if verbose {
        ("debug", "debug")
    } else {
        ("info", "warn")
    };
    format!("{CRATE_TARGET}={wall},{HTTP_TARGET}={http}")
}

/// Splits `--log-file` into the directory and file prefix the daily roller wants.
fn rolling_parts(log_path: &Path) -> (PathBuf, OsString) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let prefix = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_NAME));
    (dir, prefix)
}

/// JSON lines for the optional log file, one file per day.
fn file_layer<S>(log_path: &Path) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let (dir, prefix) = rolling_parts(log_path);
    let _ = std::fs::create_dir_all(&dir);

    fmt::layer()
        .with_writer(tracing_appender::rolling::daily(dir, prefix))
        .with_ansi(false)
        .json()
}

/// Install the global subscriber: compact stderr output, plus daily JSON files
/// when `log_file` is given. `RUST_LOG` overrides `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(log_file.as_deref().map(file_layer))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(false), "memory_wall=info,tower_http=warn");
        assert_eq!(default_directive(true), "memory_wall=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }

    #[test]
    fn test_rolling_parts() {
        let (dir, prefix) = rolling_parts(Path::new("/var/log/wall/server.log"));
        assert_eq!(dir, PathBuf::from("/var/log/wall"));
        assert_eq!(prefix, OsString::from("server.log"));

        let (dir, prefix) = rolling_parts(Path::new("server.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, OsString::from("server.log"));

        let (_, prefix) = rolling_parts(Path::new("/"));
        assert_eq!(prefix, OsString::from(DEFAULT_LOG_NAME));
    }
}
