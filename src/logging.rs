use std::path::PathBuf;

use chrono::Utc;
use env_logger::{Builder, Target};
use log::{debug, error, info};

use crate::error::{BiogenError, Result};

/// Default log directory, `~/.biogen/logs`
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".biogen")
        .join("logs")
}

/// Install a file-backed logger and return the path of the log file.
pub fn init_logging(log_dir: Option<PathBuf>) -> Result<PathBuf> {
    let log_dir = log_dir.unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| BiogenError::Io(e).with_path(&log_dir))?;

    let log_file = log_dir.join(format!("biogen_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));
    let file =
        std::fs::File::create(&log_file).map_err(|e| BiogenError::Io(e).with_path(&log_file))?;

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| BiogenError::Logging(e.to_string()))?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Translate `BIOGEN_LOG_LEVEL` into a `RUST_LOG` filter for this crate
pub fn set_log_level() {
    let level = std::env::var("BIOGEN_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let env_filter = match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level.as_str(),
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    };

    std::env::set_var("RUST_LOG", format!("biogen={env_filter}"));
}

pub fn log_system_info() {
    info!("=== biogen starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    for (key, value) in std::env::vars() {
        if key.starts_with("BIOGEN_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== biogen finished at {} ===", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error, and echo it to stderr in case no logger is installed
pub fn log_critical_error(error: &str, context: Option<&str>) {
    let message = match context {
        Some(ctx) => format!("CRITICAL ERROR [{ctx}]: {error}"),
        None => format!("CRITICAL ERROR: {error}"),
    };
    error!("{message}");
    eprintln!("[{}] {message}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let log_file = init_logging(Some(log_dir.clone())).unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(&log_dir));

        // a second logger cannot be installed in the same process
        let second = init_logging(Some(log_dir));
        assert!(matches!(second, Err(BiogenError::Logging(_))));
    }

    #[test]
    fn test_default_log_dir() {
        assert!(default_log_dir().ends_with(".biogen/logs"));
    }
}
