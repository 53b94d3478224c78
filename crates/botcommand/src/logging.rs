//! Tracing subscriber setup for the binary.

use botcommand_error::{ConfigError, DashboardResult};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for one-shot commands
    Stderr,
    /// Append to a file, while the dashboard owns the terminal
    File(PathBuf),
}

impl LogTarget {
    /// Log file under the user config directory, falling back to stderr.
    pub fn dashboard_default() -> Self {
        dirs::config_dir()
            .map(|dir| Self::File(dir.join("botcommand").join("botcommand.log")))
            .unwrap_or(Self::Stderr)
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` with `verbose`, else `info`
/// for BotCommand crates and `warn` for everything else.
pub fn init_logging(verbose: bool, target: LogTarget) -> DashboardResult<()> {
    let default_directive = if verbose {
        "debug"
    } else {
        "warn,botcommand=info,botcommand_core=info,botcommand_client=info,botcommand_store=info,botcommand_tui=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::new(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    ConfigError::new(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
    }
    Ok(())
}
