use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use checkpoint_infrastructure::AppConfig;

pub const AUDIT_LOG_PREFIX: &str = "checkpoint.log";

/// Console logs go to stderr so command output on stdout stays parseable.
/// When `log_dir` is set, a daily JSON audit file is written as well; keep
/// the returned guard alive until exit or buffered lines are lost.
pub fn init_tracing(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json_console = config
        .log_json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_console = (!config.log_json).then(|| fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, AUDIT_LOG_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_console)
        .with(text_console)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))?;
    Ok(guard)
}
