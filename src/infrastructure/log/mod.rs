use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use crate::infrastructure::config::{LogConfig, FORMAT_COMPACT, FORMAT_JSON, FORMAT_PRETTY};


/// Initialize tracing log.
///
/// Caller should hold the guard, dropping it flushes and stops the file writer.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = if config.stdout {
        tracing_appender::non_blocking(std::io::stdout())
    } else {
        let appender = RollingFileAppender::new(config.rotation(), &config.directory, &config.file_name);
        tracing_appender::non_blocking(appender)
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.with_ansi && config.stdout)
        .with_writer(writer);

    // Each format yields a distinct subscriber type, hence one arm per format.
    let installed = match &*config.format {
        FORMAT_PRETTY => subscriber
            .event_format(
                fmt::format()
                    .pretty()
                    .with_level(config.with_level)
                    .with_target(config.with_target)
                    .with_thread_ids(config.with_thread_ids)
                    .with_thread_names(config.with_thread_names)
                    .with_source_location(config.with_source_location),
            )
            .try_init(),
        FORMAT_COMPACT => subscriber
            .event_format(
                fmt::format()
                    .compact()
                    .with_level(config.with_level)
                    .with_target(config.with_target)
                    .with_thread_ids(config.with_thread_ids)
                    .with_thread_names(config.with_thread_names)
                    .with_source_location(config.with_source_location),
            )
            .try_init(),
        FORMAT_JSON => subscriber
            .json()
            .with_level(config.with_level)
            .with_target(config.with_target)
            .with_thread_ids(config.with_thread_ids)
            .with_thread_names(config.with_thread_names)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location)
            .try_init(),
        // FORMAT_FULL or fallback
        _ => subscriber
            .event_format(
                fmt::format()
                    .with_level(config.with_level)
                    .with_target(config.with_target)
                    .with_thread_ids(config.with_thread_ids)
                    .with_thread_names(config.with_thread_names)
                    .with_source_location(config.with_source_location),
            )
            .try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
