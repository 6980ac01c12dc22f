use slog::{o, Drain, Logger};

/// Terminal logger filtered by `RUST_LOG`, used when the caller does not provide one.
pub fn default_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::new(drain)
        .overflow_strategy(slog_async::OverflowStrategy::DropAndReport)
        .build()
        .fuse();
    Logger::root(drain, o!())
}

/// Use the given logger or fall back to [default_logger]
pub fn logger_or_default(logger: impl Into<Option<Logger>>) -> Logger {
    logger.into().unwrap_or_else(default_logger)
}
