use env_logger::Env;

/// Install the global `env_logger`.
///
/// `filter` uses the `env_logger` syntax and overrides `RUST_LOG`; with
/// neither set, `info` is used. Installing twice keeps the first logger.
pub fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already installed");
        return;
    }
    log::debug!("logging initialized");
}
