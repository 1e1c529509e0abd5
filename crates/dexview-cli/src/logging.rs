use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `dexview_client=debug`.
pub const LOG_ENV: &str = "DEXVIEW_LOG";

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
