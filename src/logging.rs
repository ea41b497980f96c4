// src/logging.rs

use tracing_subscriber::EnvFilter;

/// Filter directive for a given `-v` count. Silent unless asked.
fn directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "off",
        1 => "logtail=info",
        2 => "logtail=debug",
        _ => "logtail=trace",
    }
}

/// Installs a stderr subscriber. Environment variables are not consulted.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(verbose)))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
