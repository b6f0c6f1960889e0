//! Logging setup

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Diagnostics go to stderr so
/// stdout carries only progress and result lines.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("vdw=debug,warn")
        } else {
            EnvFilter::new("vdw=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(verbose)
        .with_file(false)
        .with_line_number(false)
        .init();
}
