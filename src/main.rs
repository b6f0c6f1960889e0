use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::process::ExitCode;

mod error;
mod logging;
mod progress;
mod search;
mod sequence;

use search::{ProgressEvent, SearchConfig, run_search};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "vdw")]
#[command(about = "vdw - computes the two-colour van der Waerden number W(2,k)")]
#[command(version)]
struct Args {
    /// Length of the forbidden monochromatic arithmetic progression
    k: usize,
    /// Number of usable parallel workers, including the main thread
    #[arg(default_value_t = 1)]
    workers: usize,
    /// Enable debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
    /// Do not print a line for each new longest sequence
    #[arg(long, short)]
    quiet: bool,
    /// Print search statistics after the result
    #[arg(long)]
    stats: bool,
}

/// Print usage to stdout. A missing `k` is a request for usage, not a failure.
fn print_usage() -> ExitCode {
    let mut cmd = Args::command();
    let help = cmd.render_help();
    match writeln!(io::stdout(), "{}", help) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => return print_usage(),
        // --help, --version and genuine argument errors
        Err(e) => e.exit(),
    };
    logging::init(args.verbose);

    let config = SearchConfig::new(args.k).with_workers(args.workers);

    let (events, printer) = if args.quiet {
        (None, None)
    } else {
        let (tx, rx) = crossbeam_channel::unbounded::<ProgressEvent>();
        (Some(tx), Some(progress::spawn_printer(rx)))
    };

    let result = run_search(&config, events);

    // The search dropped its sender; drain the remaining progress lines first
    if let Some(printer) = printer {
        if printer.join().is_err() {
            tracing::error!("Progress printer thread panicked");
            return ExitCode::FAILURE;
        }
    }

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    let mut written = writeln!(stdout, "{}", result);
    if args.stats && written.is_ok() {
        written = write!(
            stdout,
            "Longest progression-free sequence ({}): {}\n{}",
            result.longest_free_length(),
            result.witness,
            result.statistics.format_summary()
        );
    }

    match written.and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write result");
            ExitCode::FAILURE
        }
    }
}
