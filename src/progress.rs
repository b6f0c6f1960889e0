//! Progress output for new longest sequences
//!
//! Each improvement reported by the search is written to stdout as
//! `<length> <sequence>`. A failed write means nobody is reading the output
//! any more (typically a closed pipe), so the printer ends the process.

use crate::search::ProgressEvent;
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::process;
use std::thread::{self, JoinHandle};
use tracing::error;

/// Exit status used when progress output can no longer be written
const EXIT_OUTPUT_CLOSED: i32 = 1;

/// Write every event from `events` to `out`, one line each, until the
/// channel closes or a write fails.
pub fn write_events<W: Write>(mut out: W, events: Receiver<ProgressEvent>) -> io::Result<()> {
    for event in events {
        writeln!(out, "{} {}", event.length, event.sequence)?;
        out.flush()?;
    }
    Ok(())
}

/// Spawn the stdout printer thread.
///
/// The thread returns once the search drops its sender. If stdout is
/// closed the search output is lost, so the whole process exits instead.
pub fn spawn_printer(events: Receiver<ProgressEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdout = io::stdout();
        if let Err(e) = write_events(stdout.lock(), events) {
            error!(error = %e, "Progress output closed, stopping search");
            process::exit(EXIT_OUTPUT_CLOSED);
        }
    })
}
