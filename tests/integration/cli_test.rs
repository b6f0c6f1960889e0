use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vdw"))
}

fn run_vdw(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute vdw")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Lengths from the `<length> <sequence>` progress lines
fn progress_lengths(output: &Output) -> Vec<usize> {
    stdout_lines(output)
        .iter()
        .filter(|line| !line.starts_with("W(2,"))
        .map(|line| {
            let (length, sequence) = line
                .split_once(' ')
                .unwrap_or_else(|| panic!("Malformed progress line: {:?}", line));
            assert_eq!(
                sequence.len(),
                length.parse::<usize>().unwrap(),
                "Rendered sequence has wrong length in {:?}",
                line
            );
            length.parse().unwrap()
        })
        .collect()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run_vdw(&[]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Should print usage: {}", stdout);
}

#[test]
fn test_flags_without_k_print_usage() {
    let cases: [&[&str]; 3] = [&["--stats"], &["-v"], &["--quiet", "--stats"]];
    for flags in cases {
        let output = run_vdw(flags);
        assert_success(&output);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("Usage"),
            "Should print usage for {:?}: {}",
            flags,
            stdout
        );
    }
}

#[test]
fn test_help_flag_succeeds() {
    let output = run_vdw(&["--help"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_closed_stdout_stops_search() {
    // W(2,5) takes far longer than the deadline to search exhaustively
    let mut child = Command::new(get_binary_path())
        .args(["5", "2"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to execute vdw");

    // Close the read end so the next progress line hits a broken pipe
    drop(child.stdout.take());

    let deadline = Instant::now() + Duration::from_secs(20);
    let status = loop {
        match child.try_wait().expect("Failed to poll vdw") {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                panic!("vdw kept running after its stdout was closed");
            }
            None => thread::sleep(Duration::from_millis(50)),
        }
    };

    assert!(
        !status.success(),
        "Closed stdout should end the run with a failure status, got {:?}",
        status
    );
}

#[test]
fn test_k2_result() {
    let output = run_vdw(&["2"]);
    assert_success(&output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.last().map(String::as_str), Some("W(2,2) = 3"));
    assert_eq!(progress_lengths(&output), vec![1, 2]);
}

#[test]
fn test_k3_result() {
    let output = run_vdw(&["3"]);
    assert_success(&output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.last().map(String::as_str), Some("W(2,3) = 9"));
    assert_eq!(lines[0], "1 0");
    assert_eq!(progress_lengths(&output), (1..=8).collect::<Vec<_>>());
}

#[test]
fn test_single_worker_runs_are_identical() {
    let first = run_vdw(&["4", "1"]);
    let second = run_vdw(&["4", "1"]);
    assert_success(&first);
    assert_success(&second);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_worker_count_does_not_change_result() {
    for workers in ["1", "2", "8"] {
        let output = run_vdw(&["4", workers]);
        assert_success(&output);

        let lines = stdout_lines(&output);
        assert_eq!(
            lines.last().map(String::as_str),
            Some("W(2,4) = 35"),
            "workers={}",
            workers
        );

        let lengths = progress_lengths(&output);
        assert!(
            lengths.windows(2).all(|w| w[0] < w[1]),
            "Progress lengths not strictly increasing with {} workers: {:?}",
            workers,
            lengths
        );
        assert_eq!(lengths.last(), Some(&34));
    }
}

#[test]
fn test_quiet_prints_only_result() {
    let output = run_vdw(&["--quiet", "3", "2"]);
    assert_success(&output);
    assert_eq!(stdout_lines(&output), vec!["W(2,3) = 9".to_string()]);
}

#[test]
fn test_stats_summary() {
    let output = run_vdw(&["--quiet", "--stats", "3"]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Nodes expanded: 79"), "stdout: {}", stdout);
    assert!(stdout.contains("Forks: 0 taken"), "stdout: {}", stdout);
}

#[test]
fn test_zero_k_fails() {
    let output = run_vdw(&["0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("k must be at least 1"), "stderr: {}", stderr);
}

#[test]
fn test_non_numeric_k_fails() {
    let output = run_vdw(&["three"]);
    assert!(!output.status.success());
}
