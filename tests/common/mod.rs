/// Shared helpers for the end-to-end tests: spawn the `assetgen` binary in a
/// scratch directory and read back what it wrote.
use std::path::Path;
use std::process::{Command, Output, Stdio};

pub const EMAIL_PATTERN: &str = r"^[a-z0-9]{10}@(gmail\.com|yahoo\.com|outlook\.com|example\.com)$";

/// Run assetgen with `args` and `dir` as the working directory.
pub fn run_assetgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assetgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run assetgen")
}

/// Run assetgen and assert it exited successfully.
pub fn assetgen_ok(dir: &Path, args: &[&str]) -> Output {
    let output = run_assetgen(dir, args);
    assert!(
        output.status.success(),
        "assetgen exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Parse a generated CSV into (header, rows).
pub fn read_table(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let header = rdr
        .headers()
        .expect("header row")
        .iter()
        .map(String::from)
        .collect();
    let rows = rdr
        .records()
        .map(|r| r.expect("valid record").iter().map(String::from).collect())
        .collect();
    (header, rows)
}
