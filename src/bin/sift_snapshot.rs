//! Scans a saved feed page and writes the extracted records as CSV.
//!
//! Reads the snapshot from the given file (or stdin when the path is `-`),
//! runs the extraction pipeline offline, and prints a JSON report to
//! stdout. Log verbosity follows `RUST_LOG`.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use feedsift::{scan_to_csv, Options, SnapshotFeed};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (snapshot_path, records_path, diagnostic_path) = match args.as_slice() {
        [snapshot, records] => (
            snapshot.clone(),
            records.clone(),
            format!("{records}.diagnostic.html"),
        ),
        [snapshot, records, diagnostic] => (snapshot.clone(), records.clone(), diagnostic.clone()),
        _ => {
            eprintln!("usage: sift_snapshot <snapshot.html|-> <records.csv> [diagnostic.html]");
            process::exit(2);
        }
    };

    let bytes = match read_snapshot(&snapshot_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {snapshot_path}: {err}");
            process::exit(1);
        }
    };

    let mut feed = SnapshotFeed::from_bytes(&bytes);
    // The snapshot is already fully loaded; skip the live-feed waits.
    let options = Options {
        render_grace: Duration::ZERO,
        settle_delay: Duration::ZERO,
        ..Options::default()
    };

    match scan_to_csv(
        &mut feed,
        &options,
        &PathBuf::from(&records_path),
        &PathBuf::from(&diagnostic_path),
    ) {
        Ok(report) => {
            println!("{}", serde_json::to_string(&report).unwrap_or_default());
        }
        Err(err) => {
            eprintln!("scan failed: {err}");
            process::exit(1);
        }
    }
}

fn read_snapshot(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read(path)
    }
}
