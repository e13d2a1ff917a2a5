//! File logging example
//!
//! Routes debug output to a file with colors disabled.
//!
//! Run with: cargo run --example file_logging

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{disable_colors, fatal};

fn main() {
    let path = std::env::temp_dir().join("leveled_logger_demo.log");

    let file = FileWriter::open(&path).unwrap_or_else(|e| fatal!("file error: {}", e));

    disable_colors();

    init(
        &LoggerConfig::new()
            .with_level(LogLevel::Debug)
            .with_override(LogLevel::Debug, LevelOverride::new().writer(file)),
    );

    if let Err(e) = debug().println(&[&"debug", &"to", &"file"]) {
        eprintln!("write failed: {}", e);
    }

    println!("Wrote a debug line to {}", path.display());
}
