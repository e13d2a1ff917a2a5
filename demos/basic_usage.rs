//! Basic logger usage example
//!
//! Demonstrates the five channels and the minimum-level threshold.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, log, warn};

fn main() {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // Everything from Debug upwards
    init(&LoggerConfig::new().with_level(LogLevel::Debug));

    println!("1. Logging at different levels:");
    let _ = debug().println(&[&"This is a debug message"]);
    let _ = info().println(&[&"This is an info message"]);
    let _ = warn().println(&[&"This is a warning message"]);
    let _ = error().println(&[&"This is an error message"]);

    println!("\n2. Formatting with macros:");
    let port = 8080;
    info!("Server listening on port {}", port);
    warn!("Retry attempt {} of {}", 3, 5);

    println!("\n3. Raising the minimum level:");
    init(&LoggerConfig::new().with_level(LogLevel::Warn));
    println!("   Minimum level set to WARN - debug and info won't show:");
    log!(LogLevel::Debug, "Debug message (hidden)");
    log!(LogLevel::Info, "Info message (hidden)");
    log!(LogLevel::Warn, "Warning message (visible)");

    println!("\n4. Fatal ends the process:");
    fatal().println(&[&"This is a fatal message"]);
}
