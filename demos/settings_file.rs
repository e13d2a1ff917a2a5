//! Settings file example
//!
//! Loads logger configuration from JSON.
//!
//! Run with: cargo run --example settings_file -- path/to/logging.json

use rust_leveled_logger::prelude::*;

const FALLBACK: &str = r#"{
    "level": "info",
    "levels": {
        "info": { "prefix": "{} | ", "flags": ["time"] },
        "warn": { "color": "bright cyan", "flags": ["time", "shortfile"] }
    }
}"#;

fn main() -> Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => LoggerSettings::from_path(path)?,
        None => LoggerSettings::from_json(FALLBACK)?,
    };
    init(&settings.into_config()?);

    debug().println(&[&"hidden at info level"])?;
    info().println(&[&"configured from settings"])?;
    warn().printf(format_args!("{} levels configured", 5))?;

    Ok(())
}
