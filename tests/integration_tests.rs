//! Integration tests for the leveled logger
//!
//! These tests verify:
//! - Threshold suppression and override resolution
//! - Exact emitted line format
//! - Reconfiguration without residual state
//! - Color disabling
//! - File destinations and settings files

use rust_leveled_logger::core::factory::format_prefix;
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::writers::MemoryWriter;
use std::fs;
use tempfile::TempDir;

fn plain() -> LoggerConfig {
    LoggerConfig::new().with_color_support(ColorSupport::Disabled)
}

fn quiet(buffer: &MemoryWriter) -> LevelOverride {
    LevelOverride::new().writer(buffer.clone()).flags(LogFlags::NONE)
}

/// One buffer per level, every level routed to its own buffer.
fn capture_all(min_level: LogLevel) -> (LoggingContext, Vec<MemoryWriter>) {
    let buffers: Vec<MemoryWriter> = LogLevel::ALL.iter().map(|_| MemoryWriter::new()).collect();
    let mut config = plain().with_level(min_level);
    for (level, buffer) in LogLevel::ALL.iter().zip(&buffers) {
        config = config.with_override(*level, quiet(buffer));
    }
    (LoggingContext::new(&config), buffers)
}

#[test]
fn test_debug_scenario_without_color() {
    let buffer = MemoryWriter::new();
    let context = LoggingContext::new(
        &plain()
            .with_level(LogLevel::Debug)
            .with_override(LogLevel::Debug, quiet(&buffer)),
    );

    context.debug().println(&[&"x"]).unwrap();
    assert_eq!(buffer.contents(), "[DEBUG] x\n");
}

#[test]
fn test_debug_scenario_with_color() {
    let buffer = MemoryWriter::new();
    let context = LoggingContext::new(
        &LoggerConfig::new()
            .with_color_support(ColorSupport::Enabled)
            .with_level(LogLevel::Debug)
            .with_override(LogLevel::Debug, quiet(&buffer)),
    );

    context.debug().println(&[&"x"]).unwrap();

    let expected = format_prefix("[{}] ", Some(colored::Color::Green), LogLevel::Debug) + "x\n";
    assert_eq!(buffer.contents(), expected);
    assert_eq!(buffer.contents(), "[\x1b[32mDEBUG\x1b[0m] x\n");
}

#[test]
fn test_levels_below_threshold_write_nothing() {
    for (threshold_index, min_level) in LogLevel::ALL.iter().enumerate() {
        let (context, buffers) = capture_all(*min_level);

        for level in LogLevel::ALL.iter().filter(|l| **l != LogLevel::Fatal) {
            context.logger(*level).println(&[&"message"]).unwrap();
        }

        for (i, (level, buffer)) in LogLevel::ALL.iter().zip(&buffers).enumerate() {
            if *level == LogLevel::Fatal {
                continue;
            }
            if i < threshold_index {
                assert!(buffer.is_empty(), "{} wrote below {}", level, min_level);
            } else {
                assert_eq!(buffer.contents(), format!("[{}] message\n", level));
            }
        }
    }
}

#[test]
fn test_info_threshold_scenario() {
    let debug_buffer = MemoryWriter::new();
    let info_buffer = MemoryWriter::new();
    let context = LoggingContext::new(
        &plain()
            .with_level(LogLevel::Info)
            .with_override(LogLevel::Debug, LevelOverride::new().writer(debug_buffer.clone()))
            .with_override(LogLevel::Info, LevelOverride::new().writer(info_buffer.clone())),
    );

    context.debug().println(&[&"x"]).unwrap();
    context.info().println(&[&"y"]).unwrap();

    assert!(debug_buffer.is_empty());
    let line = info_buffer.contents();
    assert!(line.starts_with("[INFO] "));
    assert!(line.ends_with(" y\n"));
}

#[test]
fn test_fatal_is_always_active() {
    let (context, _buffers) = capture_all(LogLevel::Fatal);
    assert!(!context.fatal().logger().is_discarding());
    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        assert!(context.logger(level).is_discarding());
    }
}

#[test]
fn test_reconfigure_without_override_restores_defaults() {
    let buffer = MemoryWriter::new();
    let context = LoggingContext::new(
        &plain().with_level(LogLevel::Debug).with_override(
            LogLevel::Warn,
            LevelOverride::new()
                .writer(buffer.clone())
                .prefix("!! {} ")
                .color(colored::Color::Blue)
                .flags(LogFlags::NONE),
        ),
    );
    assert_eq!(context.warn().prefix(), "!! WARN ");

    context.init(&plain().with_level(LogLevel::Debug));

    let warn = context.warn();
    assert_eq!(warn.prefix(), "[WARN] ");
    assert_eq!(warn.flags(), LogFlags::STD);
    assert_eq!(format!("{:?}", warn.writer()), "SharedWriter(stdout)");
}

#[test]
fn test_threshold_round_trip_leaves_no_residue() {
    let (context, buffers) = capture_all(LogLevel::Error);
    let mut config = plain();
    for (level, buffer) in LogLevel::ALL.iter().zip(&buffers) {
        config = config.with_override(*level, quiet(buffer));
    }

    context.init(&config.clone().with_level(LogLevel::Debug));
    context.debug().println(&[&"visible"]).unwrap();
    context.init(&config.with_level(LogLevel::Error));

    for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn] {
        context.logger(level).println(&[&"hidden"]).unwrap();
    }
    context.error().println(&[&"shown"]).unwrap();

    assert_eq!(buffers[0].contents(), "[DEBUG] visible\n");
    assert!(buffers[1].is_empty());
    assert!(buffers[2].is_empty());
    assert_eq!(buffers[3].contents(), "[ERROR] shown\n");
}

#[test]
fn test_disable_colors_strips_explicit_colors_on_next_init() {
    let colorful = LoggerConfig::new()
        .with_color_support(ColorSupport::Enabled)
        .with_level(LogLevel::Debug);
    let context = LoggingContext::new(&colorful);
    assert!(context.loggers().iter().all(|l| l.prefix().contains('\x1b')));

    context.disable_colors();
    context.disable_colors();
    context.init(&colorful);

    for logger in context.loggers().iter() {
        assert!(!logger.prefix().contains('\x1b'), "{:?}", logger.prefix());
        assert_eq!(logger.prefix(), format!("[{}] ", logger.level()));
    }
}

#[test]
fn test_unsupported_terminal_strips_override_colors() {
    let context = LoggingContext::new(
        &plain()
            .with_level(LogLevel::Debug)
            .with_override(LogLevel::Info, LevelOverride::new().color(colored::Color::Cyan)),
    );

    assert!(context.palette().is_disabled());
    for logger in context.loggers().iter() {
        assert!(!logger.prefix().contains('\x1b'));
    }
}

#[test]
fn test_custom_prefix_and_short_file() {
    let buffer = MemoryWriter::new();
    let context = LoggingContext::new(
        &plain().with_level(LogLevel::Warn).with_override(
            LogLevel::Warn,
            LevelOverride::new()
                .writer(buffer.clone())
                .prefix("app <{}> ")
                .flags(LogFlags::SHORT_FILE),
        ),
    );

    let line = line!() + 1;
    context.warn().printf(format_args!("disk at {}%", 91)).unwrap();

    assert_eq!(
        buffer.contents(),
        format!("app <WARN> integration_tests.rs:{}: disk at 91%\n", line)
    );
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("debug.log");

    let file = FileWriter::open(&log_file).expect("Failed to open log file");
    let context = LoggingContext::new(
        &plain().with_level(LogLevel::Debug).with_override(
            LogLevel::Debug,
            LevelOverride::new().writer(file).flags(LogFlags::NONE),
        ),
    );

    context.debug().println(&[&"first"]).unwrap();
    context.debug().printf(format_args!("second {}", 2)).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[DEBUG] first\n[DEBUG] second 2\n");
}

#[test]
fn test_settings_file_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("warn.log");
    let settings_file = temp_dir.path().join("logging.json");

    let settings = format!(
        r#"{{
            "level": "Warn",
            "color": "never",
            "levels": {{
                "warn": {{ "writer": {{ "file": {} }}, "prefix": "W/{{}} ", "flags": [] }},
                "info": {{ "writer": "stdout" }}
            }}
        }}"#,
        serde_json::to_string(&log_file).unwrap()
    );
    fs::write(&settings_file, settings).unwrap();

    let config = LoggerSettings::from_path(&settings_file)
        .and_then(LoggerSettings::into_config)
        .expect("valid settings");
    let context = LoggingContext::new(&config);

    assert!(context.info().is_discarding());
    context.warn().println(&[&"low", &"memory"]).unwrap();

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "W/WARN low memory\n");
}
