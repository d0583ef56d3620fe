//! Basic logger usage example
//!
//! Demonstrates destination resolution, level gating, exceptions and
//! log-once deduplication.
//!
//! Run with: cargo run --example basic_usage

use agent_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Agent Logger - Basic Usage Example ===\n");

    // Buffered until a real logger exists
    startup_logger().info("Starting up before configuration is loaded");

    let config = LoggerConfig::new()
        .with_log_file_path("STDOUT")
        .with_log_level("debug");
    let logger = LeveledLogger::new(&config);

    println!("\n1. Logging at different levels:");
    logger.debug("This is a debug message")?;
    logger.info("This is an info message")?;
    logger.warn(["Two fragments,", "two lines"])?;
    logger.error("This is an error message")?;
    logger.fatal("This is a fatal message")?;

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)")?;
    logger.warn("Warning message (visible)")?;

    println!("\n3. Exceptions:");
    let e = ExceptionInfo::new("Connection refused")
        .with_type("IOError")
        .with_backtrace(["collector.rs:42", "harvest.rs:7"]);
    logger.log_exception(LogLevel::Error, &e)?;

    println!("\n4. Log once:");
    for _ in 0..3 {
        logger.log_once(LogLevel::Warn, "deprecated-setting", "Setting 'foo' is deprecated")?;
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
