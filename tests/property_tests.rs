//! Property-based tests for agent_logger using proptest

use agent_logger::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn logger_at(threshold: LogLevel) -> (LeveledLogger, MemoryAppender) {
    let lines = MemoryAppender::new();
    let logger = LeveledLogger::builder()
        .config(LoggerConfig::new().with_log_level(threshold.to_str()))
        .appender(lines.clone())
        .context(Arc::new(LoggerContext::with_hostname_lookup(Arc::new(|| {
            "prop-host".to_string()
        }))))
        .build();
    (logger, lines)
}

// ============================================================================
// LogLevel Resolution
// ============================================================================

proptest! {
    /// Level names resolve regardless of case
    #[test]
    fn test_from_config_case_insensitive(level in any_level(), mask in prop::collection::vec(any::<bool>(), 5)) {
        let mixed: String = level
            .to_str()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, lower)| if *lower { c.to_ascii_lowercase() } else { c })
            .collect();

        prop_assert_eq!(LogLevel::from_config(&mixed), level);
    }

    /// Anything that is not a level name resolves to Info
    #[test]
    fn test_from_config_defaults_to_info(name in "[a-z]{0,12}") {
        prop_assume!(name.parse::<LogLevel>().is_err());
        prop_assert_eq!(LogLevel::from_config(&name), LogLevel::Info);
    }
}

// ============================================================================
// Level Gate
// ============================================================================

proptest! {
    /// A call writes one line per fragment exactly when its level passes
    #[test]
    fn test_gate_writes_one_line_per_fragment(
        threshold in any_level(),
        level in any_level(),
        fragments in prop::collection::vec("[a-zA-Z0-9 ]{1,20}", 1..6),
    ) {
        let (logger, lines) = logger_at(threshold);
        logger.log(level, fragments.clone()).unwrap();

        if level >= threshold {
            let logged = lines.lines();
            prop_assert_eq!(logged.len(), fragments.len());
            for (line, fragment) in logged.iter().zip(&fragments) {
                let expected = format!("{} : {}", level.to_str(), fragment);
                prop_assert!(line.ends_with(&expected));
            }
        } else {
            prop_assert!(lines.is_empty());
        }
    }

    /// Message and backtrace lines are gated independently
    #[test]
    fn test_exception_lines_gated_independently(
        threshold in any_level(),
        level in any_level(),
        backtrace_level in any_level(),
        frames in prop::collection::vec("[a-z_]{1,10}", 0..5),
    ) {
        let (logger, lines) = logger_at(threshold);
        let e = ExceptionInfo::new("boom").with_backtrace(frames.clone());
        logger
            .log_exception_with_backtrace_level(level, &e, backtrace_level)
            .unwrap();

        let expected = usize::from(level >= threshold) + usize::from(backtrace_level >= threshold);
        prop_assert_eq!(lines.len(), expected);

        if backtrace_level >= threshold {
            let logged = lines.lines();
            let block = logged.last().unwrap();
            let body: Vec<&str> = block.split('\n').skip(1).collect();
            prop_assert_eq!(body, frames.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

// ============================================================================
// Log-Once
// ============================================================================

proptest! {
    /// Each distinct key produces at most one line
    #[test]
    fn test_log_once_distinct_keys(keys in prop::collection::vec("[a-c]{1,2}", 1..30)) {
        let (logger, lines) = logger_at(LogLevel::Info);
        for key in &keys {
            logger.log_once(LogLevel::Warn, key.as_str(), key.as_str()).unwrap();
        }

        let mut distinct = keys.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(lines.len(), distinct.len());
    }
}
