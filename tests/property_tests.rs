//! Property-based tests for loggerlib using proptest

use chrono::{Local, TimeZone};
use loggerlib::core::timestamp::format_timestamp;
use loggerlib::{LogEntry, LogLevel, Logger};
use proptest::prelude::*;
use tempfile::TempDir;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Ordering follows the numeric codes
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
    }

    /// Names and numeric codes both parse back to the level
    #[test]
    fn test_log_level_parse(level in any_level(), use_lower in any::<bool>()) {
        let name = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };

        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
        prop_assert_eq!((level as u8).to_string().parse::<LogLevel>().unwrap(), level);
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Every label is seven characters wide
    #[test]
    fn test_label_width(level in any_level()) {
        prop_assert_eq!(level.label().len(), 7);
        prop_assert!(level.label().starts_with(level.to_str()));
    }
}

// ============================================================================
// Line Format Tests
// ============================================================================

proptest! {
    /// Formatted lines classify back to the level that produced them
    #[test]
    fn test_line_classifies_to_its_level(
        level in any_level(),
        message in "[a-z0-9 ]{0,40}",
    ) {
        let line = LogEntry::new(level, message.clone()).format_line();

        prop_assert!(line.ends_with('\n'));
        let expected = format!("{}{}\n", level.label(), message);
        prop_assert!(line.ends_with(&expected));
        prop_assert_eq!(LogLevel::from_line(&line), level);
    }

    /// Timestamps are always `YYYY-MM-DD HH:MM:SS`
    #[test]
    fn test_timestamp_shape(
        year in 1971i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        // Skip local times that do not exist or repeat around DST changes
        if let Some(dt) = Local
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
        {
            let ts = format_timestamp(&dt);
            prop_assert_eq!(
                ts,
                format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    year, month, day, hour, minute, second
                )
            );
        }
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A message is written if and only if its level reaches the threshold
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("filter.log");

        let logger = Logger::file(&path, threshold).unwrap();
        logger.log(level, "probe");
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        let written = !content.is_empty();
        prop_assert_eq!(written, level >= threshold);
    }
}
