//! Utility functions and helpers

use chrono::{Datelike, NaiveDate};

/// Derive the month key ("YYYY-MM") from a date
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Check that a string is a well-formed month key ("YYYY-MM")
pub fn is_month_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }
    if !s[..4].chars().all(|c| c.is_ascii_digit()) || !s[5..].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(s[5..].parse::<u32>(), Ok(1..=12))
}

/// Lowercase a name and replace every non-alphanumeric character with an underscore
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Generate a unique ID from a name: slug plus a millisecond suffix
pub fn unique_id(name: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}_{}", slugify(name), now)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(month_key(date), "2024-03");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(month_key(date), "2024-12");
    }

    #[test]
    fn test_is_month_key() {
        assert!(is_month_key("2024-01"));
        assert!(is_month_key("2024-12"));
        assert!(!is_month_key("2024-13"));
        assert!(!is_month_key("2024-00"));
        assert!(!is_month_key("2024-1"));
        assert!(!is_month_key("202401"));
        assert!(!is_month_key("abcd-01"));
        assert!(!is_month_key(""));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Groceries"), "groceries");
        assert_eq!(slugify("Eating Out"), "eating_out");
        assert_eq!(slugify("Snacks-2"), "snacks_2");
    }

    #[test]
    fn test_unique_id_prefix() {
        let id = unique_id("Eating Out");
        assert!(id.starts_with("eating_out_"));
        assert!(id.len() > "eating_out_".len());
    }
}
