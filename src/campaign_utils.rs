//! Campaign Utilities
//!
//! Status parsing and display mapping plus date helpers shared by the
//! campaign screens.

use chrono::{NaiveDate, NaiveDateTime};

/// Parsed view of a backend campaign status string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Drafted,
    Preparing,
    Upcoming,
    Ongoing,
    /// `DONE` (checkup) and `COMPLETED` (vaccination) both land here
    Done,
    Cancelled,
    Unknown,
}

impl CampaignStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "DRAFTED" => CampaignStatus::Drafted,
            "PREPARING" => CampaignStatus::Preparing,
            "UPCOMING" => CampaignStatus::Upcoming,
            "ONGOING" => CampaignStatus::Ongoing,
            "DONE" | "COMPLETED" => CampaignStatus::Done,
            "CANCELLED" | "CANCELED" => CampaignStatus::Cancelled,
            _ => CampaignStatus::Unknown,
        }
    }
}

pub fn status_color(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Drafted => "#6c757d",
        CampaignStatus::Preparing => "#17a2b8",
        CampaignStatus::Upcoming => "#fd7e14",
        CampaignStatus::Ongoing => "#007bff",
        CampaignStatus::Done => "#28a745",
        CampaignStatus::Cancelled => "#dc3545",
        CampaignStatus::Unknown => "#adb5bd",
    }
}

pub fn status_border_color(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Drafted => "#ced4da",
        CampaignStatus::Preparing => "#9fdfe9",
        CampaignStatus::Upcoming => "#fed7b5",
        CampaignStatus::Ongoing => "#b3d7ff",
        CampaignStatus::Done => "#b7e4c7",
        CampaignStatus::Cancelled => "#f5c2c7",
        CampaignStatus::Unknown => "#dee2e6",
    }
}

pub fn status_text(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Drafted => "Bản nháp",
        CampaignStatus::Preparing => "Đang nhận đăng ký",
        CampaignStatus::Upcoming => "Sắp diễn ra",
        CampaignStatus::Ongoing => "Đang diễn ra",
        CampaignStatus::Done => "Đã hoàn thành",
        CampaignStatus::Cancelled => "Đã hủy",
        CampaignStatus::Unknown => "Không xác định",
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff][Z|+hh:mm]` and
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    // Fall back to the leading date of anything longer
    s.get(..10).and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// Whole days from `start` to `end`; negative when `end` precedes `start`
pub fn days_between(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Some((end - start).num_days())
}

/// `dd/mm/yyyy`, or the fallback text when missing/unparseable
pub fn format_date(value: &Option<String>) -> String {
    value
        .as_deref()
        .and_then(parse_date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| crate::models::UNKNOWN_TEXT.to_string())
}

/// "01/06/2025 - 05/06/2025 (4 ngày)"
pub fn format_date_range(start: &Option<String>, end: &Option<String>) -> String {
    let span = match (start.as_deref(), end.as_deref()) {
        (Some(s), Some(e)) => days_between(s, e),
        _ => None,
    };
    match span {
        Some(days) if days >= 0 => format!("{} - {} ({} ngày)", format_date(start), format_date(end), days),
        _ => format!("{} - {}", format_date(start), format_date(end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(CampaignStatus::parse("DRAFTED"), CampaignStatus::Drafted);
        assert_eq!(CampaignStatus::parse(" ongoing "), CampaignStatus::Ongoing);
        assert_eq!(CampaignStatus::parse("DONE"), CampaignStatus::Done);
        assert_eq!(CampaignStatus::parse("COMPLETED"), CampaignStatus::Done);
        assert_eq!(CampaignStatus::parse("ARCHIVED"), CampaignStatus::Unknown);
        assert_eq!(CampaignStatus::parse(""), CampaignStatus::Unknown);
    }

    #[test]
    fn test_display_mapping() {
        assert_eq!(status_text(CampaignStatus::Cancelled), "Đã hủy");
        assert_eq!(status_color(CampaignStatus::Done), "#28a745");
        assert_ne!(status_color(CampaignStatus::Ongoing), status_border_color(CampaignStatus::Ongoing));
        assert_eq!(status_text(CampaignStatus::Unknown), "Không xác định");
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 1);
        assert_eq!(parse_date("2025-06-01"), expected);
        assert_eq!(parse_date("2025-06-01T07:30:00Z"), expected);
        assert_eq!(parse_date("2025-06-01T07:30:00.123"), expected);
        assert_eq!(parse_date("2025-06-01 07:30:00"), expected);
        assert_eq!(parse_date("01/06/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between("2025-06-01", "2025-06-05"), Some(4));
        assert_eq!(days_between("2025-06-05", "2025-06-01"), Some(-4));
        assert_eq!(days_between("2025-06-01", "garbage"), None);
    }

    #[test]
    fn test_format_date_range() {
        let start = Some("2025-06-01".to_string());
        let end = Some("2025-06-05T00:00:00Z".to_string());
        assert_eq!(format_date_range(&start, &end), "01/06/2025 - 05/06/2025 (4 ngày)");
        assert_eq!(format_date_range(&start, &None), "01/06/2025 - Chưa xác định");
    }
}
