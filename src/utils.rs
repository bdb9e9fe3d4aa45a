// Time helpers: Moscow clock, work window, heartbeat schedule.
use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Москва — UTC+3, без перехода на летнее время.
pub fn moscow_now() -> DateTime<FixedOffset> {
    let msk = FixedOffset::east_opt(3 * 3600).expect("valid fixed offset");
    Utc::now().with_timezone(&msk)
}

/// true, если час попадает в рабочее окно [start, end).
pub fn is_work_time(now: &DateTime<FixedOffset>, start_hour: u32, end_hour: u32) -> bool {
    (start_hour..end_hour).contains(&now.hour())
}

/// Если пора слать heartbeat — возвращает сегодняшнюю дату для отметки в стейте.
///
/// Шлём в первые полчаса рабочего дня и не чаще раза в календарный день.
pub fn heartbeat_date(
    now: &DateTime<FixedOffset>,
    start_hour: u32,
    last_sent: Option<&str>,
) -> Option<String> {
    if now.hour() != start_hour || now.minute() >= 30 {
        return None;
    }
    let today = now.date_naive().to_string();
    if last_sent == Some(today.as_str()) {
        return None;
    }
    Some(today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn msk_time(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 1, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn work_window_is_half_open() {
        assert!(is_work_time(&msk_time(8, 0), 8, 18));
        assert!(is_work_time(&msk_time(17, 59), 8, 18));
        assert!(!is_work_time(&msk_time(18, 0), 8, 18));
        assert!(!is_work_time(&msk_time(7, 59), 8, 18));
    }

    #[test]
    fn heartbeat_fires_early_in_the_start_hour() {
        assert_eq!(
            heartbeat_date(&msk_time(8, 10), 8, None),
            Some("2025-03-01".to_string())
        );
        assert_eq!(heartbeat_date(&msk_time(8, 30), 8, None), None);
        assert_eq!(heartbeat_date(&msk_time(9, 0), 8, None), None);
    }

    #[test]
    fn heartbeat_is_once_per_day() {
        assert_eq!(heartbeat_date(&msk_time(8, 10), 8, Some("2025-03-01")), None);
        assert_eq!(
            heartbeat_date(&msk_time(8, 10), 8, Some("2025-02-28")),
            Some("2025-03-01".to_string())
        );
    }
}
