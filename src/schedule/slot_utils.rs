use chrono::{NaiveTime, Timelike};

/// Parses a time string (H:MM or HH:MM) into a time of day
pub fn parse_time(time_str: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time_str.trim(), "%H:%M").ok()
}

/// Formats a time of day the way slot labels are shown: "8:00", "13:00"
pub fn format_slot_label(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Builds the slot catalog from `start` to `end` inclusive, one label every
/// `interval_minutes`. Stops at midnight instead of wrapping into the next day.
pub fn calculate_time_slots(start: NaiveTime, end: NaiveTime, interval_minutes: u32) -> Vec<String> {
    let mut slots = Vec::new();
    if interval_minutes == 0 || end < start {
        return slots;
    }

    let step = chrono::Duration::minutes(i64::from(interval_minutes));
    let mut current = start;
    while current <= end {
        slots.push(format_slot_label(current));
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 || next <= current {
            break;
        }
        current = next;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_labels_with_and_without_leading_zero() {
        assert_eq!(parse_time("8:00"), Some(t(8, 0)));
        assert_eq!(parse_time("08:30"), Some(t(8, 30)));
        assert_eq!(parse_time(" 20:00 "), Some(t(20, 0)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn default_working_day_has_thirteen_hourly_slots() {
        let slots = calculate_time_slots(t(8, 0), t(20, 0), 60);
        assert_eq!(slots.len(), 13);
        assert_eq!(slots.first().map(String::as_str), Some("8:00"));
        assert_eq!(slots[5], "13:00");
        assert_eq!(slots.last().map(String::as_str), Some("20:00"));
    }

    #[test]
    fn half_hour_interval_and_uneven_end() {
        let slots = calculate_time_slots(t(9, 0), t(10, 45), 30);
        assert_eq!(slots, vec!["9:00", "9:30", "10:00", "10:30"]);
    }

    #[test]
    fn degenerate_ranges_produce_no_slots() {
        assert!(calculate_time_slots(t(10, 0), t(9, 0), 60).is_empty());
        assert!(calculate_time_slots(t(9, 0), t(10, 0), 0).is_empty());
        assert_eq!(calculate_time_slots(t(23, 0), t(23, 59), 60), vec!["23:00"]);
    }
}
