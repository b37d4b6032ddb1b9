#[cfg(test)]
mod tests {
    use crate::error::SchedulingError;
    use crate::slots::{generate_slots, lunch_gap, regular_slots, sessions, SlotOrigin};
    use crate::time::{to_clock, TimeWindow};
    use agenda_common::models::{DayOfWeek, WorkingHours};

    fn split_day() -> WorkingHours {
        WorkingHours {
            professional_id: 5,
            day_of_week: DayOfWeek::Tuesday,
            morning_start: Some("09:00".into()),
            morning_end: Some("13:00".into()),
            afternoon_start: Some("14:00".into()),
            afternoon_end: Some("18:00".into()),
            active: true,
        }
    }

    #[test]
    fn test_split_day_yields_eight_hourly_slots() {
        let slots = regular_slots(&split_day(), 60).unwrap();
        let starts: Vec<String> = slots.iter().map(|s| to_clock(s.start)).collect();
        assert_eq!(
            starts,
            ["09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00"]
        );
        // nothing spans lunch
        assert!(slots.iter().all(|s| s.end <= 780 || s.start >= 840));
        assert!(slots.iter().all(|s| s.origin == SlotOrigin::Regular));
    }

    #[test]
    fn test_trailing_remainder_is_dropped() {
        let slots = generate_slots(TimeWindow::new(540, 640), 45, SlotOrigin::Regular).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.last().unwrap().end, 630);
    }

    #[test]
    fn test_window_shorter_than_duration_is_empty() {
        let slots = generate_slots(TimeWindow::new(540, 570), 60, SlotOrigin::Regular).unwrap();
        assert!(slots.is_empty());
        let inverted = generate_slots(TimeWindow::new(600, 540), 15, SlotOrigin::Regular).unwrap();
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_window_at_the_top_of_the_minute_range() {
        let window = TimeWindow::parse("35791394:00", "35791394:07").unwrap();
        assert_eq!(window.end, i32::MAX);

        let slots = generate_slots(window, 5, SlotOrigin::Overtime).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].end, window.start + 5);
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        for duration in [0, -30] {
            assert!(matches!(
                generate_slots(TimeWindow::new(540, 600), duration, SlotOrigin::Regular),
                Err(SchedulingError::InvalidDuration(d)) if d == duration
            ));
        }
        assert!(regular_slots(&split_day(), 0).is_err());
    }

    #[test]
    fn test_single_session_day() {
        let hours = WorkingHours {
            afternoon_start: None,
            afternoon_end: None,
            ..split_day()
        };
        assert_eq!(sessions(&hours).unwrap(), vec![TimeWindow::new(540, 780)]);
        assert_eq!(regular_slots(&hours, 30).unwrap().len(), 8);
        assert_eq!(lunch_gap(&hours).unwrap(), None);
    }

    #[test]
    fn test_inactive_day_has_no_slots() {
        let hours = WorkingHours {
            active: false,
            ..split_day()
        };
        assert!(regular_slots(&hours, 30).unwrap().is_empty());
        assert_eq!(lunch_gap(&hours).unwrap(), None);
    }

    #[test]
    fn test_half_configured_session_is_ignored() {
        let hours = WorkingHours {
            morning_end: None,
            ..split_day()
        };
        assert_eq!(sessions(&hours).unwrap(), vec![TimeWindow::new(840, 1080)]);
        assert_eq!(lunch_gap(&hours).unwrap(), None);
    }

    #[test]
    fn test_lunch_gap() {
        assert_eq!(
            lunch_gap(&split_day()).unwrap(),
            Some(TimeWindow::new(780, 840))
        );
        let back_to_back = WorkingHours {
            afternoon_start: Some("13:00".into()),
            ..split_day()
        };
        assert_eq!(lunch_gap(&back_to_back).unwrap(), None);
    }

    #[test]
    fn test_slot_serializes_as_clock_strings() {
        let slot = generate_slots(TimeWindow::new(540, 600), 60, SlotOrigin::Overtime).unwrap()[0];
        let json = serde_json::to_value(slot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"start": "09:00", "end": "10:00", "origin": "overtime"})
        );
    }
}
