#[cfg(test)]
mod tests {
    use crate::error::SchedulingError;
    use crate::time::{canonical, to_clock, to_minutes, TimeWindow};

    #[test]
    fn test_to_minutes_parses_wall_clock() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("09:30").unwrap(), 570);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
        assert_eq!(to_minutes("24:00").unwrap(), 1440);
        assert_eq!(to_minutes("9:05").unwrap(), 545);
    }

    #[test]
    fn test_to_minutes_rejects_malformed_input() {
        for bad in ["", "0930", "09:", ":30", "09:30:00", "ab:cd", "09:60", "-1:00", "09: 30"] {
            assert!(
                matches!(to_minutes(bad), Err(SchedulingError::Parse(_))),
                "'{}' should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_to_clock_pads_and_does_not_wrap() {
        assert_eq!(to_clock(0), "00:00");
        assert_eq!(to_clock(545), "09:05");
        assert_eq!(to_clock(1500), "25:00");
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(canonical("9:5").unwrap(), "09:05");
        assert_eq!(canonical(" 14:00 ").unwrap(), "14:00");
    }

    #[test]
    fn test_window_parse_requires_order() {
        assert_eq!(
            TimeWindow::parse("09:00", "13:00").unwrap(),
            TimeWindow::new(540, 780)
        );
        assert!(matches!(
            TimeWindow::parse("13:00", "13:00"),
            Err(SchedulingError::Validation(_))
        ));
    }

    #[test]
    fn test_overlap_is_half_open() {
        let ten = TimeWindow::new(600, 660);
        assert!(ten.overlaps(&TimeWindow::new(630, 690)));
        assert!(!ten.overlaps(&TimeWindow::new(660, 720)));
        assert!(!ten.overlaps(&TimeWindow::new(540, 600)));
        assert!(ten.contains(600));
        assert!(!ten.contains(660));
        assert_eq!(ten.to_string(), "10:00-11:00");
    }
}
