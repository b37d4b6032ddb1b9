#[cfg(test)]
mod tests {
    use crate::slots::{generate_slots, SlotOrigin};
    use crate::time::{to_clock, to_minutes, TimeWindow};
    use proptest::prelude::*;

    proptest! {
        // HH:MM survives a trip through minutes
        #[test]
        fn test_clock_round_trip(hours in 0..24i32, minutes in 0..60i32) {
            let text = format!("{:02}:{:02}", hours, minutes);
            prop_assert_eq!(to_clock(to_minutes(&text).unwrap()), text);
        }

        #[test]
        fn test_slot_count_and_contiguity(
            start in 0..1200i32,
            length in 1..600i32,
            duration in 1..240i64,
        ) {
            let window = TimeWindow::new(start, start + length);
            let slots = generate_slots(window, duration, SlotOrigin::Regular).unwrap();

            prop_assert_eq!(slots.len() as i64, (length as i64) / duration);
            for slot in &slots {
                prop_assert_eq!((slot.end - slot.start) as i64, duration);
                prop_assert!(slot.end <= window.end);
                prop_assert!(slot.start >= window.start);
            }
            for pair in slots.windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
            if let Some(first) = slots.first() {
                prop_assert_eq!(first.start, window.start);
            }
        }

        #[test]
        fn test_non_positive_duration_never_loops(duration in -1000..=0i64) {
            prop_assert!(generate_slots(TimeWindow::new(0, 1440), duration, SlotOrigin::Regular).is_err());
        }
    }
}
