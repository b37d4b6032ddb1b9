//! Validation of weekly templates and dated windows before they reach the store.

use crate::error::SchedulingError;
use crate::time::{canonical, TimeWindow};
use agenda_common::models::{NewScheduleWindow, WorkingHours};
use tracing::warn;

fn session(
    label: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<String>, Option<String>, Option<TimeWindow>), SchedulingError> {
    match (start, end) {
        (None, None) => Ok((None, None, None)),
        (Some(start), Some(end)) => {
            let window = TimeWindow::parse(start, end)
                .map_err(|e| match e {
                    SchedulingError::Validation(msg) => {
                        SchedulingError::Validation(format!("{} session: {}", label, msg))
                    }
                    other => other,
                })?;
            Ok((Some(canonical(start)?), Some(canonical(end)?), Some(window)))
        }
        _ => Err(SchedulingError::Validation(format!(
            "{} start and end must both be set or both be empty",
            label
        ))),
    }
}

/// Checks a template row and returns it with times in canonical `HH:MM` form.
///
/// Each pair is both-or-neither and ordered. A morning that ends after the afternoon
/// starts is accepted with a warning.
pub fn validate_working_hours(hours: WorkingHours) -> Result<WorkingHours, SchedulingError> {
    let (morning_start, morning_end, morning) = session(
        "morning",
        hours.morning_start.as_deref(),
        hours.morning_end.as_deref(),
    )?;
    let (afternoon_start, afternoon_end, afternoon) = session(
        "afternoon",
        hours.afternoon_start.as_deref(),
        hours.afternoon_end.as_deref(),
    )?;

    if let (Some(morning), Some(afternoon)) = (morning, afternoon) {
        if morning.end > afternoon.start {
            warn!(
                "Professional {} {}: morning ends at {} after afternoon starts at {}",
                hours.professional_id, hours.day_of_week, morning, afternoon
            );
        }
    }

    Ok(WorkingHours {
        morning_start,
        morning_end,
        afternoon_start,
        afternoon_end,
        ..hours
    })
}

/// Checks an overtime or blocked window and canonicalizes its times.
pub fn validate_window(window: NewScheduleWindow) -> Result<NewScheduleWindow, SchedulingError> {
    if window.professional_id <= 0 {
        return Err(SchedulingError::Validation(
            "professionalId must be positive".to_string(),
        ));
    }
    TimeWindow::parse(&window.start, &window.end)?;
    Ok(NewScheduleWindow {
        start: canonical(&window.start)?,
        end: canonical(&window.end)?,
        ..window
    })
}
