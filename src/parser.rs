use crate::schedule::ScheduleError;

/// Parses a user-entered duration and checks it fits the day (1..=max)
pub fn parse_duration(input: &str, max: usize) -> Result<usize, ScheduleError> {
    let invalid = || ScheduleError::InvalidDuration {
        input: input.trim().to_string(),
        max,
    };
    let duration: usize = input.trim().parse().map_err(|_| invalid())?;
    if duration < 1 || duration > max {
        return Err(invalid());
    }
    Ok(duration)
}

/// Checks a chosen start time against the slot catalog. An empty choice is
/// refused; the allocator never looks at the result.
pub fn parse_start_time(input: Option<&str>, time_slots: &[String]) -> Result<String, ScheduleError> {
    let label = input.map(str::trim).unwrap_or("");
    if label.is_empty() {
        return Err(ScheduleError::MissingStartTime);
    }
    if !time_slots.iter().any(|slot| slot == label) {
        return Err(ScheduleError::UnknownStartTime(label.to_string()));
    }
    Ok(label.to_string())
}

/// A meeting request as typed on the command line: `3` or `3@9:00`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingArg {
    pub duration: String,
    pub start_time: Option<String>,
}

pub fn parse_meeting_arg(arg: &str) -> MeetingArg {
    match arg.split_once('@') {
        Some((duration, start)) => MeetingArg {
            duration: duration.to_string(),
            start_time: Some(start.to_string()),
        },
        None => MeetingArg {
            duration: arg.to_string(),
            start_time: None,
        },
    }
}
