//! Maintenance window rules.

use crate::error::CoreError;
use crate::types::Timestamp;

/// An open-ended window (`end_time = None`) means the aircraft is still in
/// maintenance. A closed window must end strictly after it starts.
pub fn validate_window(start_time: Timestamp, end_time: Option<Timestamp>) -> Result<(), CoreError> {
    match end_time {
        Some(end) if end <= start_time => Err(CoreError::Validation(
            "Maintenance end time must be later than start time".into(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn open_window_is_valid() {
        assert!(validate_window(ts("2025-06-20T10:00:00Z"), None).is_ok());
    }

    #[test]
    fn closed_window_must_move_forward() {
        let start = ts("2025-06-20T10:00:00Z");
        assert!(validate_window(start, Some(ts("2025-06-20T12:00:00Z"))).is_ok());
        assert!(validate_window(start, Some(start)).is_err());
        assert!(validate_window(start, Some(ts("2025-06-20T09:00:00Z"))).is_err());
    }
}
