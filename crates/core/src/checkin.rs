//! Check-in and baggage rules.
//!
//! A ticket has at most one check-in. A check-in owns a replaceable set of
//! baggage rows; every write supplies the full set.

use crate::error::CoreError;
use crate::types::DbId;

/// Validate the declared baggage count.
pub fn validate_baggage_count(count: i32) -> Result<(), CoreError> {
    if count < 0 {
        return Err(CoreError::Validation(format!(
            "Baggage count must be a non-negative integer, got {count}"
        )));
    }
    Ok(())
}

/// Validate one bag of a check-in write. `index` is zero-based.
pub fn validate_bag(index: usize, weight_kg: f64, label_number: &str) -> Result<(), CoreError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CoreError::Validation(format!(
            "Bag #{}: weight must be a positive number of kilograms, got {weight_kg}",
            index + 1
        )));
    }
    if label_number.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Bag #{}: label number is required",
            index + 1
        )));
    }
    Ok(())
}

/// Ensure the ticket is not already checked in by a different check-in.
///
/// `holder` is the id of the check-in currently attached to the ticket (if
/// any); `current` is the check-in being updated, or `None` on create.
pub fn ensure_ticket_free(
    ticket_id: DbId,
    holder: Option<DbId>,
    current: Option<DbId>,
) -> Result<(), CoreError> {
    match holder {
        Some(existing) if Some(existing) != current => Err(CoreError::Conflict(format!(
            "Ticket {ticket_id} already has a check-in"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn zero_bags_is_valid() {
        assert!(validate_baggage_count(0).is_ok());
    }

    #[test]
    fn negative_count_rejected() {
        assert_matches!(validate_baggage_count(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn bag_weight_must_be_positive() {
        assert!(validate_bag(0, 23.5, "BG1").is_ok());
        assert!(validate_bag(0, 0.0, "BG1").is_err());
        assert!(validate_bag(0, -2.0, "BG1").is_err());
        assert!(validate_bag(0, f64::NAN, "BG1").is_err());
    }

    #[test]
    fn bag_label_required() {
        let err = validate_bag(2, 10.0, " ").unwrap_err();
        assert!(err.to_string().contains("Bag #3"));
    }

    #[test]
    fn free_ticket_accepts_create() {
        assert!(ensure_ticket_free(7, None, None).is_ok());
    }

    #[test]
    fn held_ticket_rejects_create() {
        let err = ensure_ticket_free(7, Some(1), None).unwrap_err();
        assert_matches!(err, CoreError::Conflict(ref msg) if msg.contains("already has a check-in"));
    }

    #[test]
    fn update_of_the_holder_is_allowed() {
        assert!(ensure_ticket_free(7, Some(1), Some(1)).is_ok());
    }

    #[test]
    fn moving_to_a_held_ticket_is_rejected() {
        assert!(ensure_ticket_free(7, Some(1), Some(2)).is_err());
    }
}
