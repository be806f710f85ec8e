//! Crew composition rules.
//!
//! A flight has at most one crew. A crew owns a non-empty, replaceable list
//! of `(personnel, role)` assignments.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate the list of personnel ids assigned to a crew.
///
/// The list must be non-empty and must not name the same person twice.
pub fn validate_member_ids(personnel_ids: &[DbId]) -> Result<(), CoreError> {
    if personnel_ids.is_empty() {
        return Err(CoreError::Validation(
            "A crew must have at least one member".into(),
        ));
    }
    let mut seen = HashSet::with_capacity(personnel_ids.len());
    for id in personnel_ids {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Personnel {id} is listed more than once"
            )));
        }
    }
    Ok(())
}

/// Report the first requested personnel id that was not found.
///
/// `found` holds the ids that exist in storage; order of `requested` is kept
/// so the error names the first offending entry of the request.
pub fn ensure_personnel_exist(requested: &[DbId], found: &[DbId]) -> Result<(), CoreError> {
    let found: HashSet<DbId> = found.iter().copied().collect();
    match requested.iter().find(|id| !found.contains(id)) {
        Some(missing) => Err(CoreError::missing_reference("Personnel", *missing)),
        None => Ok(()),
    }
}

/// Ensure the flight is not already crewed by a different crew.
pub fn ensure_flight_free(
    flight_id: DbId,
    holder: Option<DbId>,
    current: Option<DbId>,
) -> Result<(), CoreError> {
    match holder {
        Some(existing) if Some(existing) != current => Err(CoreError::Conflict(format!(
            "Flight {flight_id} already has a crew"
        ))),
        _ => Ok(()),
    }
}
