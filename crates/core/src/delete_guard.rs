//! Referential-delete guard.
//!
//! Deletes never cascade. A repository counts the rows that still point at
//! the target and feeds them to [`DeleteGuard`]; any non-zero count blocks the
//! delete with a message naming every blocking relation.

use crate::error::CoreError;

#[derive(Debug, Clone)]
pub struct DeleteGuard {
    entity: &'static str,
    blockers: Vec<(&'static str, i64)>,
}

impl DeleteGuard {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            blockers: Vec::new(),
        }
    }

    /// Record the number of rows in `relation` that reference the target.
    pub fn dependents(mut self, relation: &'static str, count: i64) -> Self {
        if count > 0 {
            self.blockers.push((relation, count));
        }
        self
    }

    pub fn is_clear(&self) -> bool {
        self.blockers.is_empty()
    }

    /// `Ok(())` when nothing references the target, otherwise a conflict.
    pub fn check(self) -> Result<(), CoreError> {
        if self.is_clear() {
            return Ok(());
        }
        let relations = self
            .blockers
            .iter()
            .map(|(relation, count)| format!("{relation} ({count})"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(CoreError::Conflict(format!(
            "Cannot delete {}: it is still referenced by {relations}",
            self.entity
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn no_dependents_passes() {
        let guard = DeleteGuard::new("airline")
            .dependents("aircraft", 0)
            .dependents("flights", 0);
        assert!(guard.is_clear());
        assert!(guard.check().is_ok());
    }

    #[test]
    fn any_dependent_blocks() {
        let err = DeleteGuard::new("airline")
            .dependents("aircraft", 2)
            .dependents("flights", 0)
            .check()
            .unwrap_err();
        assert_matches!(err, CoreError::Conflict(ref msg) if msg == "Cannot delete airline: it is still referenced by aircraft (2)");
    }

    #[test]
    fn every_blocking_relation_is_named() {
        let err = DeleteGuard::new("airport")
            .dependents("departure flights", 1)
            .dependents("arrival flights", 3)
            .dependents("terminals", 0)
            .dependents("stands", 1)
            .check()
            .unwrap_err()
            .to_string();
        assert!(err.contains("departure flights (1)"));
        assert!(err.contains("arrival flights (3)"));
        assert!(err.contains("stands (1)"));
        assert!(!err.contains("terminals"));
    }
}
