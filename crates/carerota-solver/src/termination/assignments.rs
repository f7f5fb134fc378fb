//! Capping how many changes one run proposes.

use super::Termination;
use crate::scope::RunScope;

/// Stops once the run has made `limit` new assignments.
///
/// Lets a manager review a rota in batches instead of approving a whole
/// month of changes at once. Shifts are still taken in queue order, so the
/// hardest-to-staff shifts are filled first.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentLimitTermination {
    limit: usize,
}

impl AssignmentLimitTermination {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for AssignmentLimitTermination {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        scope.statistics().assignments_made >= self.limit
    }
}
