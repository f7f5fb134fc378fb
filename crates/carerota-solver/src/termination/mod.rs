//! Stopping rules for a rota run.
//!
//! The engine consults its termination before taking the next open shift
//! off the queue. A run that stops early is still a valid run: shifts not
//! yet reached stay open, and metrics, conflicts and the score are computed
//! over the schedule as it stands.

mod assignments;
mod cancel;
mod clock;
mod composite;

use std::fmt::Debug;

use crate::scope::RunScope;

pub use assignments::AssignmentLimitTermination;
pub use cancel::ExternalTermination;
pub use clock::{DeadlineTermination, TimeTermination};
pub use composite::OrTermination;

/// Decides whether a rota run should stop filling shifts.
pub trait Termination: Send + Debug {
    fn is_terminated(&self, scope: &RunScope) -> bool;
}

/// Fills every open shift it can.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _scope: &RunScope) -> bool {
        false
    }
}

/// An absent limit never stops the run, so optional config maps directly.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &RunScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}
