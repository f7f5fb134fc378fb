//! Combining stopping rules.

use super::Termination;
use crate::scope::RunScope;

/// Stops as soon as any member of the tuple would.
///
/// Typical use pairs a time budget with a cancel flag:
///
/// ```
/// use std::sync::atomic::AtomicBool;
///
/// use carerota_solver::termination::{ExternalTermination, OrTermination, TimeTermination};
///
/// let manager_cancelled = AtomicBool::new(false);
/// let stop = OrTermination::new((
///     TimeTermination::seconds(30),
///     ExternalTermination::new(&manager_cancelled),
/// ));
/// # let _ = stop;
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(members: T) -> Self {
        Self(members)
    }
}

macro_rules! any_of {
    ($($idx:tt => $M:ident),+) => {
        impl<$($M: Termination),+> Termination for OrTermination<($($M,)+)> {
            fn is_terminated(&self, scope: &RunScope) -> bool {
                let members: &[&dyn Termination] = &[$(&(self.0).$idx),+];
                members.iter().any(|m| m.is_terminated(scope))
            }
        }
    };
}

any_of!(0 => A, 1 => B);
any_of!(0 => A, 1 => B, 2 => C);
any_of!(0 => A, 1 => B, 2 => C, 3 => D);
