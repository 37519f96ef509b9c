use thiserror::Error;

#[cfg(doc)]
use crate::Store;

/// Errors related to adding constraints to the [`Store`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// Error which indicates that a constraint was attempted to be added while the [`Store`] was
    /// in an infeasible state.
    #[error("Adding constraint failed because the store is in an infeasible state")]
    InfeasibleState,
    /// Error which indicates that adding a propagator led to infeasibility at the root.
    #[error("Adding the constraint failed because it is infeasible at the root")]
    InfeasiblePropagator,
    /// Error which indicates that constraints can only be added at the root level.
    #[error("Constraints can only be added at the root, the store is at level {0}")]
    NotAtRoot(usize),
}
