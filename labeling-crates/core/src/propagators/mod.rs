//! Bounds-reasoning propagators used by the reference [`Store`](crate::Store).
//!
//! None of them achieve domain consistency; each only tightens bounds, or removes single values,
//! as implied by the current domains of the variables it is posted on. [`Store::consistency`]
//! runs all of them until none changes a domain anymore.
//!
//! [`Store::consistency`]: crate::ConstraintStore::consistency
mod all_different;
mod binary_not_equals;
mod distance;
mod element;
mod linear_equals;
mod reified_greater_than;

use std::fmt::Debug;

pub use all_different::AllDifferentPropagator;
pub use binary_not_equals::BinaryNotEqualsPropagator;
pub use distance::DistancePropagator;
pub use element::ElementPropagator;
pub use linear_equals::LinearEqualsPropagator;
pub use reified_greater_than::ReifiedGreaterThanPropagator;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::assignments::Assignments;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::predicate;

pub trait Propagator: Debug {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Tightens the domains of the variables of this propagator.
    ///
    /// Returns [`EmptyDomain`] if the constraint cannot be satisfied with
    /// the current domains. Running a propagator again without intermediate changes should not
    /// change any domain.
    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus;
}

/// Gives a [`Propagator`] access to the domains and records whether it changed any of them.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a mut Assignments,
    changed: bool,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments) -> Self {
        PropagationContext {
            assignments,
            changed: false,
        }
    }

    pub(crate) fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    pub fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    pub fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.assignments.is_domain_assigned(domain_id)
    }

    pub fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.assignments.contains(domain_id, value)
    }

    pub fn post(&mut self, predicate: Predicate) -> PropagationStatus {
        let changed = self.assignments.post_predicate(predicate)?;
        self.changed |= changed;
        Ok(())
    }

    /// Tightens the lower bound of `domain_id` to a bound which may lie outside of the `i32`
    /// range, as produced by arithmetic on 64-bit intermediate values.
    pub fn set_lower_bound(&mut self, domain_id: DomainId, bound: i64) -> PropagationStatus {
        if bound <= i64::from(self.lower_bound(domain_id)) {
            return Ok(());
        }
        if bound > i64::from(self.upper_bound(domain_id)) {
            return Err(EmptyDomain);
        }
        // The bound lies within the current domain, so it fits in an i32.
        self.post(predicate!(domain_id >= bound as i32))
    }

    /// See [`PropagationContext::set_lower_bound`].
    pub fn set_upper_bound(&mut self, domain_id: DomainId, bound: i64) -> PropagationStatus {
        if bound >= i64::from(self.upper_bound(domain_id)) {
            return Ok(());
        }
        if bound < i64::from(self.lower_bound(domain_id)) {
            return Err(EmptyDomain);
        }
        self.post(predicate!(domain_id <= bound as i32))
    }
}
