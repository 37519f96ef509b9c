use crate::basic_types::EmptyDomain;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainGeneratorIterator;
use crate::engine::variables::DomainId;

#[cfg(doc)]
use crate::branching::ChoicePointStrategy;
#[cfg(doc)]
use crate::search::DepthFirstSearch;

/// Read-only access to the current bounds of the domains.
///
/// This is all that a [`ChoicePointStrategy`] needs to select a variable and a split value.
pub trait ReadDomains {
    fn lower_bound(&self, domain_id: DomainId) -> i32;

    fn upper_bound(&self, domain_id: DomainId) -> i32;

    fn num_domains(&self) -> usize;

    /// Returns all the [`DomainId`]s known to the store in creation order.
    fn get_domains(&self) -> DomainGeneratorIterator;

    /// The name given to `domain_id` when it was created, if any.
    fn get_name(&self, _domain_id: DomainId) -> Option<&str> {
        None
    }

    fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.lower_bound(domain_id) == self.upper_bound(domain_id)
    }

    /// Whether `value` is still in the domain of `domain_id`.
    fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.lower_bound(domain_id) <= value && value <= self.upper_bound(domain_id)
    }

    /// The span `upper_bound - lower_bound` of the domain; zero iff the domain is fixed.
    fn domain_span(&self, domain_id: DomainId) -> i64 {
        self.upper_bound(domain_id) as i64 - self.lower_bound(domain_id) as i64
    }
}

/// The interface which the [`DepthFirstSearch`] requires from a propagation store.
///
/// Levels form a stack: level 0 is the root and [`ConstraintStore::push_level`] opens a new level
/// on top. Every domain change is recorded at the level which is open at the time of the change,
/// and popping restores exactly the changes recorded above the target level.
pub trait ConstraintStore: ReadDomains {
    /// Propagates all constraints to a fixed point and reports whether the store is still
    /// consistent. Calling this repeatedly without intermediate changes yields the same answer.
    fn consistency(&mut self) -> bool;

    fn current_level(&self) -> usize;

    fn push_level(&mut self);

    /// Undoes every domain change recorded above `target_level` and makes `target_level` the
    /// current level. Requires `target_level <= self.current_level()`.
    fn pop_level(&mut self, target_level: usize);

    /// Removes the topmost level marker while keeping its domain changes; they now belong to the
    /// level below and are undone together with it.
    fn retire_level(&mut self);

    /// Imposes a branching decision at the current level. If the decision empties a domain then
    /// the store is inconsistent until the current level is popped.
    fn impose(&mut self, predicate: Predicate);

    /// Narrows the upper bound of `domain_id` without posting a constraint.
    fn tighten_upper_bound(&mut self, domain_id: DomainId, bound: i32) -> Result<(), EmptyDomain>;

    /// Narrows the lower bound of `domain_id` without posting a constraint.
    fn tighten_lower_bound(&mut self, domain_id: DomainId, bound: i32) -> Result<(), EmptyDomain>;
}
