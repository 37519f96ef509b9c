use log::debug;
use log::warn;

use super::assignments::Assignments;
use super::variable_names::VariableNames;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainGeneratorIterator;
use crate::engine::variables::DomainId;
use crate::engine::ConstraintStore;
use crate::engine::ReadDomains;
use crate::labeling_assert_simple;
use crate::predicate;
use crate::propagators::PropagationContext;
use crate::propagators::Propagator;

/// The reference [`ConstraintStore`]: interval domains with holes, a leveled trail and a list of
/// propagators which are run to a fixed point on every [`ConstraintStore::consistency`] call.
///
/// # Example
/// ```rust
/// # use labeling_core::constraints;
/// # use labeling_core::ConstraintStore;
/// # use labeling_core::ReadDomains;
/// # use labeling_core::Store;
/// let mut store = Store::default();
/// let x = store.new_bounded_integer(1, 3);
/// let y = store.new_named_bounded_integer(3, 3, "y");
///
/// store
///     .add_constraint(constraints::binary_not_equals(x, y))
///     .expect("the constraint is feasible");
///
/// assert_eq!(2, store.upper_bound(x));
/// assert_eq!(Some(y), store.get_domain_by_name("y"));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    assignments: Assignments,
    propagators: Vec<Box<dyn Propagator>>,
    /// The lowest level at which a domain was emptied; the store stays inconsistent until this
    /// level is popped.
    inconsistent_since: Option<usize>,
    variable_names: VariableNames,
}

impl Store {
    /// Creates a new integer variable with the domain `[lower_bound, upper_bound]`.
    ///
    /// Variables can only be created at the root.
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.assignments.grow(lower_bound, upper_bound)
    }

    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        let domain_id = self.new_bounded_integer(lower_bound, upper_bound);
        self.variable_names.add_integer(domain_id, name.into());
        domain_id
    }

    pub fn get_domain_by_name(&self, name: &str) -> Option<DomainId> {
        self.variable_names.get_domain_by_name(name)
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    /// Whether an emptied domain has been recorded and not yet undone by popping.
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent_since.is_some()
    }

    /// The number of domain changes that are currently recorded on the trail.
    pub fn num_trail_entries(&self) -> usize {
        self.assignments.num_trail_entries()
    }

    /// Posts a propagator at the root and propagates it together with the existing ones.
    ///
    /// If the root becomes infeasible, the store stays infeasible and
    /// [`ConstraintOperationError::InfeasiblePropagator`] is returned; any further constraint
    /// is refused with [`ConstraintOperationError::InfeasibleState`].
    pub fn add_constraint(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<(), ConstraintOperationError> {
        if self.current_level() != 0 {
            return Err(ConstraintOperationError::NotAtRoot(self.current_level()));
        }

        if self.is_inconsistent() {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        debug!("Posting {}", propagator.name());
        self.propagators.push(Box::new(propagator));

        if self.consistency() {
            Ok(())
        } else {
            warn!("The store became infeasible at the root");
            Err(ConstraintOperationError::InfeasiblePropagator)
        }
    }

    fn propagate_to_fixed_point(&mut self) -> PropagationStatus {
        loop {
            let mut changed = false;

            for propagator in &self.propagators {
                let mut context = PropagationContext::new(&mut self.assignments);
                propagator.propagate(&mut context)?;
                changed |= context.has_changed();
            }

            if !changed {
                return Ok(());
            }
        }
    }

    fn mark_inconsistent(&mut self) {
        let level = self.current_level();
        if self.inconsistent_since.map_or(true, |since| level < since) {
            self.inconsistent_since = Some(level);
        }
    }

    fn post(&mut self, predicate: Predicate) -> Result<(), EmptyDomain> {
        if self.is_inconsistent() {
            return Err(EmptyDomain);
        }

        match self.assignments.post_predicate(predicate) {
            Ok(_) => Ok(()),
            Err(EmptyDomain) => {
                self.mark_inconsistent();
                Err(EmptyDomain)
            }
        }
    }
}

impl ReadDomains for Store {
    fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_lower_bound(domain_id)
    }

    fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.assignments.get_upper_bound(domain_id)
    }

    fn num_domains(&self) -> usize {
        self.assignments.num_domains() as usize
    }

    fn get_domains(&self) -> DomainGeneratorIterator {
        self.assignments.get_domains()
    }

    fn get_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(domain_id)
    }

    fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.assignments.is_domain_assigned(domain_id)
    }

    fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.assignments.contains(domain_id, value)
    }
}

impl ConstraintStore for Store {
    fn consistency(&mut self) -> bool {
        if self.is_inconsistent() {
            return false;
        }

        match self.propagate_to_fixed_point() {
            Ok(()) => true,
            Err(EmptyDomain) => {
                self.mark_inconsistent();
                false
            }
        }
    }

    fn current_level(&self) -> usize {
        self.assignments.get_level()
    }

    fn push_level(&mut self) {
        self.assignments.increase_level()
    }

    fn pop_level(&mut self, target_level: usize) {
        labeling_assert_simple!(
            target_level <= self.current_level(),
            "cannot pop to level {target_level} from level {}",
            self.current_level()
        );

        self.assignments.synchronise(target_level);

        if self
            .inconsistent_since
            .is_some_and(|since| since > target_level)
        {
            self.inconsistent_since = None;
        }
    }

    fn retire_level(&mut self) {
        self.assignments.merge_level();

        let level = self.current_level();
        if let Some(since) = self.inconsistent_since.as_mut() {
            *since = (*since).min(level);
        }
    }

    fn impose(&mut self, predicate: Predicate) {
        // An emptied domain is remembered and reported by the next consistency check.
        let _ = self.post(predicate);
    }

    fn tighten_upper_bound(&mut self, domain_id: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.post(predicate!(domain_id <= bound))
    }

    fn tighten_lower_bound(&mut self, domain_id: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.post(predicate!(domain_id >= bound))
    }
}
