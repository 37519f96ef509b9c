use super::PropagationContext;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator for `reif <-> (x > constant)` where `reif` is a 0/1 variable.
#[derive(Clone, Debug)]
pub struct ReifiedGreaterThanPropagator {
    reif: DomainId,
    x: DomainId,
    constant: i32,
}

impl ReifiedGreaterThanPropagator {
    pub fn new(reif: DomainId, x: DomainId, constant: i32) -> Self {
        ReifiedGreaterThanPropagator { reif, x, constant }
    }
}

impl Propagator for ReifiedGreaterThanPropagator {
    fn name(&self) -> &str {
        "ReifiedGreaterThan"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        let reif = self.reif;
        let x = self.x;

        context.post(predicate!(reif >= 0))?;
        context.post(predicate!(reif <= 1))?;

        if context.lower_bound(x) > self.constant {
            context.post(predicate!(reif == 1))?;
        } else if context.upper_bound(x) <= self.constant {
            context.post(predicate!(reif == 0))?;
        }

        if context.is_fixed(reif) {
            if context.lower_bound(reif) == 1 {
                context.set_lower_bound(x, i64::from(self.constant) + 1)?;
            } else {
                context.set_upper_bound(x, i64::from(self.constant))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::constraints;
    use crate::engine::ConstraintStore;
    use crate::engine::ReadDomains;
    use crate::predicate;
    use crate::Store;

    #[test]
    fn reification_variable_is_restricted_to_a_boolean() {
        let mut store = Store::default();
        let reif = store.new_bounded_integer(-5, 5);
        let x = store.new_bounded_integer(0, 10);

        store
            .add_constraint(constraints::reified_greater_than(reif, x, 4))
            .expect("feasible");

        assert_eq!((0, 1), (store.lower_bound(reif), store.upper_bound(reif)));
    }

    #[test]
    fn entailed_comparison_fixes_the_reification() {
        let mut store = Store::default();
        let reif = store.new_bounded_integer(0, 1);
        let x = store.new_bounded_integer(0, 10);
        store
            .add_constraint(constraints::reified_greater_than(reif, x, 4))
            .expect("feasible");

        store.push_level();
        store.impose(predicate!(x >= 5));
        assert!(store.consistency());
        assert_eq!(1, store.lower_bound(reif));

        store.pop_level(0);
        store.push_level();
        store.impose(predicate!(x <= 4));
        assert!(store.consistency());
        assert_eq!(0, store.upper_bound(reif));
    }

    #[test]
    fn fixed_reification_bounds_the_variable() {
        let mut store = Store::default();
        let reif = store.new_bounded_integer(0, 1);
        let x = store.new_bounded_integer(0, 10);
        store
            .add_constraint(constraints::reified_greater_than(reif, x, 4))
            .expect("feasible");

        store.push_level();
        store.impose(predicate!(reif == 0));
        assert!(store.consistency());
        assert_eq!(4, store.upper_bound(x));

        store.pop_level(0);
        store.push_level();
        store.impose(predicate!(reif == 1));
        assert!(store.consistency());
        assert_eq!(5, store.lower_bound(x));
    }
}
