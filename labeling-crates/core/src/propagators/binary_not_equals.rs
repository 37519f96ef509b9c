use super::PropagationContext;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator for `x != y`.
#[derive(Clone, Debug)]
pub struct BinaryNotEqualsPropagator {
    x: DomainId,
    y: DomainId,
}

impl BinaryNotEqualsPropagator {
    pub fn new(x: DomainId, y: DomainId) -> Self {
        BinaryNotEqualsPropagator { x, y }
    }
}

impl Propagator for BinaryNotEqualsPropagator {
    fn name(&self) -> &str {
        "BinaryNotEq"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        propagate_one_direction(self.x, self.y, context)?;
        propagate_one_direction(self.y, self.x, context)?;

        Ok(())
    }
}

fn propagate_one_direction(
    x: DomainId,
    y: DomainId,
    context: &mut PropagationContext<'_>,
) -> PropagationStatus {
    if !context.is_fixed(x) {
        return Ok(());
    }

    let value = context.lower_bound(x);
    context.post(predicate!(y != value))
}

#[cfg(test)]
mod tests {
    use crate::basic_types::ConstraintOperationError;
    use crate::constraints;
    use crate::engine::ReadDomains;
    use crate::Store;

    #[test]
    fn propagator_removes_from_y_the_fixed_value_of_x() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(1, 1);
        let y = store.new_bounded_integer(1, 10);

        store
            .add_constraint(constraints::binary_not_equals(x, y))
            .expect("feasible");

        assert_eq!(2, store.lower_bound(y));
    }

    #[test]
    fn propagator_removes_from_x_the_fixed_value_of_y() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(1, 10);
        let y = store.new_bounded_integer(10, 10);

        store
            .add_constraint(constraints::binary_not_equals(x, y))
            .expect("feasible");

        assert_eq!(9, store.upper_bound(x));
    }

    #[test]
    fn values_inside_the_interval_become_holes() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(1, 10);
        let y = store.new_bounded_integer(5, 5);

        store
            .add_constraint(constraints::binary_not_equals(x, y))
            .expect("feasible");

        assert_eq!((1, 10), (store.lower_bound(x), store.upper_bound(x)));
        assert!(!store.contains(x, 5));
        assert!(store.contains(x, 4));
    }

    #[test]
    fn equal_fixed_variables_are_infeasible() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(3, 3);
        let y = store.new_bounded_integer(3, 3);

        let result = store.add_constraint(constraints::binary_not_equals(x, y));
        assert_eq!(Err(ConstraintOperationError::InfeasiblePropagator), result);
    }
}
