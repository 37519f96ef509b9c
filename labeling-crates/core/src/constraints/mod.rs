//! Defines the constraints which the reference [`Store`] provides out of the box.
//!
//! A constraint is a relation over variables; in the store every constraint is enforced by
//! exactly one propagator from [`crate::propagators`].
//!
//! # Example
//! ```
//! # use labeling_core::constraints;
//! # use labeling_core::ReadDomains;
//! # use labeling_core::Store;
//! let mut store = Store::default();
//!
//! let a = store.new_bounded_integer(0, 3);
//! let b = store.new_bounded_integer(0, 3);
//!
//! store
//!     .add_constraint(constraints::linear_equals(vec![(1, a), (1, b)], 6))
//!     .expect("a + b = 6 is feasible");
//!
//! assert_eq!(3, store.lower_bound(a));
//! ```

use crate::propagators::AllDifferentPropagator;
use crate::propagators::BinaryNotEqualsPropagator;
use crate::propagators::DistancePropagator;
use crate::propagators::ElementPropagator;
use crate::propagators::LinearEqualsPropagator;
use crate::propagators::ReifiedGreaterThanPropagator;
use crate::variables::DomainId;
#[cfg(doc)]
use crate::Store;

/// Creates the constraint that enforces that all the given `variables` are distinct.
pub fn all_different(variables: impl Into<Box<[DomainId]>>) -> AllDifferentPropagator {
    AllDifferentPropagator::new(variables)
}

/// Creates the constraint `lhs != rhs`.
pub fn binary_not_equals(lhs: DomainId, rhs: DomainId) -> BinaryNotEqualsPropagator {
    BinaryNotEqualsPropagator::new(lhs, rhs)
}

/// Creates the constraint `\sum weight_i * x_i = rhs`.
pub fn linear_equals(
    terms: impl IntoIterator<Item = (i32, DomainId)>,
    rhs: i32,
) -> LinearEqualsPropagator {
    LinearEqualsPropagator::new(terms, rhs)
}

/// Creates the constraint `\sum terms_i = total`.
pub fn sum_equals(
    terms: impl IntoIterator<Item = DomainId>,
    total: DomainId,
) -> LinearEqualsPropagator {
    linear_equals(
        terms
            .into_iter()
            .map(|x| (1, x))
            .chain(std::iter::once((-1, total))),
        0,
    )
}

/// Creates the constraint `|x - y| = distance`.
pub fn distance(x: DomainId, y: DomainId, distance: DomainId) -> DistancePropagator {
    DistancePropagator::new(x, y, distance)
}

/// Creates the constraint `reif <-> (x > constant)`; `reif` is restricted to `{0, 1}`.
pub fn reified_greater_than(
    reif: DomainId,
    x: DomainId,
    constant: i32,
) -> ReifiedGreaterThanPropagator {
    ReifiedGreaterThanPropagator::new(reif, x, constant)
}

/// Creates the constraint `value = table[index]` with a 1-based `index`.
pub fn element(
    index: DomainId,
    table: impl Into<Box<[i32]>>,
    value: DomainId,
) -> ElementPropagator {
    ElementPropagator::new(index, table, value)
}
