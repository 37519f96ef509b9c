//! Contains the choice-point abstraction: given the variables which still have to be labelled,
//! a [`ChoicePointStrategy`] selects one of them and produces the [`ChoicePoint`] to branch on.
//!
//! # Example
//! ```
//! # use labeling_core::branching::ChoicePointStrategy;
//! # use labeling_core::predicate;
//! # use labeling_core::Store;
//! let mut store = Store::default();
//! let x = store.new_bounded_integer(0, 9);
//! let y = store.new_bounded_integer(0, 3);
//!
//! let choice = ChoicePointStrategy::LargestDomainSplitLow.select(&store, &[x, y]);
//! assert_eq!(Some(predicate!(x <= 4)), choice.decision());
//! assert_eq!(Some(predicate!(x >= 5)), choice.negated_decision());
//! ```
mod choice_point;
mod choice_point_strategy;
pub mod tie_breaking;

pub use choice_point::ChoicePoint;
pub use choice_point_strategy::ChoicePointStrategy;
