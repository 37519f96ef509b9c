//! # Labeling
//! A branch-and-bound labelling engine for finite-domain constraint problems.
//!
//! The engine ([`search::DepthFirstSearch`]) explores the assignments of a set of variables
//! depth-first on top of any [`ConstraintStore`]: at every node it checks the consistency of
//! the store, asks a [`branching::ChoicePointStrategy`] for a decision and explores the decision
//! and its negation on separate levels of the store. In optimisation mode every solution
//! tightens the bound on the objective, so that the last reported solution is optimal.
//!
//! The crate ships a reference [`Store`] with interval domains and a handful of bounds
//! propagators (see [`constraints`]), which is sufficient to model small problems:
//! ```rust
//! # use labeling_core::constraints;
//! # use labeling_core::search::DepthFirstSearch;
//! # use labeling_core::search::SearchOptions;
//! # use labeling_core::search::SearchResult;
//! # use labeling_core::search::SolutionReport;
//! # use labeling_core::Store;
//! let mut store = Store::default();
//! let variables = (0..3)
//!     .map(|_| store.new_bounded_integer(1, 3))
//!     .collect::<Vec<_>>();
//! store
//!     .add_constraint(constraints::all_different(variables.clone()))
//!     .expect("feasible");
//!
//! let mut search = DepthFirstSearch::new(SearchOptions::default(), |report: &SolutionReport<'_>| {
//!     for variable in &report.variables {
//!         println!("{variable}");
//!     }
//! });
//! let result = search.label(&mut store, &variables);
//! assert!(matches!(result, SearchResult::Satisfiable(_)));
//! ```
#[doc(hidden)]
pub mod asserts;
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod propagators;
pub mod search;
pub mod statistics;

pub use convert_case;

pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::Solution;
pub use crate::engine::predicates;
pub use crate::engine::variables;
pub use crate::engine::ConstraintStore;
pub use crate::engine::ReadDomains;
pub use crate::engine::Store;
