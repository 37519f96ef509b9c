//! The branch-and-bound depth-first search.
//!
//! Every node of the search tree checks the consistency of the store. At a node where variables
//! remain, the [`ChoicePointStrategy`] produces a decision; the search pushes a level, imposes
//! the decision and explores that subtree. If it fails, the level is popped and the negated
//! decision is explored in a fresh level. When optimising, every node first requires the
//! objective to improve on the best solution found so far.
//!
//! # Example
//! ```
//! # use labeling_core::constraints;
//! # use labeling_core::optimisation::OptimisationDirection;
//! # use labeling_core::search::DepthFirstSearch;
//! # use labeling_core::search::SearchMode;
//! # use labeling_core::search::SearchOptions;
//! # use labeling_core::search::SearchResult;
//! # use labeling_core::search::SolutionReport;
//! # use labeling_core::Store;
//! let mut store = Store::default();
//! let x = store.new_bounded_integer(1, 3);
//! let y = store.new_bounded_integer(1, 3);
//! let total = store.new_bounded_integer(0, 6);
//! store.add_constraint(constraints::binary_not_equals(x, y)).expect("feasible");
//! store.add_constraint(constraints::sum_equals(vec![x, y], total)).expect("feasible");
//!
//! let options = SearchOptions {
//!     mode: SearchMode::Optimise {
//!         objective: total,
//!         direction: OptimisationDirection::Minimise,
//!     },
//!     ..Default::default()
//! };
//! let mut costs = Vec::new();
//! let mut search = DepthFirstSearch::new(options, |report: &SolutionReport<'_>| {
//!     costs.push(report.objective_value)
//! });
//!
//! let result = search.label(&mut store, &[x, y]);
//! assert!(matches!(result, SearchResult::Optimal { objective_value: 3, .. }));
//! drop(search);
//! assert_eq!(Some(Some(3)), costs.last().copied());
//! ```
mod reporter;
mod results;
mod search_context;
mod search_statistics;

use std::time::Instant;

use log::debug;
use log::warn;
pub use reporter::ReportedVariable;
pub use reporter::SolutionReport;
pub use reporter::SolutionReporter;
pub use results::SearchResult;
use search_context::SearchContext;
pub use search_statistics::SearchStatistics;

use crate::branching::ChoicePointStrategy;
use crate::engine::variables::DomainId;
use crate::engine::ConstraintStore;
use crate::optimisation::OptimisationDirection;

/// What the search does with a complete assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Stop at the first solution.
    #[default]
    Satisfy,
    /// Report every solution of the tree.
    Enumerate,
    /// Report every improving solution and continue until no better one exists.
    Optimise {
        objective: DomainId,
        direction: OptimisationDirection,
    },
}

/// The configuration of a [`DepthFirstSearch`].
#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub strategy: ChoicePointStrategy,
    pub mode: SearchMode,
    /// The variables included in every [`SolutionReport`]; if empty, the variables which are
    /// labelled are reported.
    pub reported_variables: Vec<DomainId>,
}

/// A depth-first labelling search over a [`ConstraintStore`].
#[derive(Debug)]
pub struct DepthFirstSearch<Reporter> {
    options: SearchOptions,
    reporter: Reporter,
    statistics: SearchStatistics,
}

impl<Reporter: SolutionReporter> DepthFirstSearch<Reporter> {
    pub fn new(options: SearchOptions, reporter: Reporter) -> Self {
        DepthFirstSearch {
            options,
            reporter,
            statistics: SearchStatistics::default(),
        }
    }

    /// The statistics of the last [`DepthFirstSearch::label`] call.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Searches for an assignment of `variables` which is consistent with `store`.
    ///
    /// The statistics are reset at the start of every call. The search runs in a level of its own
    /// on top of the current one. When a solution is accepted in [`SearchMode::Satisfy`], that
    /// level is retired and the store keeps the prunings which led to it; otherwise the level is
    /// popped and the store is returned in the state it was in before the call, including any
    /// propagation the root node performed.
    pub fn label<Store: ConstraintStore>(
        &mut self,
        store: &mut Store,
        variables: &[DomainId],
    ) -> SearchResult {
        let start = Instant::now();
        self.statistics = SearchStatistics::default();

        if variables.is_empty() {
            warn!("The search was not provided with any variables to label");
        }
        debug!(
            "Labelling {} variables with {} in mode {:?}",
            variables.len(),
            self.options.strategy,
            self.options.mode
        );

        let reported_variables = if self.options.reported_variables.is_empty() {
            variables
        } else {
            self.options.reported_variables.as_slice()
        };

        let entry_level = store.current_level();
        store.push_level();

        let mut context = SearchContext {
            root_level: entry_level + 1,
            store,
            strategy: self.options.strategy,
            mode: self.options.mode,
            reporter: &mut self.reporter,
            statistics: &mut self.statistics,
            reported_variables,
            best_objective_value: None,
            best_solution: None,
        };

        if context.label(variables) {
            context.store.retire_level();
        } else {
            context.store.pop_level(entry_level);
        }

        let best_objective_value = context.best_objective_value;
        let best_solution = context.best_solution.take();

        self.statistics.time_spent = start.elapsed();
        debug!(
            "Search finished after {} nodes with {} wrong decisions",
            self.statistics.num_nodes, self.statistics.num_wrong_decisions
        );

        match (self.options.mode, best_solution, best_objective_value) {
            (_, None, _) => SearchResult::Unsatisfiable,
            (SearchMode::Optimise { .. }, Some(solution), Some(objective_value)) => {
                SearchResult::Optimal {
                    solution,
                    objective_value,
                }
            }
            (_, Some(solution), _) => SearchResult::Satisfiable(solution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DepthFirstSearch;
    use super::SearchMode;
    use super::SearchOptions;
    use super::SearchResult;
    use super::SolutionReport;
    use crate::branching::ChoicePointStrategy;
    use crate::constraints;
    use crate::engine::ConstraintStore;
    use crate::engine::ReadDomains;
    use crate::optimisation::OptimisationDirection;
    use crate::predicate;
    use crate::Store;

    fn no_reporter() -> Option<fn(&SolutionReport<'_>)> {
        None
    }

    #[test]
    fn fixed_variables_need_a_single_node() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(4, 4);
        let y = store.new_bounded_integer(2, 2);

        let mut search = DepthFirstSearch::new(SearchOptions::default(), no_reporter());
        let result = search.label(&mut store, &[x, y]);

        let solution = result.solution().expect("satisfiable");
        assert_eq!(Some(4), solution.value(x));
        assert_eq!(1, search.statistics().num_nodes);
        assert_eq!(0, search.statistics().peak_depth);
    }

    #[test]
    fn satisfying_search_keeps_the_solution_in_the_store() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 7);
        let y = store.new_bounded_integer(0, 7);
        store
            .add_constraint(constraints::linear_equals(vec![(1, x), (2, y)], 9))
            .expect("feasible");

        let mut search = DepthFirstSearch::new(SearchOptions::default(), no_reporter());
        let result = search.label(&mut store, &[x, y]);

        assert!(matches!(result, SearchResult::Satisfiable(_)));
        assert_eq!(0, store.current_level());
        assert!(store.is_fixed(x) && store.is_fixed(y));
        assert_eq!(9, store.lower_bound(x) + 2 * store.lower_bound(y));
    }

    #[test]
    fn exhausted_searches_restore_the_store() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 3);
        let y = store.new_bounded_integer(0, 3);
        store
            .add_constraint(constraints::binary_not_equals(x, y))
            .expect("feasible");

        let options = SearchOptions {
            mode: SearchMode::Enumerate,
            ..Default::default()
        };
        let mut count = 0;
        let mut search = DepthFirstSearch::new(options, |_: &SolutionReport<'_>| count += 1);
        let result = search.label(&mut store, &[x, y]);
        let statistics = *search.statistics();
        drop(search);

        assert!(matches!(result, SearchResult::Satisfiable(_)));
        assert_eq!(12, count);
        assert_eq!(12, statistics.num_solutions);
        assert_eq!((0, 3), (store.lower_bound(x), store.upper_bound(x)));
        assert_eq!(0, store.num_trail_entries());
    }

    #[test]
    fn root_propagation_is_undone_after_enumeration() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(1, 3);
        let y = store.new_bounded_integer(1, 3);
        store
            .add_constraint(constraints::binary_not_equals(x, y))
            .expect("feasible");
        store.impose(predicate!(x == 1));

        let options = SearchOptions {
            mode: SearchMode::Enumerate,
            ..Default::default()
        };
        let mut search = DepthFirstSearch::new(options, no_reporter());
        let result = search.label(&mut store, &[x, y]);

        assert!(matches!(result, SearchResult::Satisfiable(_)));
        assert_eq!(2, search.statistics().num_solutions);
        assert_eq!(0, store.current_level());
        assert_eq!((1, 1), (store.lower_bound(x), store.upper_bound(x)));
        assert_eq!((1, 3), (store.lower_bound(y), store.upper_bound(y)));
    }

    #[test]
    fn imposed_interior_disequalities_hold_in_the_solution() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 10);
        store.impose(predicate!(x != 5));
        store.impose(predicate!(x >= 5));

        let mut search = DepthFirstSearch::new(SearchOptions::default(), no_reporter());
        let result = search.label(&mut store, &[x]);

        let solution = result.solution().expect("satisfiable");
        assert_eq!(Some(6), solution.value(x));
    }

    #[test]
    fn maximisation_finds_the_largest_objective() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 5);
        let y = store.new_bounded_integer(0, 5);
        let total = store.new_bounded_integer(-100, 100);
        store
            .add_constraint(constraints::sum_equals(vec![x, y], total))
            .expect("feasible");
        store
            .add_constraint(constraints::linear_equals(vec![(1, x), (-1, y)], 1))
            .expect("feasible");

        for strategy in [
            ChoicePointStrategy::LargestDomainSplitLow,
            ChoicePointStrategy::SmallestDomainSplitHigh,
            ChoicePointStrategy::InputOrderAssignMin,
        ] {
            let options = SearchOptions {
                strategy,
                mode: SearchMode::Optimise {
                    objective: total,
                    direction: OptimisationDirection::Maximise,
                },
                ..Default::default()
            };
            let mut search = DepthFirstSearch::new(options, no_reporter());
            let result = search.label(&mut store, &[x, y]);

            match result {
                SearchResult::Optimal {
                    solution,
                    objective_value,
                } => {
                    assert_eq!(9, objective_value);
                    assert_eq!(Some(5), solution.value(x));
                    assert_eq!(Some(4), solution.value(y));
                }
                other => panic!("expected an optimal result, got {other:?}"),
            }
        }
    }

    #[test]
    fn labelling_no_variables_checks_the_store_once() {
        let mut store = Store::default();
        let _ = store.new_bounded_integer(0, 3);

        let mut search = DepthFirstSearch::new(SearchOptions::default(), no_reporter());
        let result = search.label(&mut store, &[]);

        assert!(matches!(result, SearchResult::Satisfiable(_)));
        assert_eq!(1, search.statistics().num_nodes);
    }
}
