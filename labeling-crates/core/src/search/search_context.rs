use itertools::Itertools;
use log::debug;
use log::log_enabled;
use log::trace;
use log::warn;
use log::Level;

use super::ReportedVariable;
use super::SearchMode;
use super::SearchStatistics;
use super::SolutionReport;
use super::SolutionReporter;
use crate::basic_types::Solution;
use crate::branching::ChoicePointStrategy;
use crate::engine::variables::DomainId;
use crate::engine::ConstraintStore;
use crate::labeling_assert_moderate;
use crate::optimisation::OptimisationDirection;

/// The state which is threaded through the recursion of a single search.
#[derive(Debug)]
pub(crate) struct SearchContext<'a, Store, Reporter> {
    pub(crate) store: &'a mut Store,
    pub(crate) strategy: ChoicePointStrategy,
    pub(crate) mode: SearchMode,
    pub(crate) reporter: &'a mut Reporter,
    pub(crate) statistics: &'a mut SearchStatistics,
    /// The variables whose values are put in every [`SolutionReport`]
    pub(crate) reported_variables: &'a [DomainId],
    /// The level of the store when the search started
    pub(crate) root_level: usize,
    pub(crate) best_objective_value: Option<i32>,
    pub(crate) best_solution: Option<Solution>,
}

impl<Store: ConstraintStore, Reporter: SolutionReporter> SearchContext<'_, Store, Reporter> {
    /// Explores the subtree in which `variables` still have to be labelled.
    ///
    /// Returns `true` only if a solution was accepted and the search should stop; the store is
    /// then left at the level it had on entry, with all prunings of the accepted path retained.
    /// Otherwise every change made below the entry level has been undone.
    pub(crate) fn label(&mut self, variables: &[DomainId]) -> bool {
        if !self.tighten_objective_bound() {
            return false;
        }

        let consistent = self.store.consistency();
        self.statistics.num_nodes += 1;

        if !consistent {
            self.statistics.num_wrong_decisions += 1;
            return false;
        }

        if variables.is_empty() {
            return self.on_complete_assignment();
        }

        self.trace_node(variables);

        let choice = self.strategy.select(&*self.store, variables);
        let Some(decision) = choice.decision() else {
            return self.label(choice.remaining());
        };

        let node_level = self.store.current_level();

        self.store.push_level();
        self.update_peak_depth();
        self.store.impose(decision);
        if self.label(choice.remaining()) {
            self.store.retire_level();
            return true;
        }
        self.store.pop_level(node_level);

        self.store.push_level();
        self.store.impose(!decision);
        if self.label(variables) {
            self.store.retire_level();
            true
        } else {
            self.store.pop_level(node_level);
            false
        }
    }

    /// Requires the objective to improve on the best value found so far. Returns `false` if no
    /// better value remains in its domain.
    fn tighten_objective_bound(&mut self) -> bool {
        let SearchMode::Optimise {
            objective,
            direction,
        } = self.mode
        else {
            return true;
        };
        let Some(best) = self.best_objective_value else {
            return true;
        };

        let result = match direction {
            OptimisationDirection::Minimise => best
                .checked_sub(1)
                .map(|bound| self.store.tighten_upper_bound(objective, bound)),
            OptimisationDirection::Maximise => best
                .checked_add(1)
                .map(|bound| self.store.tighten_lower_bound(objective, bound)),
        };

        matches!(result, Some(Ok(())))
    }

    fn on_complete_assignment(&mut self) -> bool {
        self.statistics.num_solutions += 1;

        let objective_value = self.read_objective_value();
        if let Some(value) = objective_value {
            labeling_assert_moderate!(
                self.best_objective_value.map_or(true, |best| {
                    self.mode_direction()
                        .is_some_and(|direction| direction.improves(value, best))
                }),
                "a reported objective value must improve on the previous one"
            );
            self.best_objective_value = Some(value);
        }

        let solution = Solution::from_domains(&*self.store);
        let variables = self
            .reported_variables
            .iter()
            .map(|&domain_id| ReportedVariable {
                domain_id,
                name: self
                    .store
                    .get_name(domain_id)
                    .map_or_else(|| domain_id.to_string(), str::to_owned),
                lower_bound: self.store.lower_bound(domain_id),
                upper_bound: self.store.upper_bound(domain_id),
            })
            .collect::<Vec<_>>();

        debug!(
            "Solution {} found after {} nodes ({} wrong decisions){}: {}",
            self.statistics.num_solutions,
            self.statistics.num_nodes,
            self.statistics.num_wrong_decisions,
            objective_value.map_or_else(String::new, |value| format!(" with objective {value}")),
            solution.describe(self.reported_variables),
        );

        self.reporter.on_solution(&SolutionReport {
            objective_value,
            num_nodes: self.statistics.num_nodes,
            num_wrong_decisions: self.statistics.num_wrong_decisions,
            variables,
            solution: &solution,
        });
        self.best_solution = Some(solution);

        matches!(self.mode, SearchMode::Satisfy)
    }

    fn read_objective_value(&self) -> Option<i32> {
        let SearchMode::Optimise {
            objective,
            direction,
        } = self.mode
        else {
            return None;
        };

        if !self.store.is_fixed(objective) {
            warn!(
                "The objective {objective} is not fixed by the labelled variables; using its {} bound",
                match direction {
                    OptimisationDirection::Minimise => "lower",
                    OptimisationDirection::Maximise => "upper",
                }
            );
        }

        Some(match direction {
            OptimisationDirection::Minimise => self.store.lower_bound(objective),
            OptimisationDirection::Maximise => self.store.upper_bound(objective),
        })
    }

    fn mode_direction(&self) -> Option<OptimisationDirection> {
        match self.mode {
            SearchMode::Optimise { direction, .. } => Some(direction),
            SearchMode::Satisfy | SearchMode::Enumerate => None,
        }
    }

    fn update_peak_depth(&mut self) {
        let depth = (self.store.current_level() - self.root_level) as u64;
        self.statistics.peak_depth = self.statistics.peak_depth.max(depth);
    }

    fn trace_node(&self, variables: &[DomainId]) {
        if !log_enabled!(Level::Trace) {
            return;
        }

        trace!(
            "Node {} at depth {}: {}",
            self.statistics.num_nodes,
            self.store.current_level() - self.root_level,
            variables
                .iter()
                .map(|&domain_id| format!(
                    "{}[{}, {}]",
                    domain_id,
                    self.store.lower_bound(domain_id),
                    self.store.upper_bound(domain_id)
                ))
                .join(" "),
        );
    }
}
