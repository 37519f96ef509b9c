use std::time::Duration;

use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// The counters of a single [`DepthFirstSearch::label`](crate::search::DepthFirstSearch::label)
/// call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of consistency checks, i.e. the nodes of the search tree which were visited
    pub num_nodes: u64,
    /// The number of nodes at which the store was found to be inconsistent
    pub num_wrong_decisions: u64,
    /// The number of complete assignments which were reported
    pub num_solutions: u64,
    /// The largest number of levels on top of the root level of the search
    pub peak_depth: u64,
    pub time_spent: Duration,
}

impl SearchStatistics {
    /// Writes the statistics through [`log_statistic`], followed by the configured postfix.
    pub fn log(&self) {
        log_statistic("nodes", self.num_nodes);
        log_statistic("wrongDecisions", self.num_wrong_decisions);
        log_statistic("solutions", self.num_solutions);
        log_statistic("peakDepth", self.peak_depth);
        log_statistic("solveTime", self.time_spent.as_secs_f64());
        log_statistic_postfix();
    }
}
