use std::fmt::Display;

use crate::basic_types::Solution;
use crate::engine::variables::DomainId;

/// Receives every complete assignment which the search accepts.
///
/// In optimisation mode every reported assignment is strictly better than the previous one.
pub trait SolutionReporter {
    fn on_solution(&mut self, report: &SolutionReport<'_>);
}

impl<T> SolutionReporter for T
where
    T: FnMut(&SolutionReport<'_>),
{
    fn on_solution(&mut self, report: &SolutionReport<'_>) {
        (self)(report)
    }
}

impl<T: SolutionReporter> SolutionReporter for Option<T> {
    fn on_solution(&mut self, report: &SolutionReport<'_>) {
        if let Some(reporter) = self {
            reporter.on_solution(report)
        }
    }
}

/// A snapshot of the search at the moment a complete assignment was found.
#[derive(Clone, Debug)]
pub struct SolutionReport<'a> {
    /// The value of the objective; [`None`] unless optimising
    pub objective_value: Option<i32>,
    pub num_nodes: u64,
    pub num_wrong_decisions: u64,
    /// The variables which were registered for reporting, in registration order
    pub variables: Vec<ReportedVariable>,
    pub solution: &'a Solution,
}

/// A variable in a [`SolutionReport`] with its name and bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportedVariable {
    pub domain_id: DomainId,
    pub name: String,
    pub lower_bound: i32,
    pub upper_bound: i32,
}

impl Display for ReportedVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lower_bound == self.upper_bound {
            write!(f, "{}={}", self.name, self.lower_bound)
        } else {
            write!(f, "{}={}..{}", self.name, self.lower_bound, self.upper_bound)
        }
    }
}
