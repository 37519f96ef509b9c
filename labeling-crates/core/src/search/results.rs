use crate::basic_types::Solution;

/// The outcome of [`DepthFirstSearch::label`](crate::search::DepthFirstSearch::label).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// A solution was found. When enumerating, this is the last solution of the exhausted tree.
    Satisfiable(Solution),
    /// The tree was exhausted while optimising; `solution` is the best one found and no
    /// assignment with a better objective value exists.
    Optimal {
        solution: Solution,
        objective_value: i32,
    },
    /// The tree was exhausted without finding any solution.
    Unsatisfiable,
}

impl SearchResult {
    /// The solution carried by this result, if any.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Satisfiable(solution) | SearchResult::Optimal { solution, .. } => {
                Some(solution)
            }
            SearchResult::Unsatisfiable => None,
        }
    }
}
