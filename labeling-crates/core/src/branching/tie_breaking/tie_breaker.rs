#[cfg(doc)]
use crate::branching::ChoicePointStrategy;

/// The interface for a tie-breaker which is fed candidates together with a value; depending on
/// the [`Direction`] it keeps the candidate with the "best" value.
///
/// Used by the [`ChoicePointStrategy`] variants to select a variable.
pub trait TieBreaker<Var, Value> {
    /// Consider the next candidate with its corresponding value.
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the selected candidate, or [`None`] if nothing was considered. Calling this resets
    /// the tie-breaker so that it can be reused for the next selection.
    fn select(&mut self) -> Option<Var>;

    /// Returns whether the tie-breaker is looking for the minimum ([`Direction::Minimum`]) or the
    /// maximum ([`Direction::Maximum`]) value.
    fn get_direction(&self) -> Direction;
}

/// Whether the value comparison should find the variable with the maximum
/// ([`Direction::Maximum`]) or with the minimum ([`Direction::Minimum`]) value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}
