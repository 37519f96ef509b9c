use super::Direction;
use super::TieBreaker;

/// A tie-breaker which keeps the first candidate it received with the "best" value according to
/// the provided [`Direction`].
///
/// Later candidates only replace the selection if their value is strictly better. For example,
/// with [`Direction::Maximum`] and candidates `x3` (span 4) followed by `x1` (span 4), `x3` is
/// selected because it was considered first. This makes the selection depend only on the order
/// of the candidates, which keeps node counts reproducible.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The candidate selected so far together with its value
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let improves = match &self.selected {
            None => true,
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if improves {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}
