use std::fmt::Display;

use super::tie_breaking::Direction;
use super::tie_breaking::InOrderTieBreaker;
use super::tie_breaking::TieBreaker;
use super::ChoicePoint;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;
use crate::predicate;

/// How the search selects the next variable and splits its domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ChoicePointStrategy {
    /// Select the variable with the largest domain and branch on `x <= (min + max) / 2`,
    /// rounding down.
    #[default]
    LargestDomainSplitLow,
    /// Select the variable with the smallest domain and branch on `x >= (min + max + 1) / 2`,
    /// rounding down.
    SmallestDomainSplitHigh,
    /// Select the variables in the given order and branch on `x == min`.
    InputOrderAssignMin,
}

impl ChoicePointStrategy {
    /// Selects a variable from `candidates` and creates the decision to branch on.
    ///
    /// Ties are broken by taking the candidate which occurs first. A variable which is already
    /// fixed is removed from the candidates and returned without a decision.
    ///
    /// # Panics
    /// If `candidates` is empty.
    pub fn select(&self, domains: &impl ReadDomains, candidates: &[DomainId]) -> ChoicePoint {
        assert!(
            !candidates.is_empty(),
            "{self} cannot select a variable from an empty candidate set"
        );

        let position = match self {
            ChoicePointStrategy::LargestDomainSplitLow => {
                select_by_span(domains, candidates, Direction::Maximum)
            }
            ChoicePointStrategy::SmallestDomainSplitHigh => {
                select_by_span(domains, candidates, Direction::Minimum)
            }
            ChoicePointStrategy::InputOrderAssignMin => 0,
        };
        let variable = candidates[position];

        if domains.is_fixed(variable) {
            return ChoicePoint::new(variable, without(candidates, position), None);
        }

        let lower_bound = i64::from(domains.lower_bound(variable));
        let upper_bound = i64::from(domains.upper_bound(variable));

        match self {
            ChoicePointStrategy::LargestDomainSplitLow => {
                // Lies in [lower_bound, upper_bound), so both branches are non-empty
                let midpoint = (lower_bound + upper_bound).div_euclid(2) as i32;
                ChoicePoint::new(
                    variable,
                    candidates.to_vec(),
                    Some(predicate!(variable <= midpoint)),
                )
            }
            ChoicePointStrategy::SmallestDomainSplitHigh => {
                // Lies in (lower_bound, upper_bound]
                let midpoint = (lower_bound + upper_bound + 1).div_euclid(2) as i32;
                ChoicePoint::new(
                    variable,
                    candidates.to_vec(),
                    Some(predicate!(variable >= midpoint)),
                )
            }
            ChoicePointStrategy::InputOrderAssignMin => {
                let value = lower_bound as i32;
                ChoicePoint::new(
                    variable,
                    without(candidates, position),
                    Some(predicate!(variable == value)),
                )
            }
        }
    }
}

impl Display for ChoicePointStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChoicePointStrategy::LargestDomainSplitLow => write!(f, "largest-domain-split-low"),
            ChoicePointStrategy::SmallestDomainSplitHigh => write!(f, "smallest-domain-split-high"),
            ChoicePointStrategy::InputOrderAssignMin => write!(f, "input-order-assign-min"),
        }
    }
}

/// Returns the position in `candidates` of the first candidate with the best domain span.
fn select_by_span(
    domains: &impl ReadDomains,
    candidates: &[DomainId],
    direction: Direction,
) -> usize {
    let mut tie_breaker = InOrderTieBreaker::new(direction);
    for (position, &candidate) in candidates.iter().enumerate() {
        tie_breaker.consider(position, domains.domain_span(candidate));
    }
    tie_breaker.select().unwrap_or(0)
}

fn without(candidates: &[DomainId], position: usize) -> Vec<DomainId> {
    let mut remaining = candidates.to_vec();
    let _ = remaining.remove(position);
    remaining
}

#[cfg(test)]
mod tests {
    use super::ChoicePointStrategy;
    use crate::engine::ConstraintStore;
    use crate::engine::ReadDomains;
    use crate::predicate;
    use crate::Store;

    #[test]
    fn largest_domain_ties_are_broken_by_position() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 3);
        let y = store.new_bounded_integer(0, 5);
        let z = store.new_bounded_integer(10, 15);

        let choice = ChoicePointStrategy::LargestDomainSplitLow.select(&store, &[x, y, z]);

        assert_eq!(y, choice.variable());
        assert_eq!(Some(predicate!(y <= 2)), choice.decision());
        assert_eq!(Some(predicate!(y >= 3)), choice.negated_decision());
        assert_eq!(&[x, y, z], choice.remaining());
    }

    #[test]
    fn smallest_domain_splits_high() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 9);
        let y = store.new_bounded_integer(4, 5);
        let z = store.new_bounded_integer(1, 2);

        let choice = ChoicePointStrategy::SmallestDomainSplitHigh.select(&store, &[x, y, z]);

        assert_eq!(y, choice.variable());
        assert_eq!(Some(predicate!(y >= 5)), choice.decision());
        assert_eq!(Some(predicate!(y <= 4)), choice.negated_decision());
        assert_eq!(3, choice.remaining().len());
    }

    #[test]
    fn midpoints_round_down_on_negative_domains() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(-5, -2);
        let y = store.new_bounded_integer(-3, -2);

        let low = ChoicePointStrategy::LargestDomainSplitLow.select(&store, &[x]);
        assert_eq!(Some(predicate!(x <= -4)), low.decision());

        let high = ChoicePointStrategy::SmallestDomainSplitHigh.select(&store, &[y]);
        assert_eq!(Some(predicate!(y >= -2)), high.decision());
    }

    #[test]
    fn fixed_variables_are_removed_without_a_decision() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 4);
        let y = store.new_bounded_integer(3, 3);
        let z = store.new_bounded_integer(0, 4);

        let choice = ChoicePointStrategy::SmallestDomainSplitHigh.select(&store, &[x, y, z]);
        assert_eq!(y, choice.variable());
        assert_eq!(None, choice.decision());
        assert_eq!(vec![x, z], choice.into_remaining());

        store.push_level();
        store.impose(predicate!(x == 1));
        store.impose(predicate!(z == 1));
        let choice = ChoicePointStrategy::LargestDomainSplitLow.select(&store, &[x, y, z]);
        assert_eq!(x, choice.variable());
        assert_eq!(None, choice.decision());
        assert_eq!(&[y, z], choice.remaining());
    }

    #[test]
    fn input_order_assigns_the_minimum() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(2, 7);
        let y = store.new_bounded_integer(0, 1);

        let choice = ChoicePointStrategy::InputOrderAssignMin.select(&store, &[x, y]);

        assert_eq!(x, choice.variable());
        assert_eq!(Some(predicate!(x == 2)), choice.decision());
        assert_eq!(Some(predicate!(x != 2)), choice.negated_decision());
        assert_eq!(&[y], choice.remaining());
        assert_eq!(2, store.lower_bound(x));
    }

    #[test]
    #[should_panic(expected = "empty candidate set")]
    fn empty_candidates_are_rejected() {
        let store = Store::default();
        let _ = ChoicePointStrategy::LargestDomainSplitLow.select(&store, &[]);
    }
}
