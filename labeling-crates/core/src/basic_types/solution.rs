use itertools::Itertools;

use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::ReadDomains;

/// A snapshot of every domain in a store, taken when a complete assignment was found.
///
/// The snapshot is owned, so it remains valid after the search has backtracked past the node
/// which produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    bounds: KeyedVec<DomainId, (i32, i32)>,
}

impl Solution {
    pub fn from_domains(domains: &impl ReadDomains) -> Self {
        let mut bounds = KeyedVec::default();
        for domain_id in domains.get_domains() {
            let _ = bounds.push((
                domains.lower_bound(domain_id),
                domains.upper_bound(domain_id),
            ));
        }
        Solution { bounds }
    }

    /// Returns the number of [`DomainId`]s captured by this solution.
    pub fn num_domains(&self) -> usize {
        self.bounds.len()
    }

    /// The value of `domain_id`, or [`None`] if its domain was not fixed in this solution.
    pub fn value(&self, domain_id: DomainId) -> Option<i32> {
        let (lower_bound, upper_bound) = self.bounds[domain_id];
        (lower_bound == upper_bound).then_some(lower_bound)
    }

    pub fn bounds(&self, domain_id: DomainId) -> (i32, i32) {
        self.bounds[domain_id]
    }

    /// Returns the values of the given variables in order; unfixed variables yield [`None`].
    pub fn values_of<'a>(
        &'a self,
        variables: &'a [DomainId],
    ) -> impl Iterator<Item = Option<i32>> + 'a {
        variables.iter().map(|&domain_id| self.value(domain_id))
    }

    /// Formats the given variables as `x0=1 x1=3 x2=1..4`, unfixed domains shown as ranges.
    pub fn describe(&self, variables: &[DomainId]) -> String {
        variables
            .iter()
            .map(|&domain_id| match self.bounds[domain_id] {
                (lower_bound, upper_bound) if lower_bound == upper_bound => {
                    format!("{domain_id}={lower_bound}")
                }
                (lower_bound, upper_bound) => format!("{domain_id}={lower_bound}..{upper_bound}"),
            })
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;
    use crate::engine::ConstraintStore;
    use crate::predicate;
    use crate::Store;

    #[test]
    fn snapshot_is_unaffected_by_backtracking() {
        let mut store = Store::default();
        let x = store.new_bounded_integer(0, 5);
        let y = store.new_bounded_integer(2, 3);

        store.push_level();
        store.impose(predicate!(x == 4));
        let solution = Solution::from_domains(&store);
        store.pop_level(0);

        assert_eq!(Some(4), solution.value(x));
        assert_eq!(None, solution.value(y));
        assert_eq!((2, 3), solution.bounds(y));
        assert_eq!("x0=4 x1=2..3", solution.describe(&[x, y]));
    }
}
