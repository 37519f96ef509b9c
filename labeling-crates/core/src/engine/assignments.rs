use crate::basic_types::EmptyDomain;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainGeneratorIterator;
use crate::engine::variables::DomainId;
use crate::labeling_assert_moderate;
use crate::labeling_assert_simple;

/// The interval domains of all variables, together with the trail which records every change so
/// that it can be undone when backtracking.
///
/// A disequality strictly inside a domain cannot be expressed by its bounds; such values are kept
/// as holes of the domain, and no bound is ever allowed to come to rest on a hole.
#[derive(Clone, Debug, Default)]
pub(crate) struct Assignments {
    trail: Trail<TrailEntry>,
    bounds: KeyedVec<DomainId, (i32, i32)>,
    holes: KeyedVec<DomainId, Vec<i32>>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum TrailEntry {
    /// The bounds of a domain just before it was changed.
    Bounds {
        domain_id: DomainId,
        old_lower_bound: i32,
        old_upper_bound: i32,
    },
    /// A hole was punched into the domain.
    Hole { domain_id: DomainId },
}

impl Assignments {
    /// Registers the domain of a new integer variable; only allowed at the root.
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        labeling_assert_simple!(
            self.get_level() == 0,
            "can only create variables at the root"
        );
        labeling_assert_simple!(
            lower_bound <= upper_bound,
            "cannot create a variable with the empty domain [{lower_bound}, {upper_bound}]"
        );

        let _ = self.holes.push(Vec::new());
        self.bounds.push((lower_bound, upper_bound))
    }

    pub(crate) fn num_domains(&self) -> u32 {
        self.bounds.len() as u32
    }

    pub(crate) fn get_domains(&self) -> DomainGeneratorIterator {
        DomainGeneratorIterator::new(0, self.num_domains())
    }

    pub(crate) fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.bounds[domain_id].0
    }

    pub(crate) fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.bounds[domain_id].1
    }

    pub(crate) fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        let (lower_bound, upper_bound) = self.bounds[domain_id];
        lower_bound == upper_bound
    }

    pub(crate) fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        let (lower_bound, upper_bound) = self.bounds[domain_id];
        lower_bound <= value && value <= upper_bound && !self.holes[domain_id].contains(&value)
    }

    pub(crate) fn get_level(&self) -> usize {
        self.trail.get_checkpoint()
    }

    pub(crate) fn increase_level(&mut self) {
        self.trail.new_checkpoint()
    }

    pub(crate) fn merge_level(&mut self) {
        self.trail.merge_checkpoint()
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    /// Apply the given [`Predicate`] to the domains.
    ///
    /// Returns `true` if a domain changed and `false` if the predicate already held. If applying
    /// the predicate would empty the domain, the domain is left untouched and [`EmptyDomain`] is
    /// returned.
    pub(crate) fn post_predicate(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        let domain_id = predicate.get_domain();
        let (lower_bound, upper_bound) = self.bounds[domain_id];
        if predicate.is_entailed_by(lower_bound, upper_bound) {
            return Ok(false);
        }

        match predicate {
            Predicate::LowerBound {
                lower_bound: bound, ..
            } => self.update_bounds(domain_id, bound.max(lower_bound), upper_bound),
            Predicate::UpperBound {
                upper_bound: bound, ..
            } => self.update_bounds(domain_id, lower_bound, bound.min(upper_bound)),
            Predicate::Equal {
                equality_constant, ..
            } => {
                if equality_constant < lower_bound || equality_constant > upper_bound {
                    return Err(EmptyDomain);
                }
                self.update_bounds(domain_id, equality_constant, equality_constant)
            }
            Predicate::NotEqual {
                not_equal_constant, ..
            } => {
                if not_equal_constant == lower_bound {
                    self.update_bounds(domain_id, lower_bound + 1, upper_bound)
                } else if not_equal_constant == upper_bound {
                    self.update_bounds(domain_id, lower_bound, upper_bound - 1)
                } else {
                    Ok(self.punch_hole(domain_id, not_equal_constant))
                }
            }
        }
    }

    /// Removes a value strictly between the bounds of `domain_id`.
    fn punch_hole(&mut self, domain_id: DomainId, value: i32) -> bool {
        if self.holes[domain_id].contains(&value) {
            return false;
        }

        self.holes[domain_id].push(value);
        self.trail.push(TrailEntry::Hole { domain_id });
        true
    }

    fn update_bounds(
        &mut self,
        domain_id: DomainId,
        mut new_lower_bound: i32,
        mut new_upper_bound: i32,
    ) -> Result<bool, EmptyDomain> {
        // Holes lie strictly inside the domain they were punched into, so stepping over one
        // cannot overflow.
        let holes = &self.holes[domain_id];
        while new_lower_bound <= new_upper_bound && holes.contains(&new_lower_bound) {
            new_lower_bound += 1;
        }
        while new_lower_bound <= new_upper_bound && holes.contains(&new_upper_bound) {
            new_upper_bound -= 1;
        }

        if new_lower_bound > new_upper_bound {
            return Err(EmptyDomain);
        }

        let (old_lower_bound, old_upper_bound) = self.bounds[domain_id];
        if (old_lower_bound, old_upper_bound) == (new_lower_bound, new_upper_bound) {
            return Ok(false);
        }

        labeling_assert_moderate!(
            new_lower_bound >= old_lower_bound && new_upper_bound <= old_upper_bound,
            "domains may only shrink"
        );

        self.trail.push(TrailEntry::Bounds {
            domain_id,
            old_lower_bound,
            old_upper_bound,
        });
        self.bounds[domain_id] = (new_lower_bound, new_upper_bound);

        Ok(true)
    }

    /// Undoes every change recorded above `new_level`.
    pub(crate) fn synchronise(&mut self, new_level: usize) {
        let bounds = &mut self.bounds;
        let holes = &mut self.holes;
        self.trail.synchronise(new_level).for_each(|entry| match entry {
            TrailEntry::Bounds {
                domain_id,
                old_lower_bound,
                old_upper_bound,
            } => bounds[domain_id] = (old_lower_bound, old_upper_bound),
            TrailEntry::Hole { domain_id } => {
                let _ = holes[domain_id].pop();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::Assignments;
    use crate::basic_types::EmptyDomain;
    use crate::predicate;

    #[test]
    fn bound_predicates_shrink_the_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x >= 3)));
        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x <= 6)));
        assert_eq!(Ok(false), assignments.post_predicate(predicate!(x <= 8)));

        assert_eq!(3, assignments.get_lower_bound(x));
        assert_eq!(6, assignments.get_upper_bound(x));
        assert_eq!(2, assignments.num_trail_entries());
    }

    #[test]
    fn interior_disequality_becomes_a_hole() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x != 5)));
        assert_eq!(Ok(false), assignments.post_predicate(predicate!(x != 5)));
        assert_eq!((0, 10), (assignments.get_lower_bound(x), assignments.get_upper_bound(x)));
        assert!(!assignments.contains(x, 5));

        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x != 0)));
        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x != 10)));
        assert_eq!((1, 9), (assignments.get_lower_bound(x), assignments.get_upper_bound(x)));
    }

    #[test]
    fn bounds_step_over_holes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        let _ = assignments.post_predicate(predicate!(x != 5));
        let _ = assignments.post_predicate(predicate!(x != 6));
        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x >= 5)));
        assert_eq!(7, assignments.get_lower_bound(x));

        assert_eq!(Err(EmptyDomain), assignments.post_predicate(predicate!(x <= 6)));
        assert_eq!((7, 10), (assignments.get_lower_bound(x), assignments.get_upper_bound(x)));
    }

    #[test]
    fn holes_are_undone_with_their_level() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assignments.increase_level();
        let _ = assignments.post_predicate(predicate!(x != 5));
        assert_eq!(Err(EmptyDomain), assignments.post_predicate(predicate!(x == 5)));

        assignments.synchronise(0);
        assert!(assignments.contains(x, 5));
        assert_eq!(Ok(true), assignments.post_predicate(predicate!(x == 5)));
    }

    #[test]
    fn emptying_a_domain_leaves_it_unchanged() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(2, 4);

        assert_eq!(Err(EmptyDomain), assignments.post_predicate(predicate!(x >= 5)));
        assert_eq!(Err(EmptyDomain), assignments.post_predicate(predicate!(x == 7)));
        assert_eq!(2, assignments.get_lower_bound(x));
        assert_eq!(4, assignments.get_upper_bound(x));

        let _ = assignments.post_predicate(predicate!(x == 3));
        assert_eq!(Err(EmptyDomain), assignments.post_predicate(predicate!(x != 3)));
        assert!(assignments.is_domain_assigned(x));
    }

    #[test]
    fn synchronise_restores_the_domains_of_popped_levels() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let y = assignments.grow(0, 10);

        let _ = assignments.post_predicate(predicate!(x >= 1));
        assignments.increase_level();
        let _ = assignments.post_predicate(predicate!(x <= 5));
        let _ = assignments.post_predicate(predicate!(y == 4));
        assignments.increase_level();
        let _ = assignments.post_predicate(predicate!(x == 2));

        assignments.synchronise(1);
        assert_eq!((1, 5), (assignments.get_lower_bound(x), assignments.get_upper_bound(x)));
        assert!(assignments.is_domain_assigned(y));

        assignments.synchronise(0);
        assert_eq!((1, 10), (assignments.get_lower_bound(x), assignments.get_upper_bound(x)));
        assert_eq!((0, 10), (assignments.get_lower_bound(y), assignments.get_upper_bound(y)));
        assert_eq!(0, assignments.get_level());
    }
}
