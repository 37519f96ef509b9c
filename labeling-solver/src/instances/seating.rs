use labeling_core::constraints;
use labeling_core::variables::DomainId;
use labeling_core::Store;
use log::debug;

use crate::result::LabelingError;
use crate::result::LabelingResult;

/// `num_guests` guests are seated on the chairs `1..=num_guests`, one guest per chair. A
/// preference `(a, b)` asks for guests `a` and `b` (1-based) to sit at most `max_diff` chairs
/// apart; every preference which is not met costs 1.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SeatingInstance {
    pub(crate) num_guests: i32,
    pub(crate) preferences: &'static [(i32, i32)],
}

pub(crate) const INPUT_1: SeatingInstance = SeatingInstance {
    num_guests: 9,
    preferences: &[
        (1, 3),
        (1, 5),
        (1, 8),
        (2, 5),
        (2, 9),
        (3, 4),
        (3, 5),
        (4, 1),
        (4, 5),
        (5, 6),
        (5, 1),
        (6, 1),
        (6, 9),
        (7, 3),
        (7, 8),
        (8, 9),
        (8, 7),
    ],
};

pub(crate) const INPUT_2: SeatingInstance = SeatingInstance {
    num_guests: 11,
    preferences: &[
        (1, 3),
        (1, 5),
        (2, 5),
        (2, 8),
        (2, 9),
        (3, 4),
        (3, 5),
        (4, 1),
        (4, 5),
        (4, 6),
        (5, 1),
        (6, 1),
        (6, 9),
        (7, 3),
        (7, 5),
        (8, 9),
        (8, 7),
        (8, 10),
        (9, 11),
        (10, 11),
    ],
};

pub(crate) const INPUT_3: SeatingInstance = SeatingInstance {
    num_guests: 15,
    preferences: &[
        (1, 3),
        (1, 5),
        (2, 5),
        (2, 8),
        (2, 9),
        (3, 4),
        (3, 5),
        (4, 1),
        (4, 15),
        (4, 13),
        (5, 1),
        (6, 10),
        (6, 9),
        (7, 3),
        (7, 5),
        (8, 9),
        (8, 7),
        (8, 14),
        (9, 13),
        (10, 11),
    ],
};

/// The variables of a seating instance posted in a [`Store`].
#[derive(Clone, Debug)]
pub(crate) struct SeatingModel {
    /// The chair of every guest
    pub(crate) guests: Vec<DomainId>,
    /// The number of preferences which are not met
    pub(crate) cost: DomainId,
    /// The number of preferences which are met
    pub(crate) satisfied: DomainId,
}

impl SeatingInstance {
    pub(crate) fn num_preferences(&self) -> i32 {
        self.preferences.len() as i32
    }

    fn validate(&self, max_diff: i32) -> LabelingResult<()> {
        if self.num_guests < 1 {
            return Err(LabelingError::invalid_instance(format!(
                "expected at least one guest, got {}",
                self.num_guests
            )));
        }
        if max_diff < 0 {
            return Err(LabelingError::invalid_instance(format!(
                "the maximum distance {max_diff} is negative"
            )));
        }

        let guests = 1..=self.num_guests;
        if let Some(&(first, second)) = self
            .preferences
            .iter()
            .find(|(first, second)| !guests.contains(first) || !guests.contains(second))
        {
            return Err(LabelingError::invalid_instance(format!(
                "the preference ({first}, {second}) refers to a guest outside of 1..={}",
                self.num_guests
            )));
        }

        Ok(())
    }

    /// Posts the seating model with the given tolerance in `store`.
    pub(crate) fn build(&self, store: &mut Store, max_diff: i32) -> LabelingResult<SeatingModel> {
        self.validate(max_diff)?;

        let guests = (1..=self.num_guests)
            .map(|guest| {
                store.new_named_bounded_integer(1, self.num_guests, format!("guest{guest}"))
            })
            .collect::<Vec<_>>();
        store.add_constraint(constraints::all_different(guests.clone()))?;

        let mut violations = Vec::with_capacity(self.preferences.len());
        for &(first, second) in self.preferences {
            let distance = store.new_bounded_integer(0, self.num_guests);
            store.add_constraint(constraints::distance(
                guests[(first - 1) as usize],
                guests[(second - 1) as usize],
                distance,
            ))?;

            let violated = store.new_bounded_integer(0, 1);
            store.add_constraint(constraints::reified_greater_than(
                violated, distance, max_diff,
            ))?;
            violations.push(violated);
        }

        let cost = store.new_named_bounded_integer(0, self.num_preferences(), "cost");
        store.add_constraint(constraints::sum_equals(violations, cost))?;

        let satisfied = store.new_named_bounded_integer(0, self.num_preferences(), "satisfied");
        store.add_constraint(constraints::linear_equals(
            [(1, cost), (1, satisfied)],
            self.num_preferences(),
        ))?;

        debug!(
            "Seating model with {} guests and {} preferences uses {} constraints",
            self.num_guests,
            self.preferences.len(),
            store.num_propagators()
        );

        Ok(SeatingModel {
            guests,
            cost,
            satisfied,
        })
    }
}

#[cfg(test)]
mod tests {
    use labeling_core::optimisation::OptimisationDirection;
    use labeling_core::search::DepthFirstSearch;
    use labeling_core::search::SearchMode;
    use labeling_core::search::SearchOptions;
    use labeling_core::search::SearchResult;
    use labeling_core::search::SolutionReport;
    use labeling_core::ConstraintStore;
    use labeling_core::ReadDomains;
    use labeling_core::Store;

    use super::SeatingInstance;
    use super::INPUT_1;
    use super::INPUT_2;
    use super::INPUT_3;
    use crate::result::LabelingError;

    const SMALL: SeatingInstance = SeatingInstance {
        num_guests: 4,
        preferences: &[(1, 2), (1, 3), (1, 4), (2, 4)],
    };

    #[test]
    fn built_in_instances_are_valid() {
        for instance in [INPUT_1, INPUT_2, INPUT_3] {
            let mut store = Store::default();
            let model = instance.build(&mut store, 1).expect("valid instance");

            assert_eq!(instance.num_guests as usize, model.guests.len());
            assert_eq!(Some(model.cost), store.get_domain_by_name("cost"));
            assert_eq!(Some("guest1"), store.get_name(model.guests[0]));
        }
    }

    #[test]
    fn preferences_outside_of_the_guests_are_rejected() {
        let instance = SeatingInstance {
            num_guests: 3,
            preferences: &[(1, 2), (3, 4)],
        };

        let mut store = Store::default();
        let result = instance.build(&mut store, 1);
        assert!(matches!(result, Err(LabelingError::InvalidInstance(_))));
    }

    #[test]
    fn optimal_cost_of_a_small_instance() {
        // Guest 1 can have at most two neighbours, so one of its three preferences fails
        for direction in [OptimisationDirection::Minimise, OptimisationDirection::Maximise] {
            let mut store = Store::default();
            let model = SMALL.build(&mut store, 1).expect("valid instance");

            let objective = match direction {
                OptimisationDirection::Minimise => model.cost,
                OptimisationDirection::Maximise => model.satisfied,
            };
            let options = SearchOptions {
                mode: SearchMode::Optimise {
                    objective,
                    direction,
                },
                ..Default::default()
            };
            let mut search = DepthFirstSearch::new(options, None::<fn(&SolutionReport<'_>)>);
            let result = search.label(&mut store, &model.guests);

            let SearchResult::Optimal { solution, .. } = result else {
                panic!("expected an optimal solution, got {result:?}");
            };
            assert_eq!(Some(1), solution.value(model.cost));
            assert_eq!(Some(3), solution.value(model.satisfied));
            assert_eq!(0, store.current_level());
        }
    }
}
