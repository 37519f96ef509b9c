//! The problem instances which are compiled into the solver.
mod grid;
mod seating;

use std::fmt::Display;

use clap::ValueEnum;
use grid::GridInstance;
use grid::GridModel;
use labeling_core::optimisation::OptimisationDirection;
use labeling_core::variables::DomainId;
use labeling_core::ReadDomains;
use labeling_core::Solution;
use labeling_core::Store;
use log::warn;
use seating::SeatingInstance;
use seating::SeatingModel;

use crate::result::LabelingResult;

/// The built-in instances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoInstance {
    /// Seating: 9 guests with 17 preferences
    Input1,
    /// Seating: 11 guests with 20 preferences
    Input2,
    /// Seating: 15 guests with 20 preferences
    #[default]
    Input3,
    /// Grid: 5 by 5 cells, 12 of them residential
    Grid1,
    /// Grid: 5 by 5 cells, 18 of them residential
    Grid2,
    /// Grid: 7 by 7 cells, 29 of them residential
    Grid3,
}

/// An instance posted in a [`Store`].
#[derive(Clone, Debug)]
pub(crate) enum DemoModel {
    Seating {
        instance: &'static SeatingInstance,
        model: SeatingModel,
    },
    Grid(GridModel),
}

impl DemoInstance {
    /// Posts the instance in `store`; `max_diff` only applies to the seating instances.
    pub(crate) fn build(self, store: &mut Store, max_diff: i32) -> LabelingResult<DemoModel> {
        let post_seating = |instance: &'static SeatingInstance, store: &mut Store| {
            instance
                .build(store, max_diff)
                .map(|model| DemoModel::Seating { instance, model })
        };
        let post_grid = |instance: &GridInstance, store: &mut Store| {
            instance.build(store).map(DemoModel::Grid)
        };

        match self {
            DemoInstance::Input1 => post_seating(&seating::INPUT_1, store),
            DemoInstance::Input2 => post_seating(&seating::INPUT_2, store),
            DemoInstance::Input3 => post_seating(&seating::INPUT_3, store),
            DemoInstance::Grid1 => post_grid(&grid::GRID_1, store),
            DemoInstance::Grid2 => post_grid(&grid::GRID_2, store),
            DemoInstance::Grid3 => post_grid(&grid::GRID_3, store),
        }
    }
}

impl Display for DemoInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoInstance::Input1 => write!(f, "input1"),
            DemoInstance::Input2 => write!(f, "input2"),
            DemoInstance::Input3 => write!(f, "input3"),
            DemoInstance::Grid1 => write!(f, "grid1"),
            DemoInstance::Grid2 => write!(f, "grid2"),
            DemoInstance::Grid3 => write!(f, "grid3"),
        }
    }
}

impl DemoModel {
    /// What a solution of this model is called in the output.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            DemoModel::Seating { .. } => "seating",
            DemoModel::Grid(_) => "grid",
        }
    }

    /// The variables which are labelled by the search.
    pub(crate) fn decision_variables(&self) -> &[DomainId] {
        match self {
            DemoModel::Seating { model, .. } => &model.guests,
            DemoModel::Grid(model) => &model.cells,
        }
    }

    pub(crate) fn reported_variables(&self) -> Vec<DomainId> {
        match self {
            DemoModel::Seating { model, .. } => {
                let mut reported = model.guests.clone();
                reported.push(model.cost);
                reported
            }
            DemoModel::Grid(model) => vec![model.score],
        }
    }

    /// The variable to optimise and its direction. The seating minimises its cost unless asked to
    /// maximise the satisfied preferences; the grid score is always maximised.
    pub(crate) fn objective(
        &self,
        direction: Option<OptimisationDirection>,
    ) -> (DomainId, OptimisationDirection) {
        match self {
            DemoModel::Seating { model, .. } => match direction.unwrap_or_default() {
                OptimisationDirection::Minimise => (model.cost, OptimisationDirection::Minimise),
                OptimisationDirection::Maximise => {
                    (model.satisfied, OptimisationDirection::Maximise)
                }
            },
            DemoModel::Grid(model) => {
                if direction == Some(OptimisationDirection::Minimise) {
                    warn!("The grid score is always maximised; ignoring the requested direction");
                }
                (model.score, OptimisationDirection::Maximise)
            }
        }
    }

    /// The lines which describe `solution` once the search has finished.
    pub(crate) fn describe(&self, store: &Store, solution: &Solution) -> Vec<String> {
        match self {
            DemoModel::Seating { instance, model } => {
                let seating = model
                    .guests
                    .iter()
                    .map(|&guest| {
                        let name = store.get_name(guest).unwrap_or("guest");
                        match solution.value(guest) {
                            Some(chair) => format!("{name}={chair}"),
                            None => format!("{name}=?"),
                        }
                    })
                    .collect::<Vec<_>>();

                let mut lines = vec![format!("Solution: {}", seating.join(" "))];
                if let Some(cost) = solution.value(model.cost) {
                    lines.push(format!(
                        "Satisfied preferences: {}",
                        instance.num_preferences() - cost
                    ));
                }
                lines
            }
            DemoModel::Grid(model) => {
                let score = solution
                    .value(model.score)
                    .map_or_else(|| "?".to_owned(), |score| score.to_string());

                let mut lines = vec![format!("Score: {score}")];
                lines.extend(model.rows(solution));
                lines
            }
        }
    }
}
