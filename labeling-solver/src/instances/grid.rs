use labeling_core::constraints;
use labeling_core::variables::DomainId;
use labeling_core::Solution;
use labeling_core::Store;
use log::debug;

use crate::result::LabelingError;
use crate::result::LabelingResult;

/// A `size` by `size` grid in which exactly `num_residential` cells are residential (1) and the
/// other cells are commercial (0). A row or column holding `k` residential cells scores
/// `points[k]`; the score of the grid is the sum over all rows and columns.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridInstance {
    pub(crate) size: i32,
    pub(crate) num_residential: i32,
    pub(crate) points: &'static [i32],
}

pub(crate) const GRID_1: GridInstance = GridInstance {
    size: 5,
    num_residential: 12,
    points: &[-5, -4, -3, 3, 4, 5],
};

pub(crate) const GRID_2: GridInstance = GridInstance {
    size: 5,
    num_residential: 18,
    points: &[-5, -4, -3, 3, 4, 5],
};

pub(crate) const GRID_3: GridInstance = GridInstance {
    size: 7,
    num_residential: 29,
    points: &[-7, -6, -5, -4, 4, 5, 6, 7],
};

/// The variables of a grid instance posted in a [`Store`].
#[derive(Clone, Debug)]
pub(crate) struct GridModel {
    size: usize,
    /// The cells in row-major order
    pub(crate) cells: Vec<DomainId>,
    pub(crate) score: DomainId,
}

impl GridInstance {
    fn validate(&self) -> LabelingResult<()> {
        if self.size < 1 {
            return Err(LabelingError::invalid_instance(format!(
                "expected a grid of at least one cell, got size {}",
                self.size
            )));
        }
        if self.points.len() != (self.size + 1) as usize {
            return Err(LabelingError::invalid_instance(format!(
                "expected {} points, one for every number of residential cells in a line, got {}",
                self.size + 1,
                self.points.len()
            )));
        }
        if !(0..=self.size * self.size).contains(&self.num_residential) {
            return Err(LabelingError::invalid_instance(format!(
                "{} residential cells do not fit in a {size} by {size} grid",
                self.num_residential,
                size = self.size
            )));
        }

        Ok(())
    }

    /// Posts the grid model in `store`.
    pub(crate) fn build(&self, store: &mut Store) -> LabelingResult<GridModel> {
        self.validate()?;

        let size = self.size as usize;
        let cells = (0..size * size)
            .map(|cell| {
                let name = format!("r{}c{}", cell / size + 1, cell % size + 1);
                store.new_named_bounded_integer(0, 1, name)
            })
            .collect::<Vec<_>>();
        store.add_constraint(constraints::linear_equals(
            cells.iter().map(|&cell| (1, cell)),
            self.num_residential,
        ))?;

        let min_points = self.points.iter().copied().min().unwrap_or(0);
        let max_points = self.points.iter().copied().max().unwrap_or(0);

        let rows = cells.chunks(size).map(<[DomainId]>::to_vec);
        let columns = (0..size).map(|column| {
            cells
                .iter()
                .skip(column)
                .step_by(size)
                .copied()
                .collect::<Vec<_>>()
        });

        let mut line_scores = Vec::with_capacity(2 * size);
        for line in rows.chain(columns) {
            // The 1-based index into the points is one more than the residential cells in the line
            let index = store.new_bounded_integer(1, self.size + 1);
            store.add_constraint(constraints::linear_equals(
                line.iter().map(|&cell| (1, cell)).chain([(-1, index)]),
                -1,
            ))?;

            let line_score = store.new_bounded_integer(min_points, max_points);
            store.add_constraint(constraints::element(index, self.points, line_score))?;
            line_scores.push(line_score);
        }

        let num_lines = 2 * self.size;
        let score = store.new_named_bounded_integer(
            min_points * num_lines,
            max_points * num_lines,
            "score",
        );
        store.add_constraint(constraints::sum_equals(line_scores, score))?;

        debug!(
            "Grid model of {size} by {size} cells with {} residential cells uses {} constraints",
            self.num_residential,
            store.num_propagators()
        );

        Ok(GridModel { size, cells, score })
    }
}

impl GridModel {
    /// The rows of the grid in `solution`, with `?` for cells which are not fixed.
    pub(crate) fn rows(&self, solution: &Solution) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|&cell| {
                        solution
                            .value(cell)
                            .map_or_else(|| "?".to_owned(), |value| value.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
