//! Contains structures related to optimisation.

use std::fmt::Display;

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OptimisationDirection {
    Maximise,
    #[default]
    Minimise,
}

impl OptimisationDirection {
    /// Whether `candidate` is strictly better than `incumbent` in this direction.
    pub fn improves(&self, candidate: i32, incumbent: i32) -> bool {
        match self {
            OptimisationDirection::Maximise => candidate > incumbent,
            OptimisationDirection::Minimise => candidate < incumbent,
        }
    }
}

impl Display for OptimisationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimisationDirection::Maximise => write!(f, "maximise"),
            OptimisationDirection::Minimise => write!(f, "minimise"),
        }
    }
}
