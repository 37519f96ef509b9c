use super::PropagationContext;
use super::Propagator;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::math::num_ext::NumExt;

/// Propagator for `sum(weight_i * x_i) = rhs` using bounds reasoning.
///
/// All arithmetic happens on `i64`, so sums of `i32` bounds cannot overflow for any realistic
/// number of terms.
#[derive(Clone, Debug)]
pub struct LinearEqualsPropagator {
    terms: Box<[(i32, DomainId)]>,
    rhs: i32,
}

impl LinearEqualsPropagator {
    /// Terms with a zero weight are dropped.
    pub fn new(terms: impl IntoIterator<Item = (i32, DomainId)>, rhs: i32) -> Self {
        LinearEqualsPropagator {
            terms: terms.into_iter().filter(|&(weight, _)| weight != 0).collect(),
            rhs,
        }
    }

    fn term_bounds(context: &PropagationContext<'_>, weight: i32, x: DomainId) -> (i64, i64) {
        let weight = i64::from(weight);
        let lower = weight * i64::from(context.lower_bound(x));
        let upper = weight * i64::from(context.upper_bound(x));

        if weight > 0 {
            (lower, upper)
        } else {
            (upper, lower)
        }
    }
}

impl Propagator for LinearEqualsPropagator {
    fn name(&self) -> &str {
        "LinearEquals"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        if self.terms.is_empty() && self.rhs != 0 {
            return Err(EmptyDomain);
        }

        let rhs = i64::from(self.rhs);

        for (index, &(weight, x)) in self.terms.iter().enumerate() {
            let (rest_min, rest_max) = self
                .terms
                .iter()
                .enumerate()
                .filter(|&(other_index, _)| other_index != index)
                .map(|(_, &(w, y))| Self::term_bounds(context, w, y))
                .fold((0_i64, 0_i64), |(min, max), (lower, upper)| {
                    (min + lower, max + upper)
                });

            // weight * x lies in [rhs - rest_max, rhs - rest_min]
            let low = rhs - rest_max;
            let high = rhs - rest_min;
            let weight = i64::from(weight);

            let (new_lower, new_upper) = if weight > 0 {
                (
                    NumExt::div_ceil(low, weight),
                    NumExt::div_floor(high, weight),
                )
            } else {
                (
                    NumExt::div_ceil(high, weight),
                    NumExt::div_floor(low, weight),
                )
            };

            context.set_lower_bound(x, new_lower)?;
            context.set_upper_bound(x, new_upper)?;
        }

        Ok(())
    }
}
