use super::PropagationContext;
use super::Propagator;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::predicate;

/// Propagator which requires all variables to take pairwise distinct values.
///
/// The value of every fixed variable is removed from the bounds of the others, and the
/// constraint fails if the variables together have fewer values available than there are
/// variables.
#[derive(Clone, Debug)]
pub struct AllDifferentPropagator {
    variables: Box<[DomainId]>,
}

impl AllDifferentPropagator {
    pub fn new(variables: impl Into<Box<[DomainId]>>) -> Self {
        AllDifferentPropagator {
            variables: variables.into(),
        }
    }

    fn check_pigeonhole(&self, context: &PropagationContext<'_>) -> PropagationStatus {
        let Some(min) = self.variables.iter().map(|&x| context.lower_bound(x)).min() else {
            return Ok(());
        };
        let max = self
            .variables
            .iter()
            .map(|&x| context.upper_bound(x))
            .max()
            .unwrap_or(min);

        let num_values = i64::from(max) - i64::from(min) + 1;
        if (self.variables.len() as i64) > num_values {
            return Err(EmptyDomain);
        }

        Ok(())
    }
}

impl Propagator for AllDifferentPropagator {
    fn name(&self) -> &str {
        "AllDifferent"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        for (index, &fixed) in self.variables.iter().enumerate() {
            if !context.is_fixed(fixed) {
                continue;
            }

            let value = context.lower_bound(fixed);
            for (other_index, &other) in self.variables.iter().enumerate() {
                if other_index != index {
                    context.post(predicate!(other != value))?;
                }
            }
        }

        self.check_pigeonhole(context)
    }
}
