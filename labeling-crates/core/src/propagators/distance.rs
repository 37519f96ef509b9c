use super::PropagationContext;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;

/// Propagator for `|x - y| = distance`.
#[derive(Clone, Debug)]
pub struct DistancePropagator {
    x: DomainId,
    y: DomainId,
    distance: DomainId,
}

impl DistancePropagator {
    pub fn new(x: DomainId, y: DomainId, distance: DomainId) -> Self {
        DistancePropagator { x, y, distance }
    }

    fn bounds(context: &PropagationContext<'_>, domain_id: DomainId) -> (i64, i64) {
        (
            i64::from(context.lower_bound(domain_id)),
            i64::from(context.upper_bound(domain_id)),
        )
    }

    /// Tightens `x` given `y` and the distance between them.
    fn propagate_endpoint(
        &self,
        x: DomainId,
        y: DomainId,
        context: &mut PropagationContext<'_>,
    ) -> PropagationStatus {
        let (y_min, y_max) = Self::bounds(context, y);
        let (d_min, d_max) = Self::bounds(context, self.distance);

        context.set_lower_bound(x, y_min - d_max)?;
        context.set_upper_bound(x, y_max + d_max)?;

        // x lies either at or below y - d, or at or above y + d
        let (x_min, x_max) = Self::bounds(context, x);
        if x_min > y_max - d_min {
            context.set_lower_bound(x, y_min + d_min)?;
        }
        if x_max < y_min + d_min {
            context.set_upper_bound(x, y_max - d_min)?;
        }

        Ok(())
    }
}

impl Propagator for DistancePropagator {
    fn name(&self) -> &str {
        "Distance"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        let (x_min, x_max) = Self::bounds(context, self.x);
        let (y_min, y_max) = Self::bounds(context, self.y);

        let largest = (x_max - y_min).max(y_max - x_min);
        let smallest = (x_min - y_max).max(y_min - x_max).max(0);

        context.set_lower_bound(self.distance, smallest)?;
        context.set_upper_bound(self.distance, largest)?;

        self.propagate_endpoint(self.x, self.y, context)?;
        self.propagate_endpoint(self.y, self.x, context)?;

        Ok(())
    }
}
