use super::PropagationContext;
use super::Propagator;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;

/// Propagator for `value = table[index]`, where the first entry of `table` has index 1.
#[derive(Clone, Debug)]
pub struct ElementPropagator {
    index: DomainId,
    table: Box<[i32]>,
    value: DomainId,
}

impl ElementPropagator {
    pub fn new(index: DomainId, table: impl Into<Box<[i32]>>, value: DomainId) -> Self {
        ElementPropagator {
            index,
            table: table.into(),
            value,
        }
    }

    fn entry(&self, index: i32) -> i32 {
        self.table[(index - 1) as usize]
    }
}

impl Propagator for ElementPropagator {
    fn name(&self) -> &str {
        "Element"
    }

    fn propagate(&self, context: &mut PropagationContext<'_>) -> PropagationStatus {
        context.set_lower_bound(self.index, 1)?;
        context.set_upper_bound(self.index, self.table.len() as i64)?;

        let supported = |index: i32| {
            context.contains(self.index, index) && context.contains(self.value, self.entry(index))
        };

        let mut first = context.lower_bound(self.index);
        let mut last = context.upper_bound(self.index);
        while first <= last && !supported(first) {
            first += 1;
        }
        while last >= first && !supported(last) {
            last -= 1;
        }
        if first > last {
            return Err(EmptyDomain);
        }

        let (min, max) = (first..=last)
            .filter(|&index| supported(index))
            .map(|index| self.entry(index))
            .fold((i32::MAX, i32::MIN), |(min, max), entry| {
                (min.min(entry), max.max(entry))
            });

        context.set_lower_bound(self.index, i64::from(first))?;
        context.set_upper_bound(self.index, i64::from(last))?;
        context.set_lower_bound(self.value, i64::from(min))?;
        context.set_upper_bound(self.value, i64::from(max))?;

        Ok(())
    }
}
