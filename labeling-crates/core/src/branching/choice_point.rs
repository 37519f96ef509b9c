use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;

/// The outcome of a [`ChoicePointStrategy`](crate::branching::ChoicePointStrategy) selection.
///
/// The search first explores the `decision` and, if that branch fails, its negation. Both
/// branches continue with different candidate sets: the decision branch continues with
/// [`ChoicePoint::remaining`], while the negated branch continues with the candidates the
/// strategy was originally given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoicePoint {
    variable: DomainId,
    remaining: Vec<DomainId>,
    decision: Option<Predicate>,
}

impl ChoicePoint {
    pub(crate) fn new(
        variable: DomainId,
        remaining: Vec<DomainId>,
        decision: Option<Predicate>,
    ) -> Self {
        ChoicePoint {
            variable,
            remaining,
            decision,
        }
    }

    /// The variable which was selected.
    pub fn variable(&self) -> DomainId {
        self.variable
    }

    /// The candidates to continue with after the decision has been imposed.
    pub fn remaining(&self) -> &[DomainId] {
        &self.remaining
    }

    /// The branching decision; [`None`] if the selected variable was already fixed.
    pub fn decision(&self) -> Option<Predicate> {
        self.decision
    }

    pub fn negated_decision(&self) -> Option<Predicate> {
        self.decision.map(|decision| !decision)
    }

    pub fn into_remaining(self) -> Vec<DomainId> {
        self.remaining
    }
}
