/// Signals that a domain operation would leave a variable without any value (the lower bound
/// would exceed the upper bound).
///
/// This is an expected outcome during search: the node which caused it simply fails and the
/// engine backtracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain;

/// The result of invoking a propagator.
pub type PropagationStatus = Result<(), EmptyDomain>;
