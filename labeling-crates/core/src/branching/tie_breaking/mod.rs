//! Tie-breakers decide which candidate is selected when several have the same "best" value.
mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::Direction;
pub use tie_breaker::TieBreaker;
