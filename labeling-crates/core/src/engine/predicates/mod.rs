mod predicate;

pub use predicate::Predicate;
pub use predicate::PredicateConstructor;
