pub(crate) mod assignments;
mod domains;
pub mod predicates;
mod store;
pub(crate) mod variable_names;
pub mod variables;

pub use domains::ConstraintStore;
pub use domains::ReadDomains;
pub use store::Store;
