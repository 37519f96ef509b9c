//! A variable is a handle onto a domain which is owned by a store.

mod domain_generator_iterator;
mod domain_id;

pub use domain_generator_iterator::DomainGeneratorIterator;
pub use domain_id::DomainId;
