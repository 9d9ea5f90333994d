pub mod types;

pub use types::{DomainError, DomainResult};
