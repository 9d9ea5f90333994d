//! Application services orchestrating repositories and crypto

pub mod services;

pub use services::{AdvisorService, ProductService};
