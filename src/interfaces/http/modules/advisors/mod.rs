//! Advisor module — registration and login

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
