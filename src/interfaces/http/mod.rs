//! HTTP REST API interfaces
//!
//! - `error`: the single failure-to-response boundary
//! - `middleware`: bearer-token identity injection
//! - `modules`: request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
