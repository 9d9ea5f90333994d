//! HTTP resource modules, one directory per resource

pub mod advisors;
pub mod health;
pub mod products;
pub mod request_id;
