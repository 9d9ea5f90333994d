use chrono::{DateTime, Utc};

/// Catalog product, always owned by exactly one advisor.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    /// Owning advisor; every query filters on this
    pub advisor_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
