/// Product creation payload. The owning advisor id comes from the
/// authenticated request, never from the client body.
#[derive(Debug, Clone)]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
