use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Reference to the product image
    pub image_url: String,
}

/// Full replacement of a product; every field is required.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Reference to the product image
    pub image_url: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
