#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.image_url_empty")]
    ImageUrlEmpty,
    #[error("product.price_not_finite")]
    PriceNotFinite,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Folds a repository miss into the product-level `NotFound`.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
