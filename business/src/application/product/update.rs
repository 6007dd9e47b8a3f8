use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let props = ProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        }
        .validate()?;

        // Existence check and write happen in one store call
        let product = self
            .repository
            .update(params.id, &props)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
