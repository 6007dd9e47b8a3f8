use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let props = ProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        }
        .validate()?;

        let product = self.repository.insert(&props).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, mock_logger};
    use crate::domain::errors::RepositoryError;
    use uuid::Uuid;

    fn params(name: &str) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            description: "Description 1".to_string(),
            price: 10.99,
            image_url: "https://cdn.example.com/eggs.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_product_with_store_assigned_id() {
        let assigned = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|props| props.name == "Product 1" && props.price == 10.99)
            .times(1)
            .returning(move |props| Ok(Product::with_id(assigned, ProductProps::clone(props))));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("Product 1")).await.unwrap();

        assert_eq!(product.id, assigned);
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.description, "Description 1");
        assert_eq!(product.image_url, "https://cdn.example.com/eggs.jpg");
    }

    #[tokio::test]
    async fn should_not_touch_store_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_store_failure_as_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Product 1")).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
