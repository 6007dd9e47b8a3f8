use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{Product, ProductProps};
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn insert(&self, props: &ProductProps) -> Result<Product, RepositoryError>;
        async fn update(&self, id: Uuid, props: &ProductProps) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_product(id: Uuid, name: &str, price: f64) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        format!("{name} description"),
        price,
        "https://cdn.example.com/product.jpg".to_string(),
    )
}
