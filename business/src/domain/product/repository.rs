use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductProps};

/// Store port for products. Identifiers are assigned by the store on insert.
///
/// `update` and `delete` report `RepositoryError::NotFound` when no record
/// carries the given id.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn insert(&self, props: &ProductProps) -> Result<Product, RepositoryError>;
    async fn update(&self, id: Uuid, props: &ProductProps) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
