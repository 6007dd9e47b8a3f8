use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductProps};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const COLUMNS: &str = "id, name, description, price, image_url";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "product query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY seq"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, props: &ProductProps) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (name, description, price, image_url) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&props.name)
        .bind(&props.description)
        .bind(props.price)
        .bind(&props.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: Uuid, props: &ProductProps) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                image_url = $5
            WHERE id = $1
            RETURNING {COLUMNS}"#
        ))
        .bind(id)
        .bind(&props.name)
        .bind(&props.description)
        .bind(props.price)
        .bind(&props.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
