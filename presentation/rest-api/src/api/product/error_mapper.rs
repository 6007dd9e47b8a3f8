use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid product id"),
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "Product name is required"),
            ProductError::DescriptionEmpty => {
                (StatusCode::BAD_REQUEST, "Product description is required")
            }
            ProductError::ImageUrlEmpty => {
                (StatusCode::BAD_REQUEST, "Product imageUrl is required")
            }
            ProductError::PriceNotFinite => {
                (StatusCode::BAD_REQUEST, "Product price must be a finite number")
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
