use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// The four caller-supplied fields of a product. Used for both insert and
/// full replacement; the store owns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl ProductProps {
    /// Checks every field and hands the props back unchanged when valid.
    ///
    /// Text fields must contain something other than whitespace and the price
    /// must be a finite number. The image reference is not checked as a URL.
    pub fn validate(self) -> Result<Self, ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if self.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if !self.price.is_finite() {
            return Err(ProductError::PriceNotFinite);
        }
        if self.image_url.trim().is_empty() {
            return Err(ProductError::ImageUrlEmpty);
        }
        Ok(self)
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        image_url: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
        }
    }

    /// Attaches a store-assigned id to validated props.
    pub fn with_id(id: Uuid, props: ProductProps) -> Self {
        Self::from_repository(id, props.name, props.description, props.price, props.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn props() -> ProductProps {
        ProductProps {
            name: "Brown Eggs".to_string(),
            description: "A dozen free-range eggs".to_string(),
            price: 4.5,
            image_url: "https://cdn.example.com/eggs.jpg".to_string(),
        }
    }

    #[test]
    fn should_accept_complete_props() {
        let validated = props().validate().unwrap();
        assert_eq!(validated, props());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = ProductProps {
            name: "   ".to_string(),
            ..props()
        }
        .validate();
        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_empty_description() {
        let result = ProductProps {
            description: String::new(),
            ..props()
        }
        .validate();
        assert!(matches!(result, Err(ProductError::DescriptionEmpty)));
    }

    #[test]
    fn should_reject_empty_image_url() {
        let result = ProductProps {
            image_url: String::new(),
            ..props()
        }
        .validate();
        assert!(matches!(result, Err(ProductError::ImageUrlEmpty)));
    }

    #[test]
    fn should_reject_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = ProductProps { price, ..props() }.validate();
            assert!(matches!(result, Err(ProductError::PriceNotFinite)));
        }
    }

    #[test]
    fn should_not_require_image_url_to_be_a_url() {
        let result = ProductProps {
            image_url: "eggs.jpg".to_string(),
            ..props()
        }
        .validate();
        assert!(result.is_ok());
    }

    #[test]
    fn should_keep_store_id_when_attaching_props() {
        let id = Uuid::new_v4();
        let product = Product::with_id(id, props());
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Brown Eggs");
        assert_eq!(product.image_url, "https://cdn.example.com/eggs.jpg");
    }

    proptest! {
        #[test]
        fn any_finite_price_with_filled_text_is_valid(
            name in "[a-zA-Z0-9]{1,32}",
            price in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
        ) {
            let result = ProductProps { name, price, ..props() }.validate();
            prop_assert!(result.is_ok());
        }
    }
}
