//! Product form schema: raw field values in, a validated [`ProductInput`]
//! out, or one message per failing field. A failed validation never reaches
//! the remote facade.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Product, ProductInput};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// Raw form field values, as the inputs hold them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

/// One optional message per form field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub stock: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.stock.is_none()
    }
}

impl ProductForm {
    /// Field values for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.to_string(),
            stock: product.stock.to_string(),
        }
    }

    /// Validate every field, reporting all failures at once.
    pub fn validate(&self) -> Result<ProductInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len < NAME_MIN_LEN || name_len > NAME_MAX_LEN {
            errors.name = Some(format!(
                "Name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"
            ));
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => Some(price),
            Ok(_) => {
                errors.price = Some("Price must be at least 0".to_string());
                None
            }
            Err(_) => {
                errors.price = Some("Price must be a number".to_string());
                None
            }
        };

        let category = if self.category.trim().is_empty() {
            errors.category = Some("Category is required".to_string());
            None
        } else {
            match Category::parse(self.category.trim()) {
                Some(category) => Some(category),
                None => {
                    errors.category = Some("Unknown category".to_string());
                    None
                }
            }
        };

        let stock = match self.stock.trim().parse::<i64>() {
            Ok(stock) if (0..=i64::from(u32::MAX)).contains(&stock) => Some(stock as u32),
            Ok(_) => {
                errors.stock = Some("Stock must be at least 0".to_string());
                None
            }
            Err(_) => {
                errors.stock = Some("Stock must be a whole number".to_string());
                None
            }
        };

        if let (true, Some(price), Some(category), Some(stock)) =
            (errors.is_empty(), price, category, stock)
        {
            Ok(ProductInput {
                name: name.to_string(),
                price,
                category,
                stock,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Widget".to_string(),
            price: "19.99".to_string(),
            category: "Books".to_string(),
            stock: "5".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_input() {
        let input = valid_form().validate().unwrap();
        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, 19.99);
        assert_eq!(input.category, Category::Books);
        assert_eq!(input.stock, 5);
    }

    #[test]
    fn test_all_invalid_fields_reported_individually() {
        let form = ProductForm {
            name: "A".to_string(),
            price: "-1".to_string(),
            category: "".to_string(),
            stock: "-1".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.price.is_some());
        assert!(errors.category.is_some());
        assert!(errors.stock.is_some());
    }

    #[test]
    fn test_name_length_boundaries() {
        let mut form = valid_form();
        form.name = "ab".to_string();
        assert!(form.validate().is_ok());

        form.name = "a".to_string();
        assert!(form.validate().unwrap_err().name.is_some());

        form.name = "x".repeat(50);
        assert!(form.validate().is_ok());

        form.name = "x".repeat(51);
        assert!(form.validate().unwrap_err().name.is_some());
    }

    #[test]
    fn test_category_must_be_in_fixed_set() {
        let mut form = valid_form();
        form.category = "Toys".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.category.as_deref(), Some("Unknown category"));
    }

    #[test]
    fn test_non_numeric_price_and_stock_rejected() {
        let mut form = valid_form();
        form.price = "abc".to_string();
        form.stock = "1.5".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.price.is_some());
        assert!(errors.stock.is_some());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_round_trip_from_product() {
        let product = Product {
            id: 7,
            name: "Lamp".to_string(),
            price: 30.0,
            category: Category::Electronics,
            stock: 2,
            created_at: chrono::Utc::now(),
        };
        let input = ProductForm::from_product(&product).validate().unwrap();
        assert_eq!(input.name, "Lamp");
        assert_eq!(input.price, 30.0);
        assert_eq!(input.stock, 2);
    }
}
