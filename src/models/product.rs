use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Row in the `products` table. `id` is server-assigned and stable for the
/// row's lifetime; `created_at` never changes after insert.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw write payload as it arrives off the wire. Every field is optional at
/// the serde boundary so a missing field surfaces as a 400 with a per-field
/// message instead of a bare deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// Validated payload, ready to bind into an INSERT or UPDATE.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: Decimal,
    pub description: Option<String>,
}

impl ProductPayload {
    /// Checks field presence, not values: `quantity: 0` and `price: 0` are
    /// legitimate and accepted. Name and category must also be non-empty
    /// after trimming.
    pub fn validate(self) -> Result<ProductFields, AppError> {
        let name = require_text(self.name, "name")?;
        let category = require_text(self.category, "category")?;
        let quantity = self
            .quantity
            .ok_or_else(|| AppError::Validation("quantity is required".to_string()))?;
        let price = self
            .price
            .ok_or_else(|| AppError::Validation("price is required".to_string()))?;

        Ok(ProductFields {
            name,
            category,
            quantity,
            price,
            description: self.description,
        })
    }
}

fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_payload() -> ProductPayload {
        ProductPayload {
            name: Some("Laptop Pro".to_string()),
            category: Some("Electronics".to_string()),
            quantity: Some(15),
            price: Some(dec!(1299.99)),
            description: Some("High-performance laptop".to_string()),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let fields = full_payload().validate().expect("should validate");
        assert_eq!(fields.name, "Laptop Pro");
        assert_eq!(fields.quantity, 15);
        assert_eq!(fields.price, dec!(1299.99));
    }

    #[test]
    fn missing_category_rejected() {
        let mut payload = full_payload();
        payload.category = None;
        let err = payload.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "category is required");
    }

    #[test]
    fn blank_name_rejected() {
        let mut payload = full_payload();
        payload.name = Some("   ".to_string());
        assert!(matches!(
            payload.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn zero_quantity_is_valid() {
        let mut payload = full_payload();
        payload.quantity = Some(0);
        let fields = payload.validate().expect("zero quantity must be accepted");
        assert_eq!(fields.quantity, 0);
    }

    #[test]
    fn missing_quantity_rejected() {
        let mut payload = full_payload();
        payload.quantity = None;
        let err = payload.validate().unwrap_err();
        assert_eq!(err.to_string(), "quantity is required");
    }

    #[test]
    fn description_is_optional() {
        let mut payload = full_payload();
        payload.description = None;
        let fields = payload.validate().expect("should validate");
        assert_eq!(fields.description, None);
    }

    #[test]
    fn payload_deserializes_with_absent_fields() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name": "Mouse", "price": 29.99}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Mouse"));
        assert_eq!(payload.category, None);
        assert_eq!(payload.quantity, None);
        assert_eq!(payload.price, Some(dec!(29.99)));
    }

    #[test]
    fn product_serializes_description_null() {
        let product = Product {
            id: 1,
            name: "Notebook Set".to_string(),
            category: "Office Supplies".to_string(),
            quantity: 200,
            price: dec!(8.99),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["id"], 1);
    }
}
