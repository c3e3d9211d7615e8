use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate view over the whole table. Sums are coerced to zero on an empty
/// table so clients never see nulls here.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Stats {
    pub total_products: i64,
    pub total_items: i64,
    pub categories: i64,
    pub total_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stats_serialization_shape() {
        let stats = Stats {
            total_products: 5,
            total_items: 388,
            categories: 4,
            total_value: dec!(25806.12),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_products"], 5);
        assert_eq!(json["total_items"], 388);
        assert_eq!(json["categories"], 4);
        assert_eq!(json["total_value"], serde_json::json!("25806.12"));
    }
}
