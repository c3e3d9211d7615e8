use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::error::AppResult;

struct SeedProduct {
    name: &'static str,
    category: &'static str,
    quantity: i32,
    price_cents: i64,
    description: &'static str,
}

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Laptop Pro",
        category: "Electronics",
        quantity: 15,
        price_cents: 1299_99,
        description: "High-performance laptop",
    },
    SeedProduct {
        name: "Wireless Mouse",
        category: "Electronics",
        quantity: 45,
        price_cents: 29_99,
        description: "Ergonomic wireless mouse",
    },
    SeedProduct {
        name: "Office Chair",
        category: "Furniture",
        quantity: 8,
        price_cents: 199_99,
        description: "Comfortable office chair",
    },
    SeedProduct {
        name: "Coffee Beans",
        category: "Food",
        quantity: 120,
        price_cents: 12_99,
        description: "Premium coffee beans",
    },
    SeedProduct {
        name: "Notebook Set",
        category: "Office Supplies",
        quantity: 200,
        price_cents: 8_99,
        description: "Pack of 3 notebooks",
    },
];

impl SeedProduct {
    fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }
}

/// Creates the products table if absent and, if the table is empty, inserts
/// the sample rows. Idempotent: safe to run any number of times, including
/// concurrently at process start (CREATE TABLE IF NOT EXISTS is atomic on
/// the server side, and seeding is guarded by the row count).
pub async fn ensure_schema_and_seed(pool: &PgPool) -> AppResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
             id          SERIAL PRIMARY KEY,
             name        TEXT NOT NULL,
             category    TEXT NOT NULL,
             quantity    INTEGER NOT NULL,
             price       NUMERIC(10,2) NOT NULL,
             description TEXT,
             created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
             updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
         )",
    )
    .execute(pool)
    .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        info!(count, "products table already populated, skipping seed");
        return Ok(());
    }

    for seed in SEED_PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, category, quantity, price, description)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(seed.name)
        .bind(seed.category)
        .bind(seed.quantity)
        .bind(seed.price())
        .bind(seed.description)
        .execute(pool)
        .await?;
    }

    info!(count = SEED_PRODUCTS.len(), "seeded sample products");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn seed_has_five_products() {
        assert_eq!(SEED_PRODUCTS.len(), 5);
    }

    #[test]
    fn seed_total_items() {
        let total: i64 = SEED_PRODUCTS.iter().map(|p| p.quantity as i64).sum();
        assert_eq!(total, 388);
    }

    #[test]
    fn seed_distinct_categories() {
        let categories: HashSet<&str> = SEED_PRODUCTS.iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn seed_total_value() {
        let total: Decimal = SEED_PRODUCTS
            .iter()
            .map(|p| Decimal::from(p.quantity) * p.price())
            .sum();
        assert_eq!(total, dec!(25806.12));
    }

    #[test]
    fn seed_prices_have_two_fraction_digits() {
        for seed in SEED_PRODUCTS {
            assert_eq!(seed.price().scale(), 2, "price for {}", seed.name);
        }
    }
}
