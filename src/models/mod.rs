mod product;
mod stats;

pub use product::{Product, ProductFields, ProductPayload};
pub use stats::Stats;
