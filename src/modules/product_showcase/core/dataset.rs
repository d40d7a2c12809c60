// Synthetic product dataset behind every showcase view.
//
// Responsibilities
// - Ten fixed products, with numbers drawn from one seeded generator in a fixed order.
// - Same seed and same "today" always produce the same rows.

use crate::modules::product_showcase::core::product::ProductRow;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

const PRODUCTS: [(&str, &str); 10] = [
    ("Engine Oil", "AutoCare"),
    ("Air Filter", "AutoCare"),
    ("Spark Plug", "AutoCare"),
    ("Brake Pads", "AutoCare"),
    ("Coolant", "AutoCare"),
    ("Wiper Blade", "AutoCare"),
    ("GPS Tracker", "Electronics"),
    ("Phone Mount", "Electronics"),
    ("Dash Cam", "Electronics"),
    ("Tyre Shine", "CarCare"),
];

const RATINGS: [f64; 7] = [3.2, 3.8, 4.0, 4.3, 4.6, 4.8, 5.0];
const STOCK_FLAGS: [bool; 4] = [true, true, true, false];
const LOOKBACK_DAYS: i64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    rows: Vec<ProductRow>,
}

impl ProductCatalog {
    pub fn generate(seed: u64, today: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = today - Duration::days(LOOKBACK_DAYS);

        let rows = PRODUCTS
            .iter()
            .zip(1u32..)
            .map(|(&(product, category), id)| {
                let units = rng.random_range(50..400);
                let price = f64::from(rng.random_range(150u32..3500));
                let rating = RATINGS[rng.random_range(0..RATINGS.len())];
                let in_stock = STOCK_FLAGS[rng.random_range(0..STOCK_FLAGS.len())];
                let added_on = start + Duration::days(rng.random_range(0..LOOKBACK_DAYS));
                ProductRow {
                    id,
                    product: product.to_string(),
                    category: category.to_string(),
                    units,
                    price,
                    rating,
                    in_stock,
                    added_on,
                    url: format!("https://example.com/product/{id}"),
                }
            })
            .collect();

        tracing::debug!(seed, %today, "product catalog generated");
        Self { rows }
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }
}
