use crate::modules::product_showcase::core::dataset::ProductCatalog;
use crate::modules::product_showcase::core::format_spec::{FormatSpec, FormatSpecError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub total_revenue: f64,
    pub average_rating: f64,
    pub in_stock_pct: f64,
    pub cards: Vec<MetricCard>,
}

pub fn key_metrics(catalog: &ProductCatalog) -> Result<KeyMetrics, FormatSpecError> {
    let rows = catalog.rows();
    let count = rows.len() as f64;

    let total_revenue: f64 = rows.iter().map(|r| r.revenue()).sum();
    let (average_rating, in_stock_pct) = if rows.is_empty() {
        (0.0, 0.0)
    } else {
        (
            rows.iter().map(|r| r.rating).sum::<f64>() / count,
            rows.iter().filter(|r| r.in_stock).count() as f64 / count * 100.0,
        )
    };

    let cards = vec![
        MetricCard {
            label: "Total Revenue",
            value: FormatSpec::parse("₹ {:,.2f}")?.apply(total_revenue),
        },
        MetricCard {
            label: "Average Rating",
            value: FormatSpec::parse("{:,.2f} / 5")?.apply(average_rating),
        },
        MetricCard {
            label: "In-Stock %",
            value: FormatSpec::parse("{:.1f}%")?.apply(in_stock_pct),
        },
    ];

    Ok(KeyMetrics {
        total_revenue,
        average_rating,
        in_stock_pct,
        cards,
    })
}
