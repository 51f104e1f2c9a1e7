//! Sales reports
//!
//! Pure aggregation over already-fetched records. Nothing is cached; callers
//! rebuild the report whenever their copy of the collections changes.
//!
//! Grouped outputs keep first-appearance order of their key in the sales
//! list. Sums use plain `f64` addition; rounding happens only in
//! [`format_money`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Product, Sale, category_label};
use crate::types::RecordId;

/// Number of rows in the recent transactions table
pub const RECENT_TRANSACTIONS: usize = 10;

/// Currency prefix (Lesotho loti)
pub const CURRENCY_PREFIX: &str = "M";

// ============================================================================
// Response Types
// ============================================================================

/// Sales summed for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: RecordId,
    /// Name carried from the first sale of the group
    pub product_name: String,
    pub total_quantity: i64,
    pub total_amount: f64,
}

/// Sales summed for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub total_quantity: i64,
    pub total_amount: f64,
}

/// Totals over every sale
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallTotals {
    pub total_sales: f64,
    pub total_quantity: i64,
    pub transaction_count: usize,
}

/// Everything the reports view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub overall: OverallTotals,
    pub per_product: Vec<ProductSales>,
    pub per_category: Vec<CategorySales>,
    pub recent: Vec<Sale>,
}

impl SalesReport {
    pub fn build(sales: &[Sale], products: &[Product]) -> Self {
        Self {
            overall: overall_totals(sales),
            per_product: sales_per_product(sales),
            per_category: sales_per_category(sales, products),
            recent: recent_transactions(sales, RECENT_TRANSACTIONS),
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Group by product id, summing quantity and amount.
pub fn sales_per_product(sales: &[Sale]) -> Vec<ProductSales> {
    let mut index: HashMap<&RecordId, usize> = HashMap::new();
    let mut rows: Vec<ProductSales> = Vec::new();

    for sale in sales {
        let slot = *index.entry(&sale.product_id).or_insert_with(|| {
            rows.push(ProductSales {
                product_id: sale.product_id.clone(),
                product_name: sale.product_name.clone(),
                total_quantity: 0,
                total_amount: 0.0,
            });
            rows.len() - 1
        });
        rows[slot].total_quantity += sale.quantity;
        rows[slot].total_amount += sale.total;
    }

    rows
}

/// Group by the category of each sale's product as currently listed.
///
/// Sales whose product is no longer in `products` are left out of this
/// grouping only.
pub fn sales_per_category(sales: &[Sale], products: &[Product]) -> Vec<CategorySales> {
    let by_id: HashMap<&RecordId, &Product> = products.iter().map(|p| (&p.id, p)).collect();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CategorySales> = Vec::new();

    for sale in sales {
        let Some(&product) = by_id.get(&sale.product_id) else {
            tracing::trace!(product_id = %sale.product_id, "Sale skipped in category report: product missing");
            continue;
        };
        let label = category_label(&product.category);
        let slot = *index.entry(label).or_insert_with(|| {
            rows.push(CategorySales {
                category: label.to_string(),
                total_quantity: 0,
                total_amount: 0.0,
            });
            rows.len() - 1
        });
        rows[slot].total_quantity += sale.quantity;
        rows[slot].total_amount += sale.total;
    }

    rows
}

pub fn overall_totals(sales: &[Sale]) -> OverallTotals {
    sales.iter().fold(OverallTotals::default(), |mut acc, sale| {
        acc.total_sales += sale.total;
        acc.total_quantity += sale.quantity;
        acc.transaction_count += 1;
        acc
    })
}

/// Last `limit` sales in receipt order, newest first.
pub fn recent_transactions(sales: &[Sale], limit: usize) -> Vec<Sale> {
    let start = sales.len().saturating_sub(limit);
    sales[start..].iter().rev().cloned().collect()
}

/// Display format for amounts: `M12.50`
pub fn format_money(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sale(product_id: i64, name: &str, quantity: i64, total: f64) -> Sale {
        Sale {
            id: None,
            product_id: product_id.into(),
            product_name: name.into(),
            quantity,
            price: if quantity == 0 { 0.0 } else { total / quantity as f64 },
            total,
            date: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
        }
    }

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("p{id}"),
            category: category.into(),
            description: None,
            price: 1.0,
            quantity: 10,
            image_url: None,
        }
    }

    #[test]
    fn test_per_product_groups_and_sums() {
        let sales = vec![sale(1, "Tea", 2, 20.0), sale(1, "Tea", 1, 10.0)];
        let rows = sales_per_product(&sales);
        assert_eq!(
            rows,
            vec![ProductSales {
                product_id: 1.into(),
                product_name: "Tea".into(),
                total_quantity: 3,
                total_amount: 30.0,
            }]
        );

        let overall = overall_totals(&sales);
        assert_eq!(overall.total_sales, 30.0);
        assert_eq!(overall.total_quantity, 3);
        assert_eq!(overall.transaction_count, 2);
    }

    #[test]
    fn test_per_product_keeps_first_name() {
        let sales = vec![sale(1, "Tea", 1, 10.0), sale(1, "Green Tea", 1, 12.0)];
        assert_eq!(sales_per_product(&sales)[0].product_name, "Tea");
    }

    #[test]
    fn test_per_product_first_appearance_order() {
        let sales = vec![
            sale(2, "Cake", 1, 30.0),
            sale(1, "Tea", 1, 10.0),
            sale(2, "Cake", 1, 30.0),
        ];
        let ids: Vec<_> = sales_per_product(&sales)
            .into_iter()
            .map(|r| r.product_id.to_string())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_per_category_single_product() {
        let rows = sales_per_category(&[sale(1, "Tea", 2, 20.0)], &[product(1, "Beverages")]);
        assert_eq!(
            rows,
            vec![CategorySales {
                category: "Beverages".into(),
                total_quantity: 2,
                total_amount: 20.0,
            }]
        );
    }

    #[test]
    fn test_per_category_skips_missing_product() {
        let sales = vec![sale(1, "Tea", 2, 20.0), sale(99, "Ghost", 1, 50.0)];
        let products = vec![product(1, "Beverages")];

        let rows = sales_per_category(&sales, &products);
        let category_sum: f64 = rows.iter().map(|r| r.total_amount).sum();
        assert_eq!(category_sum, 20.0);

        let overall = overall_totals(&sales);
        assert_eq!(overall.total_sales, 70.0);
        assert_eq!(overall.transaction_count, 2);
    }

    #[test]
    fn test_per_category_blank_is_uncategorized() {
        let rows = sales_per_category(&[sale(1, "Tea", 1, 10.0)], &[product(1, "")]);
        assert_eq!(rows[0].category, "Uncategorized");
    }

    #[test]
    fn test_sums_match_overall_total() {
        let sales = vec![
            sale(1, "Tea", 2, 20.0),
            sale(2, "Cake", 1, 35.5),
            sale(3, "Pie", 4, 60.0),
            sale(1, "Tea", 1, 10.0),
        ];
        let products = vec![product(1, "Beverages"), product(2, "Desserts"), product(3, "Desserts")];
        let overall = overall_totals(&sales);

        let per_product: f64 = sales_per_product(&sales).iter().map(|r| r.total_amount).sum();
        let per_category: f64 = sales_per_category(&sales, &products)
            .iter()
            .map(|r| r.total_amount)
            .sum();
        assert!((per_product - overall.total_sales).abs() < 1e-9);
        assert!((per_category - overall.total_sales).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sales() {
        let report = SalesReport::build(&[], &[product(1, "Food")]);
        assert_eq!(report.overall, OverallTotals::default());
        assert!(report.per_product.is_empty());
        assert!(report.per_category.is_empty());
        assert!(report.recent.is_empty());
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let sales: Vec<Sale> = (0..12)
            .map(|i| Sale {
                id: Some(format!("s{i}").into()),
                date: start + Duration::minutes(i),
                ..sale(1, "Tea", 1, 10.0)
            })
            .collect();

        let recent = recent_transactions(&sales, RECENT_TRANSACTIONS);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].id, Some("s11".into()));
        assert_eq!(recent[9].id, Some("s2".into()));
    }

    #[test]
    fn test_recent_transactions_short_list() {
        let sales = vec![sale(1, "Tea", 1, 10.0)];
        assert_eq!(recent_transactions(&sales, RECENT_TRANSACTIONS).len(), 1);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(30.0), "M30.00");
        assert_eq!(format_money(0.1 + 0.2), "M0.30");
        assert_eq!(format_money(12.5), "M12.50");
    }
}
