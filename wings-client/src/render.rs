//! Plain-text views for the `wings` binary

use std::fmt::Write;

use shared::dashboard::Shelf;
use shared::report::SalesReport;
use shared::{Product, Sale, format_money};

fn date_only(sale: &Sale) -> String {
    sale.date.format("%Y-%m-%d").to_string()
}

/// Product management table
pub fn products_table(products: &[Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<24} {:<12} {:<30} {:>10} {:>6}",
        "ID", "Name", "Category", "Description", "Price", "Qty"
    );
    if products.is_empty() {
        out.push_str("No products available\n");
    }
    for p in products {
        let _ = writeln!(
            out,
            "{:<10} {:<24} {:<12} {:<30} {:>10} {:>6}",
            p.id,
            p.name,
            p.category,
            p.description.as_deref().unwrap_or(""),
            format_money(p.price),
            p.quantity
        );
    }
    out
}

/// Stock table with the low-stock flag
pub fn stock_table(products: &[Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<24} {:<12} {:>10} {:>6}  Status",
        "ID", "Name", "Category", "Price", "Qty"
    );
    if products.is_empty() {
        out.push_str("No products available.\n");
    }
    for p in products {
        let status = if p.is_low_stock() { "Low Stock" } else { "In Stock" };
        let _ = writeln!(
            out,
            "{:<10} {:<24} {:<12} {:>10} {:>6}  {}",
            p.id,
            p.name,
            p.category,
            format_money(p.price),
            p.quantity,
            status
        );
    }
    out
}

/// Every sale in receipt order
pub fn sales_table(sales: &[Sale]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<25} {:<24} {:>5} {:>10} {:>10}",
        "Ref", "Date", "Product", "Qty", "Price", "Total"
    );
    if sales.is_empty() {
        out.push_str("No sales recorded.\n");
    }
    for s in sales {
        let _ = writeln!(
            out,
            "{:<12} {:<25} {:<24} {:>5} {:>10} {:>10}",
            s.row_key(),
            s.date.format("%Y-%m-%d %H:%M:%S"),
            s.product_name,
            s.quantity,
            format_money(s.price),
            format_money(s.total)
        );
    }
    out
}

/// Reports view
pub fn report_view(report: &SalesReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Sales Amount: {}", format_money(report.overall.total_sales));
    let _ = writeln!(out, "Total Products Sold: {}", report.overall.total_quantity);
    let _ = writeln!(out, "Total Transactions: {}", report.overall.transaction_count);

    out.push_str("\nSales per Product\n");
    let _ = writeln!(out, "{:<24} {:>8} {:>12}", "Product Name", "Qty Sold", "Total Amount");
    if report.per_product.is_empty() {
        out.push_str("No sales data available.\n");
    }
    for row in &report.per_product {
        let _ = writeln!(
            out,
            "{:<24} {:>8} {:>12}",
            row.product_name,
            row.total_quantity,
            format_money(row.total_amount)
        );
    }

    out.push_str("\nSales per Category\n");
    let _ = writeln!(out, "{:<24} {:>8} {:>12}", "Category", "Qty Sold", "Total Amount");
    if report.per_category.is_empty() {
        out.push_str("No category sales data available.\n");
    }
    for row in &report.per_category {
        let _ = writeln!(
            out,
            "{:<24} {:>8} {:>12}",
            row.category,
            row.total_quantity,
            format_money(row.total_amount)
        );
    }

    out.push_str("\nRecent Sales Transactions\n");
    let _ = writeln!(
        out,
        "{:<12} {:<24} {:>5} {:>10} {:>12}",
        "Date", "Product", "Qty", "Unit Price", "Total Amount"
    );
    if report.recent.is_empty() {
        out.push_str("No sales transactions recorded.\n");
    }
    for sale in &report.recent {
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:>5} {:>10} {:>12}",
            date_only(sale),
            sale.product_name,
            sale.quantity,
            format_money(sale.price),
            format_money(sale.total)
        );
    }
    out
}

/// Dashboard shelves
pub fn dashboard_view(shelves: &[Shelf]) -> String {
    let mut out = String::from("Welcome to Wings Cafe\n");
    for shelf in shelves {
        let _ = writeln!(out, "\n{}", shelf.title);
        if shelf.is_empty() {
            out.push_str("  No products available.\n");
        }
        for item in &shelf.items {
            let _ = writeln!(
                out,
                "  {:<24} {:>10}  {}",
                item.product.name,
                format_money(item.product.price),
                item.status
            );
        }
    }
    out
}
