//! Searchable product table.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub category: String,
    pub name: String,
    /// Whole dollars.
    pub price: u32,
    pub stocked: bool,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub text: String,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if self.in_stock_only && !product.stocked {
            return false;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.text.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductRow {
    Category(String),
    Item(Product),
}

pub fn builtin_catalog() -> Result<Vec<Product>> {
    serde_json::from_str(BUILTIN_CATALOG).context("failed to parse built-in product catalog")
}

pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read product catalog {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse product catalog {}", path.display()))
}

/// Rows for the table: matching products in catalog order, with a category
/// header before each run of products from a new category.
pub fn table_rows(products: &[Product], filter: &ProductFilter) -> Vec<ProductRow> {
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in products.iter().filter(|p| filter.matches(p)) {
        if last_category != Some(product.category.as_str()) {
            rows.push(ProductRow::Category(product.category.clone()));
            last_category = Some(&product.category);
        }
        rows.push(ProductRow::Item(product.clone()));
    }

    rows
}
