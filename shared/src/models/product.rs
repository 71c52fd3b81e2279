//! Product catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product with its fixed maximum retail price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Grouping label used as the top-level section key in entry and
    /// reporting views
    pub brand: String,
    /// Maximum retail price per unit, the reference selling price
    pub mrp: Decimal,
}

/// Products of one brand, in catalog declaration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandGroup {
    pub brand: String,
    pub products: Vec<Product>,
}

/// Partition products into brand buckets.
///
/// Brand order follows the first occurrence of each brand in the catalog;
/// products keep their declaration order within a brand.
pub fn group_by_brand(products: &[Product]) -> Vec<BrandGroup> {
    let mut groups: Vec<BrandGroup> = Vec::new();
    for product in products {
        match groups.iter_mut().find(|g| g.brand == product.brand) {
            Some(group) => group.products.push(product.clone()),
            None => groups.push(BrandGroup {
                brand: product.brand.clone(),
                products: vec![product.clone()],
            }),
        }
    }
    groups
}
