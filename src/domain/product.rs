use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Laptops,
    Smartphones,
    Tablets,
    Accessories,
    Gaming,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laptops => "laptops",
            Category::Smartphones => "smartphones",
            Category::Tablets => "tablets",
            Category::Accessories => "accessories",
            Category::Gaming => "gaming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laptops" => Ok(Category::Laptops),
            "smartphones" => Ok(Category::Smartphones),
            "tablets" => Ok(Category::Tablets),
            "accessories" => Ok(Category::Accessories),
            "gaming" => Ok(Category::Gaming),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A single catalog entry.
///
/// `old_price` is only meaningful for a discount when it exceeds `price`;
/// the query pipeline treats it as opaque data either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub brand: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub in_stock: bool,
    pub is_new: bool,
    pub featured: bool,
    pub rating: f64,
}

impl Product {
    /// Discount percentage implied by `old_price`, if it actually exceeds
    /// the current price. Rounded to the nearest whole percent.
    pub fn discount_percentage(&self) -> Option<u32> {
        match self.old_price {
            Some(old) if old > self.price && old > 0.0 => {
                Some(((1.0 - self.price / old) * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub brand: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub in_stock: bool,
    pub is_new: bool,
    pub featured: bool,
    pub rating: f64,
}

/// Payload for partially updating an existing product.
///
/// `old_price` can only be set, not cleared, through a patch.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub old_price: Option<f64>,
    pub in_stock: Option<bool>,
    pub is_new: Option<bool>,
    pub featured: Option<bool>,
    pub rating: Option<f64>,
}
