use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::timestamps::Timestamps;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Handmade,
    Bottle,
    Bakery,
    Canned,
}

impl ProductType {
    pub fn text(&self) -> &'static str {
        match self {
            ProductType::Handmade => "handmade beverage",
            ProductType::Bottle => "bottled beverage",
            ProductType::Bakery => "bakery",
            ProductType::Canned => "canned beverage",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Handmade => "HANDMADE",
            ProductType::Bottle => "BOTTLE",
            ProductType::Bakery => "BAKERY",
            ProductType::Canned => "CANNED",
        }
    }
}

impl FromStr for ProductType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HANDMADE" => Ok(ProductType::Handmade),
            "BOTTLE" => Ok(ProductType::Bottle),
            "BAKERY" => Ok(ProductType::Bakery),
            "CANNED" => Ok(ProductType::Canned),
            other => Err(ParseEnumError {
                kind: "product type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSellingStatus {
    Selling,
    Hold,
    StopSelling,
}

impl ProductSellingStatus {
    /// Statuses shown on the menu board.
    pub fn for_display() -> [Self; 2] {
        [ProductSellingStatus::Selling, ProductSellingStatus::Hold]
    }

    pub fn text(&self) -> &'static str {
        match self {
            ProductSellingStatus::Selling => "on sale",
            ProductSellingStatus::Hold => "on hold",
            ProductSellingStatus::StopSelling => "sales stopped",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSellingStatus::Selling => "SELLING",
            ProductSellingStatus::Hold => "HOLD",
            ProductSellingStatus::StopSelling => "STOP_SELLING",
        }
    }
}

impl FromStr for ProductSellingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SELLING" => Ok(ProductSellingStatus::Selling),
            "HOLD" => Ok(ProductSellingStatus::Hold),
            "STOP_SELLING" => Ok(ProductSellingStatus::StopSelling),
            other => Err(ParseEnumError {
                kind: "selling status",
                value: other.to_string(),
            }),
        }
    }
}

/// A catalog entry. Product numbers are not unique across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    pub price: i64,
    pub timestamps: Timestamps,
}

impl Product {
    pub fn new(
        product_number: String,
        product_type: ProductType,
        selling_status: ProductSellingStatus,
        name: String,
        price: i64,
    ) -> anyhow::Result<Self> {
        if product_number.trim().is_empty() {
            anyhow::bail!("product_number empty");
        }
        if name.trim().is_empty() {
            anyhow::bail!("name empty");
        }
        if price < 0 {
            anyhow::bail!("price must be >= 0");
        }
        Ok(Self {
            id: Uuid::new_v4(),
            product_number,
            product_type,
            selling_status,
            name,
            price,
            timestamps: Timestamps::now(),
        })
    }
}
