//! Product type as served by the catalog endpoint.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StorefrontError;
use crate::ids::ProductId;
use crate::money::Money;

/// Installment plan shown under the shelf price.
///
/// Serialized as a `[count, value]` pair. `count * value` is not required to
/// match the product price, but both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(u32, Money)", into = "(u32, Money)")]
pub struct Installment {
    /// Number of installments.
    pub count: u32,
    /// Value of each installment.
    pub value: Money,
}

impl Installment {
    pub fn new(count: u32, value: Money) -> Self {
        Self { count, value }
    }

    /// Label shown on the shelf card (e.g., "até 3x de R$33,30").
    pub fn label(&self) -> String {
        format!("até {}x de {}", self.count, self.value.display())
    }

    /// Sum of all installments.
    pub fn total(&self) -> Money {
        self.value.multiply(i64::from(self.count))
    }
}

impl TryFrom<(u32, Money)> for Installment {
    type Error = StorefrontError;

    fn try_from((count, value): (u32, Money)) -> Result<Self, Self::Error> {
        if count == 0 {
            return Err(StorefrontError::InvalidArgument(
                "installment count must be at least 1".to_string(),
            ));
        }
        if value <= Money::zero() {
            return Err(StorefrontError::InvalidArgument(format!(
                "installment value must be positive, got {}",
                value.display()
            )));
        }
        Ok(Self { count, value })
    }
}

impl From<Installment> for (u32, Money) {
    fn from(installment: Installment) -> Self {
        (installment.count, installment.value)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: Money,
    /// Color name (e.g., "Azul").
    pub color: String,
    /// Size tokens this product is offered in.
    #[serde(default)]
    pub size: BTreeSet<String>,
    /// Image URL.
    pub image: String,
    /// Creation timestamp.
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    /// Installment plan.
    #[serde(rename = "parcelamento", alias = "installment")]
    pub installment: Installment,
}

impl Product {
    /// Formatted price label (e.g., "R$129,90").
    pub fn price_label(&self) -> String {
        self.price.display()
    }

    /// Check if the product is offered in a given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.size.contains(size)
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let price = Money::deserialize(deserializer)?;
    if price < Money::zero() {
        return Err(serde::de::Error::custom(format!(
            "negative price: {}",
            price.display()
        )));
    }
    Ok(price)
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

pub(crate) fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
