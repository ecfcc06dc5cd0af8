use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type ProductId = u64;

/// Server-owned product record. The client only ever holds snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "wire_price")]
    pub price: Decimal,
    pub is_offer: bool,
    /// Opaque server timestamps; only used for display.
    pub created_at: String,
    pub updated_at: String,
}

/// Normalized, validated field values ready to be sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub is_offer: bool,
}

/// Partial update body. `None` fields are omitted and left unchanged server-side.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_offer: Option<bool>,
}

impl From<ProductDraft> for ProductPatch {
    fn from(draft: ProductDraft) -> Self {
        Self {
            name: Some(draft.name),
            price: Some(draft.price),
            is_offer: Some(draft.is_offer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub total: u64,
    pub items: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub message: String,
    pub id: ProductId,
}

/// Server-side offer filter, sent as the optional `is_offer` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferFilter {
    #[default]
    All,
    OffersOnly,
    RegularOnly,
}

impl OfferFilter {
    pub fn as_query(self) -> Option<bool> {
        match self {
            OfferFilter::All => None,
            OfferFilter::OffersOnly => Some(true),
            OfferFilter::RegularOnly => Some(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    pub is_offer: Option<bool>,
}

/// Server prices are unbounded floats. Decoding never fails on range: values
/// beyond `Decimal` saturate and positive values below one cent become one
/// cent, so a stored price stays greater than zero.
mod wire_price {
    use super::*;

    pub fn serialize<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(price, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Ok(price_from_f64(raw))
    }

    pub(super) fn price_from_f64(raw: f64) -> Decimal {
        let cent = Decimal::new(1, 2);
        match Decimal::from_str(&raw.to_string()) {
            Ok(price) if raw > 0.0 && price < cent => cent,
            Ok(price) => price,
            Err(_) if raw < 0.0 => Decimal::MIN,
            Err(_) => Decimal::MAX,
        }
    }
}
