use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Product, ProductDraft, ProductId};

/// Backend column width for product names.
pub const NAME_MAX_CHARS: usize = 255;

/// Prices are entered in whole cents.
pub const PRICE_MAX_DECIMALS: u32 = 2;

/// Which record the form is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingContext {
    #[default]
    Creating,
    /// Weak reference: the product may have been deleted server-side since.
    Editing(ProductId),
}

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the name must not be empty")]
    EmptyName,
    #[error("the name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("the price '{input}' is not a number")]
    InvalidPrice { input: String },
    #[error("the price must be greater than 0")]
    NonPositivePrice,
    #[error("the price must have at most {max} decimal places")]
    TooManyDecimals { max: u32 },
}

/// Create/edit form. Starts in create mode; `seed` switches to edit mode and
/// `clear` switches back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    mode: EditingContext,
    name: String,
    price: String,
    is_offer: bool,
    error: Option<FormError>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditingContext {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn is_offer(&self) -> bool {
        self.is_offer
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_offer(&mut self, is_offer: bool) {
        self.is_offer = is_offer;
    }

    /// Enters edit mode with the product's current values.
    pub fn seed(&mut self, product: &Product) {
        self.mode = EditingContext::Editing(product.id);
        self.name = product.name.clone();
        self.price = product.price.normalize().to_string();
        self.is_offer = product.is_offer;
        self.error = None;
    }

    /// Back to create mode with empty fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Back to create mode, keeping whatever was typed since the last submit.
    pub fn end_edit(&mut self) {
        self.mode = EditingContext::Creating;
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && !self.is_offer
    }

    /// Puts a previously submitted draft back into the fields.
    pub fn restore(&mut self, draft: &ProductDraft) {
        self.name = draft.name.clone();
        self.price = draft.price.normalize().to_string();
        self.is_offer = draft.is_offer;
    }

    /// Validates the fields. On success the normalized draft is returned and
    /// the fields are reset immediately; the mode is left for the caller to
    /// clear. On failure the fields are kept for correction.
    pub fn submit(&mut self) -> Result<ProductDraft, FormError> {
        match validate(&self.name, &self.price) {
            Ok((name, price)) => {
                let draft = ProductDraft {
                    name,
                    price,
                    is_offer: self.is_offer,
                };
                self.name.clear();
                self.price.clear();
                self.is_offer = false;
                self.error = None;
                Ok(draft)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

fn validate(name: &str, price: &str) -> Result<(String, Decimal), FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(FormError::NameTooLong {
            max: NAME_MAX_CHARS,
        });
    }
    let price = parse_price(price)?;
    if price <= Decimal::ZERO {
        return Err(FormError::NonPositivePrice);
    }
    Ok((name.to_string(), price))
}

/// Accepts `.` or a single `,` as decimal separator, and scientific notation.
/// Digit separators are rejected and at most two decimal places are kept.
pub fn parse_price(input: &str) -> Result<Decimal, FormError> {
    let trimmed = input.trim();
    let invalid = || FormError::InvalidPrice {
        input: input.to_string(),
    };
    if trimmed.is_empty() || trimmed.contains('_') {
        return Err(invalid());
    }
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    let price = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| invalid())?
        .normalize();
    if price.scale() > PRICE_MAX_DECIMALS {
        return Err(FormError::TooManyDecimals {
            max: PRICE_MAX_DECIMALS,
        });
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_accepts_common_spellings() {
        assert_eq!(parse_price("999.99"), Ok(Decimal::new(99999, 2)));
        assert_eq!(parse_price(" 999,99 "), Ok(Decimal::new(99999, 2)));
        assert_eq!(parse_price("1e3"), Ok(Decimal::from(1000)));
        assert_eq!(parse_price("10"), Ok(Decimal::from(10)));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert!(matches!(
            parse_price("abc"),
            Err(FormError::InvalidPrice { .. })
        ));
        assert!(matches!(parse_price("   "), Err(FormError::InvalidPrice { .. })));
        assert!(matches!(
            parse_price("1,2,3"),
            Err(FormError::InvalidPrice { .. })
        ));
        assert!(matches!(
            parse_price("1_000"),
            Err(FormError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn parse_price_rejects_sub_cent_amounts() {
        assert_eq!(
            parse_price("0.001"),
            Err(FormError::TooManyDecimals { max: 2 })
        );
        assert_eq!(
            parse_price("12,345"),
            Err(FormError::TooManyDecimals { max: 2 })
        );
        assert_eq!(parse_price("12.50"), Ok(Decimal::new(125, 1)));
        assert_eq!(parse_price("1.25e1"), Ok(Decimal::new(125, 1)));
        assert_eq!(
            parse_price("1.5e-2"),
            Err(FormError::TooManyDecimals { max: 2 })
        );
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        let name = "é".repeat(NAME_MAX_CHARS);
        assert!(validate(&name, "1").is_ok());
        let too_long = "é".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(
            validate(&too_long, "1"),
            Err(FormError::NameTooLong {
                max: NAME_MAX_CHARS
            })
        );
    }
}
