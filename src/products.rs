//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating product input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The product id was empty.
    #[error("product id must not be empty")]
    EmptyProductId,

    /// The unit price was negative.
    #[error("unit price must not be negative, got {0}")]
    NegativePrice(Decimal),

    /// A rate (VAT or discount) was negative (rate name, offending value).
    #[error("{0} rate must not be negative, got {1}")]
    NegativeRate(&'static str, Decimal),
}

/// Key identifying a product within a cart.
///
/// Both string and integer keys are accepted; integers convert through
/// [`ProductId::from`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        ProductId(value)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value.to_string())
    }
}

/// Validated input to [`crate::store::CartStore::add_item`].
///
/// `vat` and `discount` follow the dual-encoding convention described in
/// [`crate::pricing`]: values below one are fractions, values of one or more
/// are whole-number percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: Decimal,
    vat: Decimal,
    discount: Decimal,
}

impl Product {
    /// Create a product with no discount.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the id is empty, the price is negative,
    /// or the VAT rate is negative.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        vat: Decimal,
    ) -> Result<Self, ProductError> {
        Self::with_discount(product_id, name, price, vat, Decimal::ZERO)
    }

    /// Create a product with an initial discount rate.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] if the id is empty, the price is negative,
    /// or either rate is negative.
    pub fn with_discount(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        vat: Decimal,
        discount: Decimal,
    ) -> Result<Self, ProductError> {
        let product_id = product_id.into();

        if product_id.as_str().is_empty() {
            return Err(ProductError::EmptyProductId);
        }

        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(price));
        }

        if vat < Decimal::ZERO {
            return Err(ProductError::NegativeRate("vat", vat));
        }

        if discount < Decimal::ZERO {
            return Err(ProductError::NegativeRate("discount", discount));
        }

        Ok(Product {
            product_id,
            name: name.into(),
            price,
            vat,
            discount,
        })
    }

    /// Returns the product id.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price excluding VAT.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the VAT rate.
    pub fn vat(&self) -> Decimal {
        self.vat
    }

    /// Returns the discount rate.
    pub fn discount(&self) -> Decimal {
        self.discount
    }
}
