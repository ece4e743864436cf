//! Cart

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    pricing,
    products::{Product, ProductId},
};

/// One row in the cart.
///
/// All fields except `amount` are fixed at insertion time: repeated adds of
/// the same product accumulate quantity and leave the rest untouched.
/// `price_with_vat` is derivable from `price_without_vat` and `vat` but is
/// stored anyway, so the session blob can be rendered without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product key, duplicated from the map key for blob fidelity.
    pub product_id: ProductId,

    /// Display name captured at insertion, never refreshed from a catalog.
    pub name: String,

    /// Quantity, at least one.
    pub amount: u32,

    /// Unit price excluding VAT.
    pub price_without_vat: Decimal,

    /// Unit price including VAT, computed once at insertion.
    pub price_with_vat: Decimal,

    /// VAT rate, dual-encoded (see [`crate::pricing`]).
    pub vat: Decimal,

    /// Discount rate, dual-encoded; the only mutable rate.
    pub discount: Decimal,
}

/// The cart aggregate: a mapping from product id to line item.
///
/// Keys are unique and insertion order is irrelevant; adding a product that
/// is already present increments its `amount` rather than duplicating the
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: FxHashMap<ProductId, LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart::default()
    }

    /// Add a product, accumulating quantity if it is already present.
    ///
    /// First write wins for name, price, VAT and discount: on a repeat add
    /// only `amount` changes.
    pub fn add(&mut self, product: &Product, amount: u32) {
        if let Some(item) = self.items.get_mut(product.product_id()) {
            item.amount += amount;
            return;
        }

        let item = LineItem {
            product_id: product.product_id().clone(),
            name: product.name().to_owned(),
            amount,
            price_without_vat: product.price(),
            price_with_vat: pricing::price_with_vat(product.price(), product.vat()),
            vat: product.vat(),
            discount: product.discount(),
        };

        self.items.insert(product.product_id().clone(), item);
    }

    /// Overwrite the discount rate of an existing line item.
    ///
    /// Returns `false` and leaves the cart unchanged when the product is not
    /// present.
    pub fn set_discount(&mut self, product_id: &ProductId, discount: Decimal) -> bool {
        match self.items.get_mut(product_id) {
            Some(item) => {
                item.discount = discount;
                true
            }
            None => false,
        }
    }

    /// Get a line item by product id.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.get(product_id)
    }

    /// Iterate over the line items in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.values()
    }

    /// Get the number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
