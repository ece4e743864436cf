//! Cart store

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    pricing::{self, Totals},
    products::{Product, ProductId},
    session::{SessionError, SessionStore},
};

/// Session key holding the serialized cart, one per session.
const SESSION_KEY: &str = "shoppingCart";

/// Errors raised by the cart store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The session store failed to read or write.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The cart could not be encoded for persistence.
    #[error("failed to encode cart for the session")]
    Encode(#[source] serde_json::Error),

    /// The blob stored in the session is not a valid cart.
    #[error("stored cart blob is corrupt")]
    Decode(#[source] serde_json::Error),

    /// A quantity of zero was supplied.
    #[error("amount must be at least one")]
    ZeroAmount,
}

/// Owns the cart aggregate and mediates all reads and writes against a
/// session-backed store.
///
/// Construction requires a session handle: there is no ambient session and
/// no lazy initialization. [`CartStore::open`] establishes the cart
/// deterministically, and every mutation persists the full cart back under
/// a single session key. Persistence failures surface as errors instead of
/// being silently swallowed.
#[derive(Debug)]
pub struct CartStore<S: SessionStore> {
    session: S,
    cart: Cart,
}

impl<S: SessionStore> CartStore<S> {
    /// Open the cart stored in `session`, or start an empty one if the
    /// session holds no cart yet.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Session`]: the session could not be read.
    /// - [`StoreError::Decode`]: the session holds a blob that is not a
    ///   valid cart.
    pub fn open(session: S) -> Result<Self, StoreError> {
        let cart = match session.get(SESSION_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(StoreError::Decode)?,
            None => Cart::new(),
        };

        debug!(items = cart.len(), "loaded cart from session");

        Ok(CartStore { session, cart })
    }

    /// Add `amount` units of a product, accumulating quantity if the
    /// product is already in the cart, and persist.
    ///
    /// On a repeat add only the quantity changes; name, price, VAT and
    /// discount keep their values from the first add.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ZeroAmount`]: `amount` was zero.
    /// - [`StoreError::Encode`] / [`StoreError::Session`]: the updated cart
    ///   could not be persisted.
    pub fn add_item(&mut self, product: &Product, amount: u32) -> Result<(), StoreError> {
        if amount == 0 {
            return Err(StoreError::ZeroAmount);
        }

        self.cart.add(product, amount);
        self.persist()
    }

    /// Add one unit of each product and persist once at the end.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Encode`] / [`StoreError::Session`]: the updated cart
    ///   could not be persisted.
    pub fn add_items<'a, I>(&mut self, products: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        for product in products {
            self.cart.add(product, 1);
        }

        self.persist()
    }

    /// Overwrite the discount rate of an existing line item and persist.
    ///
    /// Returns `Ok(false)` without mutating or persisting anything when the
    /// product is not in the cart.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Encode`] / [`StoreError::Session`]: the updated cart
    ///   could not be persisted.
    pub fn update_discount(
        &mut self,
        product_id: &ProductId,
        discount: Decimal,
    ) -> Result<bool, StoreError> {
        if !self.cart.set_discount(product_id, discount) {
            return Ok(false);
        }

        self.persist()?;

        Ok(true)
    }

    /// Apply a batch of discount updates, persisting once at the end.
    ///
    /// Entries are applied independently: an unknown product id does not
    /// abort the remaining entries. Returns `Ok(true)` only if every entry
    /// named a product present in the cart.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Encode`] / [`StoreError::Session`]: the updated cart
    ///   could not be persisted.
    pub fn update_discounts<'a, I>(&mut self, discounts: I) -> Result<bool, StoreError>
    where
        I: IntoIterator<Item = (&'a ProductId, Decimal)>,
    {
        let mut all_found = true;

        for (product_id, discount) in discounts {
            if !self.cart.set_discount(product_id, discount) {
                all_found = false;
            }
        }

        self.persist()?;

        Ok(all_found)
    }

    /// The current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Aggregate totals over the current cart contents.
    #[must_use]
    pub fn totals(&self) -> Totals {
        pricing::totals(&self.cart)
    }

    /// Give the session handle back, dropping the in-memory cart.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Serialize the cart and write it under the session key.
    fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.cart).map_err(StoreError::Encode)?;

        self.session.insert(SESSION_KEY, blob)?;

        debug!(items = self.cart.len(), "persisted cart to session");

        Ok(())
    }
}
