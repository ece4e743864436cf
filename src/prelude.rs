//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem},
    pricing::{Totals, discounted_price, price_with_vat, totals},
    products::{Product, ProductError, ProductId},
    session::{MemorySession, SessionError, SessionStore},
    store::{CartStore, StoreError},
};
