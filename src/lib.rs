//! Trolley
//!
//! Trolley is a small session-backed shopping cart engine: it tracks products
//! added within a user session, supports per-product discount updates, and
//! computes aggregate totals before and after discount and VAT.

pub mod cart;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod session;
pub mod store;
