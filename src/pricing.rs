//! Pricing
//!
//! Discount and VAT rates are dual-encoded: a value below one is a fraction
//! (`0.2` means 20%), a value of one or more is a whole-number percentage
//! (`20` means 20%, and `1` means 1%, not 100%). The boundary at exactly one
//! falls on the percentage side. Downstream totals depend on this convention,
//! including the boundary, so both branches are kept exactly as documented.

use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// The four aggregate values computed over a cart.
///
/// Serialized field names carry the `total_price_` prefix consumers expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of raw unit prices, before discount and VAT.
    #[serde(rename = "total_price_without_discount")]
    pub without_discount: Decimal,

    /// Sum of discounted unit prices, before VAT.
    #[serde(rename = "total_price_without_vat")]
    pub without_vat: Decimal,

    /// Sum of discounted unit prices, after VAT.
    #[serde(rename = "total_price_with_vat")]
    pub with_vat: Decimal,

    /// VAT portion: `with_vat - without_vat`.
    #[serde(rename = "total_price_vat")]
    pub vat: Decimal,
}

/// Apply a dual-encoded discount rate to a price.
///
/// A zero rate leaves the price unchanged.
#[must_use]
pub fn discounted_price(price: Decimal, discount: Decimal) -> Decimal {
    if discount.is_zero() {
        return price;
    }

    let discounted = if discount < Decimal::ONE {
        price - price * discount
    } else {
        price - price * discount / dec!(100)
    };

    // Strip the scale picked up by decimal multiplication so 45.0 stores
    // and serializes as 45.
    discounted.normalize()
}

/// Apply a dual-encoded VAT rate to a price.
#[must_use]
pub fn price_with_vat(price: Decimal, vat: Decimal) -> Decimal {
    let taxed = if vat < Decimal::ONE {
        price * (Decimal::ONE + vat)
    } else {
        price * (Decimal::ONE + vat / dec!(100))
    };

    taxed.normalize()
}

/// Calculate the aggregate totals over all line items in a cart.
///
/// Quantities are not factored in: each line item contributes its unit price
/// once, regardless of `amount`. An empty cart yields all zeroes.
///
/// `without_discount` is a true sum of raw unit prices over all line items,
/// independent of map iteration order.
#[must_use]
pub fn totals(cart: &Cart) -> Totals {
    let mut totals = Totals::default();

    for item in cart.iter() {
        let discounted = discounted_price(item.price_without_vat, item.discount);

        totals.without_discount += item.price_without_vat;
        totals.without_vat += discounted;
        totals.with_vat += price_with_vat(discounted, item.vat);
    }

    totals.vat = totals.with_vat - totals.without_vat;

    totals
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn zero_discount_leaves_price_unchanged() {
        assert_eq!(discounted_price(dec!(100), Decimal::ZERO), dec!(100));
    }

    #[test]
    fn fractional_discount_is_a_fraction_of_the_price() {
        assert_eq!(discounted_price(dec!(100), dec!(0.25)), dec!(75));
    }

    #[test]
    fn discount_of_exactly_one_means_one_percent() {
        // The boundary falls on the percentage side: 1 is 1%, not 100%.
        assert_eq!(discounted_price(dec!(100), dec!(1)), dec!(99));
    }

    #[test]
    fn whole_number_discount_is_a_percentage() {
        assert_eq!(discounted_price(dec!(100), dec!(25)), dec!(75));
    }

    #[test]
    fn fractional_vat_marks_up_by_the_fraction() {
        assert_eq!(price_with_vat(dec!(100), dec!(0.2)), dec!(120));
    }

    #[test]
    fn vat_of_exactly_one_means_one_percent() {
        assert_eq!(price_with_vat(dec!(100), dec!(1)), dec!(101));
    }

    #[test]
    fn whole_number_vat_is_a_percentage() {
        assert_eq!(price_with_vat(dec!(100), dec!(20)), dec!(120));
    }

    #[test]
    fn totals_of_empty_cart_are_all_zero() {
        let totals = totals(&Cart::new());

        assert_eq!(totals.without_discount, Decimal::ZERO);
        assert_eq!(totals.without_vat, Decimal::ZERO);
        assert_eq!(totals.with_vat, Decimal::ZERO);
        assert_eq!(totals.vat, Decimal::ZERO);
    }

    #[test]
    fn totals_over_mixed_rate_encodings() -> TestResult {
        // Product A: 100 excl. VAT, fractional VAT 0.2, no discount.
        // Product B: 50 excl. VAT, percentage VAT 10, fractional discount 0.1.
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", dec!(100), dec!(0.2))?, 1);
        cart.add(
            &Product::with_discount("b", "B", dec!(50), dec!(10), dec!(0.1))?,
            1,
        );

        let totals = totals(&cart);

        assert_eq!(totals.without_discount, dec!(150));
        assert_eq!(totals.without_vat, dec!(145));
        assert_eq!(totals.with_vat, dec!(169.5));
        assert_eq!(totals.vat, dec!(24.5));

        Ok(())
    }

    #[test]
    fn totals_ignore_quantity() -> TestResult {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", dec!(100), dec!(20))?, 3);

        let totals = totals(&cart);

        assert_eq!(totals.without_vat, dec!(100));
        assert_eq!(totals.with_vat, dec!(120));

        Ok(())
    }

    #[test]
    fn totals_serialize_under_their_wire_names() -> TestResult {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", dec!(100), dec!(20))?, 1);

        let blob = serde_json::to_value(totals(&cart))?;

        assert_eq!(blob["total_price_without_discount"], "100");
        assert_eq!(blob["total_price_without_vat"], "100");
        assert_eq!(blob["total_price_with_vat"], "120");
        assert_eq!(blob["total_price_vat"], "20");

        Ok(())
    }
}
