use proptest::prelude::*;
use rust_decimal::Decimal;

use pluto::products::models::MAX_PRICE_INTEGER_DIGITS;
use pluto::products::{Product, ProductDto};

/// Property tests for the product price rule
///
/// Validates:
/// - any price <= 0 is rejected on creation and on update
/// - any positive price below 10^14 with up to 6 decimal places is stored exactly
/// - prices too large for DECIMAL(20,6) are rejected before storage
/// - a rejected update leaves the stored price untouched

#[cfg(test)]
mod product_price_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_non_positive_price_rejected(mantissa in i64::MIN..=0i64, scale in 0u32..=6) {
            let price = Decimal::new(mantissa, scale);
            let err = Product::new("Pen".to_string(), price, None).unwrap_err();
            prop_assert!(err.is_validation());
        }

        #[test]
        fn test_positive_price_stored_exactly(mantissa in 1i64..100_000_000_000_000, scale in 0u32..=6) {
            let price = Decimal::new(mantissa, scale);
            let product = Product::new("Pen".to_string(), price, None).unwrap();
            prop_assert_eq!(product.price(), price);
            prop_assert_eq!(product.price().to_string(), price.to_string());
        }

        #[test]
        fn test_rejected_update_keeps_price(
            original in 1i64..1_000_000,
            bad in i64::MIN..=0i64
        ) {
            let price = Decimal::new(original, 2);
            let mut product = Product::new("Pen".to_string(), price, None).unwrap();

            prop_assert!(product.update_price(Decimal::new(bad, 2)).is_err());
            prop_assert_eq!(product.price(), price);
        }

        #[test]
        fn test_oversized_price_rejected(integer in 100_000_000_000_000i64..i64::MAX) {
            let err = Product::new("Pen".to_string(), Decimal::from(integer), None).unwrap_err();
            prop_assert!(err.is_validation());
        }

        #[test]
        fn test_dto_with_bad_price_never_converts(mantissa in -1_000_000i64..=0) {
            let dto = ProductDto::new("Pen", Decimal::new(mantissa, 2), None);
            prop_assert!(dto.to_domain().is_err());
        }
    }

    #[test]
    fn test_price_bound_matches_column_width() {
        let largest = Decimal::from_i128_with_scale(99_999_999_999_999_999_999, 6);
        let product = Product::new("Pen".to_string(), largest, None).unwrap();
        assert_eq!(product.price(), largest);

        let bound = Decimal::from(10i64.pow(MAX_PRICE_INTEGER_DIGITS));
        let err = Product::new("Pen".to_string(), bound, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_excess_scale_rejected() {
        let price = Decimal::new(1, 7);
        assert!(price > Decimal::ZERO);

        let err = Product::new("Pen".to_string(), price, None).unwrap_err();
        assert!(err.is_validation());
    }
}
