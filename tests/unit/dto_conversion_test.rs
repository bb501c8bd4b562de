use proptest::prelude::*;
use rust_decimal::Decimal;

use pluto::products::{Product, ProductDto, ProductPatch};
use pluto::users::{User, UserDto, UserPatch, UserStatus};

// Property tests for DTO conversions
//
// Validates:
// - from_domain(to_domain(d)) == d for every valid DTO
// - merging a patch keeps unspecified fields and takes the specified ones

fn user_status() -> impl Strategy<Value = UserStatus> {
    (0usize..4).prop_map(|i| UserStatus::ALL[i])
}

fn valid_user_dto() -> impl Strategy<Value = UserDto> {
    (
        proptest::option::of(1i64..1_000_000),
        "[a-z][a-z0-9_]{2,30}",
        "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,4}",
        user_status(),
    )
        .prop_map(|(id, username, email, status)| UserDto {
            id,
            username,
            email,
            status: status.to_string(),
        })
}

fn valid_product_dto() -> impl Strategy<Value = ProductDto> {
    (
        proptest::option::of(1i64..1_000_000),
        "[A-Za-z][A-Za-z ]{0,39}",
        1i64..10_000_000,
        0u32..=6,
        proptest::option::of("[a-z ]{0,60}"),
        prop_oneof![Just("active"), Just("inactive")],
    )
        .prop_map(|(id, name, mantissa, scale, description, status)| ProductDto {
            id,
            name,
            price: Decimal::new(mantissa, scale),
            description,
            status: status.to_string(),
        })
}

#[cfg(test)]
mod dto_conversion_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_user_dto_roundtrip(dto in valid_user_dto()) {
            let user: User = dto.to_domain().unwrap();
            prop_assert_eq!(UserDto::from_domain(&user), dto);
        }

        #[test]
        fn test_product_dto_roundtrip(dto in valid_product_dto()) {
            let product: Product = dto.to_domain().unwrap();
            prop_assert_eq!(ProductDto::from_domain(&product), dto);
        }

        #[test]
        fn test_user_merge_law(
            dto in valid_user_dto(),
            username in proptest::option::of("[a-z]{3,20}"),
            email in proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
            status in proptest::option::of(user_status())
        ) {
            let patch = UserPatch {
                username: username.clone(),
                email: email.clone(),
                status: status.map(|s| s.to_string()),
            };
            let merged = dto.clone().merged(patch);

            prop_assert_eq!(merged.id, dto.id);
            prop_assert_eq!(merged.username, username.unwrap_or(dto.username));
            prop_assert_eq!(merged.email, email.unwrap_or(dto.email));
            prop_assert_eq!(merged.status, status.map(|s| s.to_string()).unwrap_or(dto.status));
        }

        #[test]
        fn test_product_merge_law(
            dto in valid_product_dto(),
            name in proptest::option::of("[A-Za-z]{1,20}"),
            cents in proptest::option::of(1i64..100_000),
            description in proptest::option::of(proptest::option::of("[a-z ]{0,20}"))
        ) {
            let price = cents.map(|c| Decimal::new(c, 2));
            let patch = ProductPatch {
                name: name.clone(),
                price,
                description: description.clone(),
                ..Default::default()
            };
            let merged = dto.clone().merged(patch);

            prop_assert_eq!(merged.id, dto.id);
            prop_assert_eq!(merged.name, name.unwrap_or(dto.name));
            prop_assert_eq!(merged.price, price.unwrap_or(dto.price));
            prop_assert_eq!(merged.description, description.unwrap_or(dto.description));
            prop_assert_eq!(merged.status, dto.status);
        }
    }

    #[test]
    fn test_empty_patches() {
        assert!(UserPatch::default().is_empty());
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch {
            price: Some(Decimal::ONE),
            ..Default::default()
        }
        .is_empty());
    }
}
