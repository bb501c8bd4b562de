use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use pluto::users::{InMemoryUserRepository, User, UserDto, UserService, UserStatus};

/// Property tests for user invariants
///
/// Validates:
/// - usernames of 3..=50 characters are accepted, anything else rejected
/// - emails need a local part and a dotted domain
/// - every status string parses back to the same status
/// - identities assigned by storage are unique

#[cfg(test)]
mod user_model_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_username_length_bounds(username in "[a-z0-9_]{3,50}") {
            let user = User::new(username.clone(), "a@x.com".to_string(), UserStatus::Active);
            prop_assert!(user.is_ok());
            let user = user.unwrap();
            prop_assert_eq!(user.username(), username.as_str());
        }

        #[test]
        fn test_username_outside_bounds_rejected(
            username in prop_oneof!["[a-z]{1,2}", "[a-z]{51,80}"]
        ) {
            let err = User::new(username, "a@x.com".to_string(), UserStatus::Active).unwrap_err();
            prop_assert!(err.is_validation());
        }

        #[test]
        fn test_well_formed_email_accepted(
            local in "[a-z0-9.]{1,20}",
            host in "[a-z]{1,20}",
            tld in "[a-z]{2,6}"
        ) {
            let email = format!("{}@{}.{}", local, host, tld);
            prop_assert!(User::new("alice".to_string(), email, UserStatus::Pending).is_ok());
        }

        #[test]
        fn test_email_without_at_rejected(email in "[a-z.]{3,40}") {
            let err = User::new("alice".to_string(), email, UserStatus::Active).unwrap_err();
            prop_assert!(err.is_validation());
        }

        #[test]
        fn test_status_string_roundtrip(index in 0usize..4) {
            let status = UserStatus::ALL[index];
            let parsed: UserStatus = status.as_str().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        #[test]
        fn test_status_change_into_same_state_is_noop(index in 0usize..4) {
            let status = UserStatus::ALL[index];
            let mut user = User::new("alice".to_string(), "a@x.com".to_string(), status).unwrap();
            prop_assert!(!user.change_status(status));
            prop_assert_eq!(user.status(), status);
        }

        #[test]
        fn test_created_users_get_unique_ids(count in 1usize..40) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let ids = runtime.block_on(async {
                let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
                let mut ids = Vec::with_capacity(count);
                for i in 0..count {
                    let dto = UserDto::new(format!("user{:03}", i), format!("u{}@x.com", i), "active");
                    ids.push(service.create_user(dto).await.unwrap().id.unwrap());
                }
                ids
            });

            let unique: HashSet<i64> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_unknown_status_lists_valid_values() {
        let err = "archived".parse::<UserStatus>().unwrap_err();
        let message = err.to_string();
        for status in UserStatus::ALL {
            assert!(message.contains(status.as_str()));
        }
    }
}
