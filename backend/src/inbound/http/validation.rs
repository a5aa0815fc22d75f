//! Path parameter parsing.

use crate::domain::{Error, USER_NOT_FOUND, UserId};

/// Parse a user id taken from the path.
///
/// A malformed id cannot name any user, so it is reported as `not_found`
/// rather than as a validation failure.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found(USER_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("64b7f1c2e4b0a1a2b3c4d5e6")]
    fn malformed_user_ids_are_not_found(#[case] raw: &str) {
        let err = parse_user_id(raw).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND);
    }
}
