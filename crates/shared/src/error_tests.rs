use super::*;
use rstest::rstest;

#[rstest]
#[case(AppError::NotFound("x".into()), 66, "NOT_FOUND")]
#[case(AppError::Validation("x".into()), 65, "VALIDATION_ERROR")]
#[case(AppError::InvalidRange("x".into()), 65, "INVALID_RANGE")]
#[case(AppError::Conflict("x".into()), 73, "CONFLICT")]
#[case(AppError::Database("x".into()), 69, "DATABASE_ERROR")]
#[case(AppError::Internal("x".into()), 70, "INTERNAL_ERROR")]
fn test_exit_and_error_codes(#[case] error: AppError, #[case] exit: u8, #[case] code: &str) {
    assert_eq!(error.exit_code(), exit);
    assert_eq!(error.error_code(), code);
}

#[test]
fn test_error_display() {
    assert_eq!(
        AppError::NotFound("owner 7".into()).to_string(),
        "Not found: owner 7"
    );
    assert_eq!(
        AppError::InvalidRange("2024-03-31 > 2024-03-01".into()).to_string(),
        "Invalid date range: 2024-03-31 > 2024-03-01"
    );
    assert_eq!(
        AppError::Conflict("msg".into()).to_string(),
        "Conflict: msg"
    );
}
