//! Field parsing for exercise input and log bounds.
//!
//! Text fields are accepted as given. Numeric and date fields are parsed here
//! and rejected with `invalid_request`, naming the offending field in
//! `details`. Services call these after the owning user has been found.

use serde_json::json;

use crate::domain::{DurationMinutes, Error, ExerciseDate, ExerciseValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    MissingField,
    InvalidDuration,
    InvalidDate,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidDuration => "invalid_duration",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// Name of a request field, as clients spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    const fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const DURATION: FieldName = FieldName("duration");
pub(crate) const DATE: FieldName = FieldName("date");
pub(crate) const FROM: FieldName = FieldName("from");
pub(crate) const TO: FieldName = FieldName("to");

fn field_error(field: FieldName, err: &ExerciseValidationError) -> Error {
    let (code, value) = match err {
        ExerciseValidationError::MissingDuration => (ValidationCode::MissingField, None),
        ExerciseValidationError::InvalidDuration { value } => {
            (ValidationCode::InvalidDuration, Some(value.as_str()))
        }
        ExerciseValidationError::InvalidDate { value } => {
            (ValidationCode::InvalidDate, Some(value.as_str()))
        }
    };
    let mut details = json!({ "field": field.as_str(), "code": code.as_str() });
    if let Some(value) = value {
        details["value"] = json!(value);
    }
    Error::invalid_request(format!("{}: {err}", field.as_str())).with_details(details)
}

/// Parse the required `duration` field.
pub(crate) fn parse_duration(raw: Option<&str>) -> Result<DurationMinutes, Error> {
    DurationMinutes::parse(raw.unwrap_or_default()).map_err(|err| field_error(DURATION, &err))
}

/// Parse an optional date field. Absent or blank input yields `None`.
pub(crate) fn parse_optional_date(
    field: FieldName,
    raw: Option<&str>,
) -> Result<Option<ExerciseDate>, Error> {
    ExerciseDate::parse_optional(raw).map_err(|err| field_error(field, &err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(None, "missing_field")]
    #[case(Some(""), "missing_field")]
    #[case(Some("abc"), "invalid_duration")]
    #[case(Some("-5"), "invalid_duration")]
    fn duration_errors_name_the_field(#[case] raw: Option<&str>, #[case] code: &str) {
        let err = parse_duration(raw).expect_err("invalid duration");
        let details = err.details().expect("details");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(details["field"], "duration");
        assert_eq!(details["code"], code);
    }

    #[rstest]
    #[case(DATE, "date")]
    #[case(FROM, "from")]
    #[case(TO, "to")]
    fn date_errors_echo_field_and_value(#[case] field: FieldName, #[case] name: &str) {
        let err = parse_optional_date(field, Some("31/12/2024")).expect_err("bad date");
        let details = err.details().expect("details");

        assert_eq!(details["field"], name);
        assert_eq!(details["value"], "31/12/2024");
        assert_eq!(details["code"], "invalid_date");
    }

    #[rstest]
    fn blank_dates_are_absent() {
        assert_eq!(parse_optional_date(DATE, Some(" ")).expect("blank ok"), None);
    }
}
