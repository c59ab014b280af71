pub mod achievement_mapper;
pub mod book_mapper;
pub mod child_mapper;
pub mod family_mapper;
pub mod progress_mapper;
pub mod session_mapper;

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` field from a request
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        DomainError::validation(format!("Invalid {} '{}', expected YYYY-MM-DD", field, value)).into()
    })
}

pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(|value| parse_date(field, value)).transpose()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("finish_date", "2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 2, 8).unwrap()), "2025-02-08");

        let err = parse_date("finish_date", "28/02/2025").unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::Validation(_))));
        assert_eq!(parse_optional_date("date", None).unwrap(), None);
    }
}
