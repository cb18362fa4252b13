//! # Fechas dd-MM-yyyy
//! src/codec/date.rs
//!
//! Único formato de fecha aceptado en el wire: dos dígitos de día, dos de
//! mes y cuatro de año separados por guiones (`25-12-2024`). La forma se
//! valida con una regex y el calendario con chrono, así `1-3-2024` y
//! `31-02-2024` se rechazan por igual.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serializer;
use std::sync::OnceLock;
use thiserror::Error;

/// Formato chrono equivalente a `dd-MM-yyyy`
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format, use dd-MM-yyyy")]
    InvalidFormat(String),
}

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("date regex is valid"))
}

/// Parsea una fecha `dd-MM-yyyy`
///
/// # Ejemplo
/// ```
/// use employee_server::codec::date::parse_date;
///
/// assert!(parse_date("25-12-2024").is_ok());
/// assert!(parse_date("2024-12-25").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    if !date_shape().is_match(text) {
        return Err(DateError::InvalidFormat(text.to_string()));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(text.to_string()))
}

/// Formatea una fecha como `dd-MM-yyyy`
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serializer para `#[serde(serialize_with = "...")]`
pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(
            parse_date("25-12-2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
        );
        assert_eq!(
            parse_date("29-02-2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_reject_iso_format() {
        assert!(parse_date("2024-12-25").is_err());
    }

    #[test]
    fn test_reject_impossible_calendar_dates() {
        assert!(parse_date("31-02-2024").is_err());
        assert!(parse_date("29-02-2023").is_err());
        assert!(parse_date("00-01-2024").is_err());
        assert!(parse_date("15-13-2024").is_err());
    }

    #[test]
    fn test_reject_unpadded_and_padded_variants() {
        assert!(parse_date("1-3-2024").is_err());
        assert!(parse_date(" 01-03-2024").is_err());
        assert!(parse_date("01-03-24").is_err());
        assert!(parse_date("01/03/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_format_roundtrip_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(&date), "01-03-2024");
    }

    #[test]
    fn test_error_message() {
        let error = parse_date("nope").unwrap_err();
        assert_eq!(error.to_string(), "Invalid date format, use dd-MM-yyyy");
    }
}
