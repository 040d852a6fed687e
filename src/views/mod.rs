//! View models rendered by the pages and mutation handlers

pub mod banner;
pub mod edit;
pub mod loan_form;
pub mod loan_status;
pub mod statistics;

use chrono::{DateTime, NaiveDate, Utc};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

pub use banner::{Banner, BannerKind, BannerSlot};
pub use edit::{AlunoField, EditSession, EditSessions, EditView};
pub use loan_form::{BookOption, LoanForm, LoanFormView};
pub use loan_status::{LoanRow, LoanStatus};
pub use statistics::LoanStatistics;

/// Parse a date sent by the remote API: `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }
    value
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// `DD/MM/YYYY`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Brazilian rendering of an API date, or the raw value when it does not parse
pub fn display_date(value: &str) -> String {
    parse_api_date(value)
        .map(format_date_br)
        .unwrap_or_else(|| value.to_string())
}

/// Lowercase without diacritics, for search filters
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_date() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 10);
        assert_eq!(parse_api_date("2023-02-10"), expected);
        assert_eq!(parse_api_date("2023-02-10T00:00:00.000Z"), expected);
        assert_eq!(parse_api_date("2023-02-10T14:30:00"), expected);
        assert_eq!(parse_api_date("ontem"), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2023-01-15"), "15/01/2023");
        assert_eq!(display_date("sem data"), "sem data");
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("João Conceição"), "joao conceicao");
        assert_eq!(fold("ÁLVARES"), "alvares");
    }
}
