use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::InvalidIsoDate;

/// Capitalized French month abbreviations, dot included. "juin" and
/// "juil." share the same three-letter abbreviation, as in the historical
/// formatter.
const MONTHS_FR_ABBR: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai.", "Jui.", "Jui.", "Aoû.", "Sep.", "Oct.", "Nov.",
    "Déc.",
];

/// Display form of a raw `YYYY-MM-DD` date, ex. "2004-04-04" -> "4 Avr. 04"
/// (day without leading zero, abbreviated month, two-digit year).
///
/// Pure function of its input; callers keep the raw date when this fails.
pub fn format_date(raw: &str) -> Result<String, ServerError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| InvalidIsoDate::with_debug(raw, &e))?;
    Ok(format!(
        "{} {} {:02}",
        date.day(),
        MONTHS_FR_ABBR[date.month0() as usize],
        date.year() % 100,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2021-11-22").unwrap(), "22 Nov. 21");
        assert_eq!(format_date("2021-12-31").unwrap(), "31 Déc. 21");
    }

    #[test]
    fn is_idempotent_across_calls() {
        let first = format_date("2002-02-02").unwrap();
        let second = format_date("2002-02-02").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_iso_input() {
        assert!(format_date("04/04/2004").is_err());
        assert!(format_date("2004-13-01").is_err());
        assert!(format_date("not a date").is_err());
        assert!(format_date("").is_err());
    }
}
