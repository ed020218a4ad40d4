use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Bill amounts are displayed in euros throughout.
const DISPLAY_CURRENCY: Currency = Currency::EUR;

/// Format a bill amount with two decimal places, thousands separators, and
/// the currency symbol, ex. 1234.5 -> "1,234.50 €".
///
/// Uses the en locale ('.' as decimal mark, ',' as thousands separator)
/// regardless of the user's locale, for consistency with the rest of the
/// rendered tables.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let amount = amount.abs();
    let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::en);
    let fractional_part = format!("{:.2}", amount.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!(
        "{}{}.{} {}",
        sign,
        integer_part,
        fractional_part,
        DISPLAY_CURRENCY.symbol(),
    )
}
