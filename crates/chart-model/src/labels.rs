//! Label formatting helpers for render collaborators.
//!
//! Month abbreviations and currency formatting match the reference
//! revenue chart: Brazilian Portuguese month names and `R$` values with
//! a comma decimal separator.

/// Abbreviated month name for a 0-based month index.
///
/// Returns `None` for indices outside 0..=11.
pub fn month_label(month: u32) -> Option<&'static str> {
    match month {
        0 => Some("Jan"),
        1 => Some("Fev"),
        2 => Some("Mar"),
        3 => Some("Abr"),
        4 => Some("Mai"),
        5 => Some("Jun"),
        6 => Some("Jul"),
        7 => Some("Ago"),
        8 => Some("Set"),
        9 => Some("Out"),
        10 => Some("Nov"),
        11 => Some("Dez"),
        _ => None,
    }
}

/// Format a value as local currency: two decimals, comma separator.
pub fn format_currency(value: f64) -> String {
    format!("R${:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(0), Some("Jan"));
        assert_eq!(month_label(1), Some("Fev"));
        assert_eq!(month_label(11), Some("Dez"));
        assert_eq!(month_label(12), None);
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_currency(1234.5), "R$1234,50");
        assert_eq!(format_currency(0.0), "R$0,00");
        assert_eq!(format_currency(99.999), "R$100,00");
    }
}
