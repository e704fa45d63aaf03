//! Export naming for downloaded cards.

use chrono::{Datelike, NaiveDate};

/// Download filename for an exported card, stamped with the export date
/// (not the card's own date field).
pub fn export_filename(date: NaiveDate) -> String {
    format!(
        "message-card_{:04}-{:02}-{:02}.png",
        date.year(),
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(export_filename(date), "message-card_2024-01-05.png");
    }

    #[test]
    fn test_export_filename_pads_components() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(export_filename(date), "message-card_2026-12-31.png");
    }
}
