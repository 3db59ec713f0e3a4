//! Rendering BS dates as text.

use crate::consts::{DAY_TOKEN, MONTH_TOKEN, YEAR_TOKEN};
use crate::locale::{Locale, month_names};
use crate::BsDate;

/// Devanagari digits, ० first
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Renders `date` through `format`, replacing `YYYY` with the year and `MM`
/// and `DD` with the zero-padded month and day. Other text is copied as is.
///
/// ```
/// use bikram_sambat::{BsDate, DEFAULT_FORMAT, format_bs_date};
///
/// let date = BsDate { year: 2080, month: 9, day: 5 };
/// assert_eq!(format_bs_date(&date, DEFAULT_FORMAT), "2080-09-05");
/// assert_eq!(format_bs_date(&date, "DD/MM/YYYY"), "05/09/2080");
/// ```
pub fn format_bs_date(date: &BsDate, format: &str) -> String {
    format
        .replace(YEAR_TOKEN, &date.year.to_string())
        .replace(MONTH_TOKEN, &format!("{:02}", date.month))
        .replace(DAY_TOKEN, &format!("{:02}", date.day))
}

/// Renders `date` as `<day> <month name> <year>`, e.g. `28 Poush 2081`.
///
/// A hand-built date with a month outside `1..=12` renders its month number
/// in place of the name.
pub fn format_bs_date_with_month(date: &BsDate, locale: Locale) -> String {
    let name = usize::from(date.month)
        .checked_sub(1)
        .and_then(|index| month_names(locale).get(index).copied());
    match name {
        Some(name) => format!("{} {} {}", date.day, name, date.year),
        None => format!("{} {} {}", date.day, date.month, date.year),
    }
}

/// Maps ASCII digits to the script of `locale`. Identity for English.
///
/// ```
/// use bikram_sambat::{Locale, localize_digits};
///
/// assert_eq!(localize_digits("2081-09-28", Locale::Ne), "२०८१-०९-२८");
/// assert_eq!(localize_digits("2081-09-28", Locale::En), "2081-09-28");
/// ```
pub fn localize_digits(s: &str, locale: Locale) -> String {
    match locale {
        Locale::En => s.to_owned(),
        Locale::Ne => s
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map_or(c, |digit| DEVANAGARI_DIGITS[digit as usize])
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_FORMAT;
    use crate::test_utils::bs;

    #[test]
    fn test_format_default() {
        assert_eq!(format_bs_date(&bs(2080, 1, 1), DEFAULT_FORMAT), "2080-01-01");
        assert_eq!(format_bs_date(&bs(2081, 9, 28), DEFAULT_FORMAT), "2081-09-28");
        assert_eq!(
            format_bs_date(&bs(2081, 9, 28), DEFAULT_FORMAT),
            bs(2081, 9, 28).to_string()
        );
    }

    #[test]
    fn test_format_templates() {
        struct TestCase {
            format:   &'static str,
            expected: &'static str,
        }

        let date = bs(2080, 3, 7);
        let cases = [
            TestCase { format: "DD/MM/YYYY", expected: "07/03/2080" },
            TestCase { format: "YYYY.MM", expected: "2080.03" },
            TestCase { format: "MM", expected: "03" },
            TestCase { format: "BS YYYY", expected: "BS 2080" },
            TestCase { format: "no tokens", expected: "no tokens" },
            TestCase { format: "", expected: "" },
            TestCase { format: "YYYY YYYY", expected: "2080 2080" },
        ];

        for case in &cases {
            assert_eq!(format_bs_date(&date, case.format), case.expected, "format {:?}", case.format);
        }
    }

    #[test]
    fn test_format_with_month() {
        assert_eq!(format_bs_date_with_month(&bs(2081, 9, 28), Locale::En), "28 Poush 2081");
        assert_eq!(format_bs_date_with_month(&bs(2080, 1, 1), Locale::En), "1 Baisakh 2080");
        assert_eq!(format_bs_date_with_month(&bs(2080, 12, 30), Locale::Ne), "30 चैत 2080");
    }

    #[test]
    fn test_format_with_month_out_of_range_month() {
        let date = BsDate { year: 2080, month: 13, day: 1 };
        assert_eq!(format_bs_date_with_month(&date, Locale::En), "1 13 2080");
        let date = BsDate { year: 2080, month: 0, day: 1 };
        assert_eq!(format_bs_date_with_month(&date, Locale::En), "1 0 2080");
    }

    #[test]
    fn test_localize_digits() {
        assert_eq!(localize_digits("0123456789", Locale::Ne), "०१२३४५६७८९");
        assert_eq!(
            localize_digits(&format_bs_date_with_month(&bs(2081, 9, 28), Locale::Ne), Locale::Ne),
            "२८ पुष २०८१"
        );
        assert_eq!(localize_digits("abc", Locale::Ne), "abc");
    }
}
