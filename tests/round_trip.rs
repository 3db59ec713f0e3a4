use bikram_sambat::{
    ANCHOR_AD, BsDate, CalendarError, DEFAULT_FORMAT, MAX_YEAR, MIN_YEAR, ad_to_bs, bs_to_ad,
    days_in_bs_month, format_bs_date, is_bs_date_valid, parse_bs_date, total_days_in_bs_year,
};
use chrono::{Days, NaiveDate};

fn ad(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture AD date must be valid")
}

/// Every valid BS date in the table, in order.
fn all_bs_dates() -> impl Iterator<Item = BsDate> {
    (MIN_YEAR..=MAX_YEAR).flat_map(|year| {
        (1..=12u8).flat_map(move |month| {
            let days = days_in_bs_month(year, month).expect("table covers the supported range");
            (1..=days).map(move |day| BsDate { year, month, day })
        })
    })
}

#[test]
fn bs_to_ad_to_bs_round_trips() {
    let mut expected_ad = ANCHOR_AD;
    for bs in all_bs_dates() {
        let converted = bs_to_ad(bs).unwrap();
        assert_eq!(converted, expected_ad, "BS {bs}");
        assert_eq!(ad_to_bs(converted), Ok(bs), "AD {converted}");
        expected_ad = expected_ad + Days::new(1);
    }
    // expected_ad is now one past the last supported day
    assert_eq!(expected_ad, ad(2044, 4, 14));
    assert!(matches!(
        ad_to_bs(expected_ad),
        Err(CalendarError::ExceedsSupportedRange(_))
    ));
}

#[test]
fn ad_to_bs_to_ad_round_trips() {
    let last = ad(2044, 4, 13);
    let mut day = ANCHOR_AD;
    let mut previous: Option<BsDate> = None;
    while day <= last {
        let bs = ad_to_bs(day).unwrap();
        assert!(bs.is_valid(), "{bs} from {day}");
        assert_eq!(bs_to_ad(bs), Ok(day));
        if let Some(previous) = previous {
            assert!(previous < bs, "{previous} then {bs}");
        }
        previous = Some(bs);
        day = day + Days::new(1);
    }
}

#[test]
fn days_counted_match_table() {
    let total: u64 = (MIN_YEAR..=MAX_YEAR)
        .map(|year| u64::from(total_days_in_bs_year(year).unwrap()))
        .sum();
    assert_eq!(all_bs_dates().count() as u64, total);
    assert_eq!(ANCHOR_AD + Days::new(total), ad(2044, 4, 14));
}

#[test]
fn format_parse_inverse() {
    for bs in all_bs_dates() {
        let text = format_bs_date(&bs, DEFAULT_FORMAT);
        assert_eq!(parse_bs_date(&text), Some(bs), "{text}");
    }
}

#[test]
fn validator_consistency() {
    for year in (MIN_YEAR - 2)..=(MAX_YEAR + 2) {
        for month in 0..=14u8 {
            for day in 0..=34u8 {
                let in_table = (1..=12).contains(&month)
                    && (MIN_YEAR..=MAX_YEAR).contains(&year)
                    && days_in_bs_month(year, month).is_ok_and(|max| (1..=max).contains(&day));
                assert_eq!(is_bs_date_valid(year, month, day), in_table, "{year}-{month}-{day}");
            }
        }
    }
}

#[test]
fn published_fixtures() {
    assert_eq!(ad_to_bs(ad(1943, 4, 14)), Ok(BsDate { year: 2000, month: 1, day: 1 }));
    assert_eq!(bs_to_ad(BsDate { year: 2000, month: 1, day: 1 }), Ok(ad(1943, 4, 14)));
    assert_eq!(ad_to_bs(ad(2025, 1, 13)), Ok(BsDate { year: 2081, month: 9, day: 28 }));
    assert_eq!(ad_to_bs(ad(2023, 4, 14)), Ok(BsDate { year: 2080, month: 1, day: 1 }));
    assert!(ad_to_bs(ad(1943, 4, 13)).is_err());
    assert!(bs_to_ad(BsDate { year: 2080, month: 1, day: 32 }).is_err());
    assert_eq!(days_in_bs_month(2080, 1), Ok(31));
    assert_eq!(days_in_bs_month(2080, 12), Ok(30));
    assert_eq!(parse_bs_date("2080/09/15"), None);
    assert_eq!(parse_bs_date("2080-13-01"), None);
}
