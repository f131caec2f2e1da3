#[cfg(test)]
mod tests {
    use crate::time::parse_datetime;
    use chrono::NaiveDate;
    use chrono_tz::Tz;
    use proptest::prelude::*;

    proptest! {
        // Different spellings of the same wall-clock time must normalize to
        // the same transmitted instant.
        #[test]
        fn iso_and_verbose_spellings_normalize_identically(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let naive = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap();

            let iso = naive.format("%Y-%m-%d %H:%M:%S").to_string();
            let verbose = naive.format("%b %d %Y %I:%M%p").to_string();

            let from_iso = parse_datetime(&iso, Tz::UTC).unwrap();
            let from_verbose = parse_datetime(&verbose, Tz::UTC).unwrap();

            prop_assert_eq!(from_iso, from_verbose);
            prop_assert_eq!(from_iso.to_rfc3339(), from_verbose.to_rfc3339());
        }

        #[test]
        fn unstructured_text_is_rejected(input in "[a-z ]{1,12}") {
            prop_assert!(parse_datetime(&input, Tz::UTC).is_err());
        }
    }
}
