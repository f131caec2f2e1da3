#[cfg(test)]
mod tests {
    use crate::time::{day_bounds, parse_datetime, resolve_timezone};
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;

    #[test]
    fn equivalent_spellings_denote_the_same_instant() {
        let spellings = [
            "2024-01-01 10:00:00",
            "2024-01-01T10:00:00",
            "2024-01-01 10:00",
            "Jan 1 2024 10:00am",
            "Jan 01 2024 10:00AM",
            "January 1, 2024 10:00am",
            "01/01/2024 10:00am",
            "01/01/2024 10:00",
        ];

        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        for input in spellings {
            let parsed = parse_datetime(input, Tz::UTC)
                .unwrap_or_else(|e| panic!("should parse {input:?}: {e}"));
            assert_eq!(parsed.with_timezone(&Utc), expected, "input: {input:?}");
            assert_eq!(
                parsed.to_rfc3339(),
                "2024-01-01T10:00:00+00:00",
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn offset_bearing_input_keeps_its_offset() {
        let parsed = parse_datetime("2024-01-01T10:00:00+05:00", Tz::UTC).unwrap();

        assert_eq!(parsed.to_rfc3339(), "2024-01-01T10:00:00+05:00");
        assert_eq!(
            parsed.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn naive_input_is_anchored_in_the_given_timezone() {
        // Zurich is UTC+1 in January
        let parsed = parse_datetime("2024-01-15 10:00:00", Tz::Europe__Zurich).unwrap();

        assert_eq!(parsed.to_rfc3339(), "2024-01-15T10:00:00+01:00");
        assert_eq!(
            parsed.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn bare_dates_resolve_to_midnight() {
        let parsed = parse_datetime("2024-06-01", Tz::UTC).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T00:00:00+00:00");

        let parsed = parse_datetime("Jun 1 2024", Tz::UTC).unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-06-01T00:00:00+00:00");
    }

    #[test]
    fn unparseable_input_is_rejected() {
        assert!(parse_datetime("not-a-date", Tz::UTC).is_err());
        assert!(parse_datetime("", Tz::UTC).is_err());

        let err = parse_datetime("definitely not a date", Tz::UTC).unwrap_err();
        assert!(err.to_string().contains("definitely not a date"));
    }

    #[test]
    fn day_bounds_cover_the_whole_day() {
        let (start, end) = day_bounds("2024-06-01", Tz::UTC).unwrap();

        assert_eq!(start.to_rfc3339(), "2024-06-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-06-01T23:59:59+00:00");
    }

    #[test]
    fn day_bounds_respect_the_timezone() {
        // Zurich is UTC+2 in June
        let (start, end) = day_bounds("2024-06-01", Tz::Europe__Zurich).unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 31, 22, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 6, 1, 21, 59, 59).unwrap());
    }

    #[test]
    fn day_bounds_reject_unparseable_dates() {
        assert!(day_bounds("someday", Tz::UTC).is_err());
    }

    #[test]
    fn unknown_timezones_fall_back_to_utc() {
        assert_eq!(resolve_timezone("Europe/Zurich"), Tz::Europe__Zurich);
        assert_eq!(resolve_timezone("Not/AZone"), Tz::UTC);
        assert_eq!(resolve_timezone(""), Tz::UTC);
    }
}
