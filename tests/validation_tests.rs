use chrono::NaiveDate;
use festival_bot::utils::datetime::{format_day_month, parse_day_month};
use festival_bot::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // Festival name validation tests
    #[test]
    fn test_valid_festival_names() {
        let valid_names = vec![
            "Wacken".to_string(),
            "Rock am Ring".to_string(),
            "100% Metal".to_string(),
            "W".to_string(),
            "A".repeat(MAX_FESTIVAL_NAME_LENGTH),
            "🎸 Summer Breeze".to_string(),
            "Party.San [Open Air]".to_string(),
        ];

        for name in valid_names {
            assert!(validate_festival_name(&name).is_ok(), "Should accept name: {}", name);
        }
    }

    #[test]
    fn test_invalid_festival_names() {
        let invalid_names = vec![
            "".to_string(),
            "   ".to_string(),
            "A".repeat(MAX_FESTIVAL_NAME_LENGTH + 1),
            "Wacken\nOpen Air".to_string(),
        ];

        for name in invalid_names {
            assert!(validate_festival_name(&name).is_err(), "Should reject name: {:?}", name);
        }
    }

    // Link validation tests
    #[test]
    fn test_links() {
        assert!(validate_link("https://www.wacken.com").is_ok());
        assert!(validate_link("http://example.org/festival?year=2023").is_ok());

        assert!(validate_link("").is_err());
        assert!(validate_link("www.wacken.com").is_err());
        assert!(validate_link("ftp://example.org").is_err());
        assert!(validate_link("https://example.org/a b").is_err());
        assert!(validate_link(&format!("https://{}", "a".repeat(MAX_LINK_LENGTH))).is_err());
    }

    // Date parsing and range tests
    #[test]
    fn test_day_month_dates() {
        assert_eq!(parse_day_month("2.8", 2023).unwrap(), date(2023, 8, 2));
        assert_eq!(parse_day_month("02.08.", 2023).unwrap(), date(2023, 8, 2));
        assert_eq!(parse_day_month(" 2.8.2024 ", 2023).unwrap(), date(2024, 8, 2));
        assert_eq!(parse_day_month("29.2", 2024).unwrap(), date(2024, 2, 29));

        for input in ["", "2", "2/8", "32.8", "29.2.2023", "a.b", "1.2.3.4"] {
            assert!(parse_day_month(input, 2023).is_err(), "Should reject date: {:?}", input);
        }
    }

    #[test]
    fn test_date_display_round_trips_through_parser() {
        let festival_start = date(2023, 8, 2);
        let shown = format_day_month(&festival_start);
        assert_eq!(shown, "02.08");
        assert_eq!(parse_day_month(&shown, 2023).unwrap(), festival_start);
    }

    #[test]
    fn test_date_ranges() {
        assert!(validate_date_range(date(2023, 8, 2), date(2023, 8, 5)).is_ok());
        assert!(validate_date_range(date(2023, 8, 2), date(2023, 8, 2)).is_ok());
        assert!(validate_date_range(date(2023, 8, 5), date(2023, 8, 2)).is_err());
    }

    // Query validation tests
    #[test]
    fn test_festival_queries() {
        assert!(validate_festival_query("wack").is_ok());
        assert!(validate_festival_query("  rock  ").is_ok());
        assert!(validate_festival_query("").is_err());
        assert!(validate_festival_query(" \t ").is_err());
        assert!(validate_festival_query(&"x".repeat(MAX_FESTIVAL_NAME_LENGTH + 1)).is_err());
    }
}
