use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Parses a festival date written as `day.month` or `day.month.year`.
///
/// Dates without a year are placed in `default_year`. A trailing dot (`2.8.`) is accepted.
pub fn parse_day_month(input: &str, default_year: i32) -> Result<NaiveDate> {
    let input = input.trim();
    let trimmed = input.strip_suffix('.').unwrap_or(input);

    if trimmed.is_empty() {
        return Err(anyhow!("Date cannot be empty"));
    }

    let parts: Vec<&str> = trimmed.split('.').map(str::trim).collect();
    let (day, month, year) = match parts.as_slice() {
        [day, month] => (*day, *month, None),
        [day, month, year] => (*day, *month, Some(*year)),
        _ => return Err(anyhow!("'{}' is not a date (expected day.month)", input)),
    };

    let day: u32 = parse_number(day, "day", input)?;
    let month: u32 = parse_number(month, "month", input)?;
    let year: i32 = match year {
        Some(year) => parse_number(year, "year", input)?,
        None => default_year,
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("'{}' is not a valid calendar date", input))
}

fn parse_number<T: std::str::FromStr>(part: &str, what: &str, input: &str) -> Result<T> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("'{}' has an invalid {}", input, what));
    }
    part.parse()
        .map_err(|_| anyhow!("'{}' has an invalid {}", input, what))
}

/// Short `DD.MM` form used in festival listings
pub fn format_day_month(date: &NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_month_uses_default_year() {
        assert_eq!(parse_day_month("2.8", 2023).unwrap(), date(2023, 8, 2));
        assert_eq!(parse_day_month("02.08", 2024).unwrap(), date(2024, 8, 2));
        assert_eq!(parse_day_month(" 31.12 ", 2023).unwrap(), date(2023, 12, 31));
        assert_eq!(parse_day_month("2.8.", 2023).unwrap(), date(2023, 8, 2));
    }

    #[test]
    fn test_explicit_year_wins() {
        assert_eq!(parse_day_month("2.8.2025", 2023).unwrap(), date(2025, 8, 2));
    }

    #[test]
    fn test_leap_day_depends_on_year() {
        assert!(parse_day_month("29.2", 2024).is_ok());
        assert!(parse_day_month("29.2", 2023).is_err());
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_day_month("", 2023).is_err());
        assert!(parse_day_month("31.2", 2023).is_err());
        assert!(parse_day_month("13.13", 2023).is_err());
        assert!(parse_day_month("2023-08-02", 2023).is_err());
        assert!(parse_day_month("first of may", 2023).is_err());
        assert!(parse_day_month("1.2.3.4", 2023).is_err());
        assert!(parse_day_month("-1.5", 2023).is_err());
        assert!(parse_day_month(".5", 2023).is_err());
    }

    #[test]
    fn test_format_day_month() {
        assert_eq!(format_day_month(&date(2023, 8, 2)), "02.08");
    }
}
