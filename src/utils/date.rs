use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current wall-clock instant, truncated to second precision (the precision
/// of the stored timestamp column).
pub fn now() -> NaiveDateTime {
    use chrono::Timelike;
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

pub fn parse_date(d: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()
}

/// Resolve a `--period` filter into an inclusive date range.
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `<from>:<to>` of those.
pub fn period_range(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = p.split_once(':') {
        let (from, _) = period_range(a)?;
        let (_, to) = period_range(b)?;
        if to < from {
            return Err(format!("Invalid period: {}", p));
        }
        return Ok((from, to));
    }

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_next
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_period() {
        let (from, to) = period_range("2025-06-01").unwrap();
        assert_eq!(from, to);
        assert_eq!(from.to_string(), "2025-06-01");
    }

    #[test]
    fn month_period_covers_whole_month() {
        let (from, to) = period_range("2024-02").unwrap();
        assert_eq!(from.to_string(), "2024-02-01");
        assert_eq!(to.to_string(), "2024-02-29"); // leap year
    }

    #[test]
    fn year_period() {
        let (from, to) = period_range("2025").unwrap();
        assert_eq!(from.to_string(), "2025-01-01");
        assert_eq!(to.to_string(), "2025-12-31");
    }

    #[test]
    fn colon_range() {
        let (from, to) = period_range("2025-01:2025-03").unwrap();
        assert_eq!(from.to_string(), "2025-01-01");
        assert_eq!(to.to_string(), "2025-03-31");
    }

    #[test]
    fn reversed_range_is_invalid() {
        assert!(period_range("2025-03:2025-01").is_err());
        assert!(period_range("soon").is_err());
    }
}
