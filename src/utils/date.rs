//! UTC datetime utilities without timezone dependencies.
//!
//! Post dates arrive either as ISO strings from the CMS (`2025-03-15`,
//! `2025-03-15T08:00:00Z`) or in the long display form the mock catalog
//! uses (`March 15, 2025`). Everything is normalized to RFC 3339 before it
//! reaches metadata or structured data.
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("March 15, 2025").unwrap();
//! assert_eq!(dt.to_rfc3339(), "2025-03-15T00:00:00Z");
//! assert_eq!(dt.to_display(), "March 15, 2025");
//! ```

use anyhow::{Result, bail};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse any accepted post date format.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::parse_iso(s).or_else(|| Self::parse_long(s))
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    ///
    /// Fractional seconds (`.000Z`) are accepted and dropped.
    fn parse_iso(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        let (hour, minute, second) = if bytes.len() == 10 {
            (0, 0, 0)
        } else if bytes.len() >= 20 && bytes[10] == b'T' && bytes[bytes.len() - 1] == b'Z' {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            let fraction = &bytes[19..bytes.len() - 1];
            if !fraction.is_empty()
                && (fraction[0] != b'.' || !fraction[1..].iter().all(u8::is_ascii_digit))
            {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    /// Parse "Month D, YYYY" (full English month name, case-insensitive).
    fn parse_long(s: &str) -> Option<Self> {
        let (month_part, rest) = s.split_once(' ')?;
        let (day_part, year_part) = rest.split_once(',')?;

        let month = MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(month_part))?;
        let day: u8 = day_part.trim().parse().ok()?;
        let year: u16 = year_part.trim().parse().ok()?;

        #[allow(clippy::cast_possible_truncation)] // position < 12
        let dt = Self::from_ymd(year, month as u8 + 1, day);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339 (ISO 8601): `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }

    /// Format for article bylines: `March 15, 2025`
    pub fn to_display(self) -> String {
        format!(
            "{} {}, {:04}",
            MONTH_NAMES[(self.month - 1) as usize],
            self.day,
            self.year
        )
    }
}

/// Normalize a post date to RFC 3339, or `None` when it can't be parsed.
pub fn normalize(s: &str) -> Option<String> {
    DateTimeUtc::parse(s).map(DateTimeUtc::to_rfc3339)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn date_only() {
            assert_eq!(
                DateTimeUtc::parse("2025-03-15"),
                Some(DateTimeUtc::from_ymd(2025, 3, 15))
            );
        }

        #[test]
        fn with_time() {
            assert_eq!(
                DateTimeUtc::parse("2025-03-15T14:30:45Z"),
                Some(DateTimeUtc::new(2025, 3, 15, 14, 30, 45))
            );
        }

        #[test]
        fn with_fraction() {
            assert_eq!(
                DateTimeUtc::parse("2025-03-15T14:30:45.000Z"),
                Some(DateTimeUtc::new(2025, 3, 15, 14, 30, 45))
            );
        }

        #[test]
        fn long_form() {
            assert_eq!(
                DateTimeUtc::parse("March 15, 2025"),
                Some(DateTimeUtc::from_ymd(2025, 3, 15))
            );
            assert_eq!(
                DateTimeUtc::parse("february 1, 2024"),
                Some(DateTimeUtc::from_ymd(2024, 2, 1))
            );
        }

        #[test]
        fn rejects_garbage() {
            assert_eq!(DateTimeUtc::parse(""), None);
            assert_eq!(DateTimeUtc::parse("yesterday"), None);
            assert_eq!(DateTimeUtc::parse("Smarch 15, 2025"), None);
            assert_eq!(DateTimeUtc::parse("2025-03-15T14:30"), None);
            assert_eq!(DateTimeUtc::parse("2025-03-15T14:30:45.xZ"), None);
        }

        #[test]
        fn rejects_invalid_calendar_dates() {
            assert_eq!(DateTimeUtc::parse("2023-02-29"), None);
            assert_eq!(DateTimeUtc::parse("April 31, 2025"), None);
            assert!(DateTimeUtc::parse("2024-02-29").is_some());
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn bounds() {
            assert!(DateTimeUtc::new(2024, 12, 31, 23, 59, 59).validate().is_ok());
            assert!(DateTimeUtc::new(2024, 13, 1, 0, 0, 0).validate().is_err());
            assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
            assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
            assert!(DateTimeUtc::new(2024, 6, 15, 12, 0, 60).validate().is_err());
        }

        #[test]
        fn leap_years() {
            assert!(DateTimeUtc::from_ymd(2000, 2, 29).validate().is_ok());
            assert!(DateTimeUtc::from_ymd(1900, 2, 29).validate().is_err());
        }
    }

    mod format {
        use super::*;

        #[test]
        fn rfc3339() {
            assert_eq!(
                DateTimeUtc::from_ymd(2025, 3, 5).to_rfc3339(),
                "2025-03-05T00:00:00Z"
            );
        }

        #[test]
        fn display() {
            assert_eq!(DateTimeUtc::from_ymd(2025, 3, 5).to_display(), "March 5, 2025");
        }

        #[test]
        fn normalize_long_form() {
            assert_eq!(
                normalize("February 15, 2025").as_deref(),
                Some("2025-02-15T00:00:00Z")
            );
            assert_eq!(normalize("soon"), None);
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let a = DateTimeUtc::parse("March 10, 2025").unwrap();
        let b = DateTimeUtc::parse("2025-03-15").unwrap();
        assert!(a < b);
    }
}
