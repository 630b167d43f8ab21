//! W3C datetime parsing for sitemap `<lastmod>` values.
//!
//! Accepts the subset of ISO 8601 that sitemaps allow:
//!
//! - `YYYY-MM-DD`
//! - `YYYY-MM-DDTHH:MM:SS` with optional `.fraction`
//! - any of the above datetimes followed by `Z` or `±HH:MM`

use anyhow::{Result, bail};

/// Datetime as written in a sitemap, offset kept but not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct W3cDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Offset from UTC in minutes, `None` for a bare date or local time
    pub offset: Option<i16>,
}

impl W3cDateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset: None,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a W3C datetime, returning `None` for anything malformed or out of range.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        let mut dt = Self::from_ymd(year, month, day);

        if bytes.len() > 10 {
            // "THH:MM:SS" (9 chars)
            if bytes.len() < 19 || !matches!(bytes[10], b'T' | b't' | b' ') {
                return None;
            }
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            dt.hour = parse_u8(&bytes[11..13])?;
            dt.minute = parse_u8(&bytes[14..16])?;
            dt.second = parse_u8(&bytes[17..19])?;

            let mut rest = &bytes[19..];
            if let Some(fraction) = rest.strip_prefix(b".") {
                let digits = fraction.iter().take_while(|b| b.is_ascii_digit()).count();
                if digits == 0 {
                    return None;
                }
                rest = &fraction[digits..];
            }
            dt.offset = parse_offset(rest)?;
        }

        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset,
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
        if let Some(offset) = offset
            && offset.abs() >= 24 * 60
        {
            bail!("offset is invalid: {offset}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as `YYYY-MM-DD`, the precision sitemaps are emitted with.
    pub fn to_ymd(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a trailing `Z` / `±HH:MM` offset. Empty input means no offset.
fn parse_offset(bytes: &[u8]) -> Option<Option<i16>> {
    match bytes {
        [] => Some(None),
        [b'Z' | b'z'] => Some(Some(0)),
        [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
            let hours = parse_u8(&[*h1, *h2])? as i16;
            let minutes = parse_u8(&[*m1, *m2])? as i16;
            if minutes > 59 {
                return None;
            }
            let total = hours * 60 + minutes;
            Some(Some(if *sign == b'-' { -total } else { total }))
        }
        _ => None,
    }
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
        result = result * 10 + d as u16;
    }
    Some(result)
}
