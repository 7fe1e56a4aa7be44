//! TLE epoch conversion, `YYDDD.DDDDDDDD` to a UTC timestamp

use crate::{
    number::{leading_f64, leading_u32},
    CENTURY_PIVOT,
};
use chrono::prelude::*;
use chrono::Duration;
use tle_types::prelude::*;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpochError {
    #[error("Invalid epoch year '{0}'")]
    Year(String),
    #[error("Invalid epoch day of year '{0}'")]
    DayOfYear(String),
    #[error("Epoch '{0}' is out of the representable range")]
    OutOfRange(String),
}

/// Two digit year to a full year, years below the pivot are in the 2000s
pub const fn resolve_century(year_of_century: u32) -> i32 {
    if year_of_century < CENTURY_PIVOT {
        2000 + year_of_century as i32
    } else {
        1900 + year_of_century as i32
    }
}

/// Day-of-year 1.0 is January 1st 00:00 UTC of the resolved year.
/// Fractional days are kept to the nearest microsecond.
pub fn parse_epoch(field: &str) -> Result<UtcTimestamp, EpochError> {
    let split = field
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(field.len());
    let (yy, ddd) = field.split_at(split);

    let (_, year_of_century) =
        leading_u32(yy).map_err(|_| EpochError::Year(yy.to_owned()))?;
    let (_, day_of_year) =
        leading_f64(ddd).map_err(|_| EpochError::DayOfYear(ddd.to_owned()))?;

    let out_of_range = || EpochError::OutOfRange(field.to_owned());

    let micros = ((day_of_year - 1.0) * MICROS_PER_DAY).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }

    let year = resolve_century(year_of_century);
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(out_of_range)?;
    let t = jan1
        .checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or_else(out_of_range)?;

    Ok(t.and_utc())
}
