//! Lenient numeric column parsers.
//!
//! Leading blanks are skipped and the longest leading number is taken, the
//! rest of the column is left unconsumed (`" 00000+0"` is `0.0`).

use nom::{
    character::complete::{space0, u32, u8},
    number::complete::double,
    sequence::preceded,
    IResult,
};

pub(crate) fn leading_u8(s: &str) -> IResult<&str, u8> {
    preceded(space0, u8)(s)
}

pub(crate) fn leading_u32(s: &str) -> IResult<&str, u32> {
    preceded(space0, u32)(s)
}

pub(crate) fn leading_f64(s: &str) -> IResult<&str, f64> {
    preceded(space0, double)(s)
}
