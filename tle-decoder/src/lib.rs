pub use crate::decoder::{decode_tle, decode_tle_set, DecodeError, TleDecoder};
pub use crate::epoch::{parse_epoch, resolve_century, EpochError};
pub use crate::field::{Column, ElementLine, Field};
pub use tle_types::prelude::*;

pub mod decoder;
pub mod epoch;
pub mod field;
mod number;

/// Width of each element line, in characters
pub const LINE_WIDTH: usize = 69;
/// Name line + two element lines
pub const LINES_PER_TLE: usize = 3;
/// Two digit epoch years at or above this are in the 1900s
pub const CENTURY_PIVOT: u32 = 57;
