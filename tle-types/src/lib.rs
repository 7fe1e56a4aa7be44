pub mod prelude;
pub mod satellite;
pub mod time;
pub mod tle;
