pub use crate::satellite::SatelliteRecord;
pub use crate::time::UtcTimestamp;
pub use crate::tle::UnstructuredTle;
