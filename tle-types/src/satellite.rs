use crate::time::{iso8601, UtcTimestamp};
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub type CatalogNumber = u32;

/// Orbital elements decoded from one name line + two element lines
///
/// Field order matches the serialized (JSON) layout.
#[derive(Clone, PartialEq, PartialOrd, Debug, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[display(
    fmt = "{{name: {}, catalog_number: {}, epoch: {}, ...}}",
    "object_name",
    "satellite_catalog_number",
    "epoch"
)]
pub struct SatelliteRecord {
    /// Satellite name
    pub object_name: String,

    /// NORAD catalog number
    pub satellite_catalog_number: CatalogNumber,

    /// Reference time of the elements
    #[serde(with = "iso8601")]
    pub epoch: UtcTimestamp,

    /// Last two digits of the launch year
    pub international_designator_year: String,
    /// Launch number of the year
    pub international_designator_launch_number: String,
    /// Piece of the launch
    pub international_designator_piece: String,

    /// [rev/day]
    pub mean_motion: f64,
    pub eccentricity: f64,
    /// [deg]
    pub inclination: f64,
    /// Right ascension of the ascending node [deg]
    pub ra_of_asc_node: f64,
    /// Argument of perigee [deg]
    pub arg_of_pericenter: f64,
    /// [deg]
    pub mean_anomaly: f64,

    /// U for unclassified, C for classified
    pub classification_type: String,

    /// Same value as `satellite_catalog_number`
    pub norad_cat_id: CatalogNumber,
    pub element_set_no: u32,
    /// Revolution number at epoch
    pub rev_at_epoch: u32,

    /// Drag term
    pub bstar: f64,
    /// First time derivative of the mean motion
    pub mean_motion_dot: f64,
    /// Second time derivative of the mean motion
    pub mean_motion_ddot: f64,

    /// Modulo 10 checksum of line 1, not verified
    pub checksum: u8,
}

impl SatelliteRecord {
    /// International designator as usually written, e.g. `98067A`
    pub fn international_designator(&self) -> String {
        format!(
            "{}{}{}",
            self.international_designator_year,
            self.international_designator_launch_number,
            self.international_designator_piece.trim_end()
        )
    }

    pub fn is_classified(&self) -> bool {
        self.classification_type == "C"
    }
}
