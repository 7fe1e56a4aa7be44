//! Decoder for blocks of three-line TLE entries

use crate::{
    epoch::parse_epoch,
    field::{ElementLine, Field},
    number::{leading_f64, leading_u32, leading_u8},
    LINES_PER_TLE, LINE_WIDTH,
};
use tle_types::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid TLE string. Found {0} lines, expected a multiple of 3")]
    InvalidLineCount(usize),
    #[error("Invalid TLE string. Line 1 and Line 2 must be 69 characters long, entry {group} ('{name}') line {line} is {width}")]
    InvalidLineWidth {
        group: usize,
        name: String,
        line: ElementLine,
        width: usize,
    },
    #[error("Invalid TLE string. Entry {group} field {field} is not a number: '{value}'")]
    InvalidNumber {
        group: usize,
        field: Field,
        value: String,
    },
    #[error("Failed to serialize decoded TLE entries. {0}")]
    Serialize(String),
}

impl DecodeError {
    /// True when the input doesn't have the shape of a TLE set
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidLineCount(_) | DecodeError::InvalidLineWidth { .. }
        )
    }
}

/// Borrowed line index over a block of TLE text.
///
/// Construction checks the overall shape, [`TleDecoder::decode`] does the rest.
#[derive(Clone, Debug)]
pub struct TleDecoder<'a> {
    lines: Vec<&'a str>,
}

impl<'a> TleDecoder<'a> {
    pub fn new(text: &'a str) -> Result<Self, DecodeError> {
        let lines: Vec<&str> = text.trim().lines().collect();
        if lines.len() % LINES_PER_TLE != 0 {
            debug!(lines = lines.len(), "Rejected TLE text");
            return Err(DecodeError::InvalidLineCount(lines.len()));
        }
        Ok(Self { lines })
    }

    /// Number of TLE entries
    pub fn len(&self) -> usize {
        self.lines.len() / LINES_PER_TLE
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The raw entries, in input order
    pub fn groups(&self) -> impl Iterator<Item = UnstructuredTle> + '_ {
        self.lines
            .chunks_exact(LINES_PER_TLE)
            .map(|g| UnstructuredTle::new(g[0], g[1], g[2]))
    }

    pub fn decode(&self) -> Result<Vec<SatelliteRecord>, DecodeError> {
        self.groups()
            .enumerate()
            .map(|(group, tle)| decode_tle(group, &tle))
            .collect()
    }

    /// Same as [`TleDecoder::decode`], rendered as pretty JSON
    pub fn decode_json(&self) -> Result<String, DecodeError> {
        let records = self.decode()?;
        serde_json::to_string_pretty(&records).map_err(|e| DecodeError::Serialize(e.to_string()))
    }
}

/// Decode every entry of a block of TLE text
pub fn decode_tle_set(text: &str) -> Result<Vec<SatelliteRecord>, DecodeError> {
    TleDecoder::new(text)?.decode()
}

/// Decode a single entry, `group` is its position in the input and only used for errors
pub fn decode_tle(group: usize, tle: &UnstructuredTle) -> Result<SatelliteRecord, DecodeError> {
    let name = tle.name();

    for (line, text) in [(ElementLine::One, &tle.line1), (ElementLine::Two, &tle.line2)] {
        let width = text.chars().count();
        if width != LINE_WIDTH {
            debug!(group, satellite = name, %line, width, "Rejected TLE element line");
            return Err(DecodeError::InvalidLineWidth {
                group,
                name: name.to_owned(),
                line,
                width,
            });
        }
    }

    let cols = Columns {
        group,
        line1: &tle.line1,
        line2: &tle.line2,
    };

    let record = SatelliteRecord {
        object_name: name.to_owned(),
        satellite_catalog_number: cols.u32(Field::SatelliteCatalogNumber)?,
        epoch: cols.epoch()?,
        international_designator_year: cols.string(Field::InternationalDesignatorYear),
        international_designator_launch_number: cols
            .string(Field::InternationalDesignatorLaunchNumber),
        international_designator_piece: cols.string(Field::InternationalDesignatorPiece),
        mean_motion: cols.f64(Field::MeanMotion)?,
        eccentricity: cols.eccentricity()?,
        inclination: cols.f64(Field::Inclination)?,
        ra_of_asc_node: cols.f64(Field::RaOfAscNode)?,
        arg_of_pericenter: cols.f64(Field::ArgOfPericenter)?,
        mean_anomaly: cols.f64(Field::MeanAnomaly)?,
        classification_type: cols.string(Field::ClassificationType),
        norad_cat_id: cols.u32(Field::NoradCatId)?,
        element_set_no: cols.u32(Field::ElementSetNo)?,
        rev_at_epoch: cols.u32(Field::RevAtEpoch)?,
        bstar: cols.bstar()?,
        mean_motion_dot: cols.f64(Field::MeanMotionDot)?,
        mean_motion_ddot: cols.f64(Field::MeanMotionDdot)?,
        checksum: cols.u8(Field::Checksum)?,
    };

    debug!(
        group,
        satellite = %record.object_name,
        catalog_number = record.satellite_catalog_number,
        "Decoded TLE"
    );

    Ok(record)
}

/// Column accessors over one entry's element lines
struct Columns<'a> {
    group: usize,
    line1: &'a str,
    line2: &'a str,
}

impl<'a> Columns<'a> {
    fn text(&self, field: Field) -> &'a str {
        field.extract(self.line1, self.line2)
    }

    fn string(&self, field: Field) -> String {
        self.text(field).to_owned()
    }

    fn invalid(&self, field: Field, value: &str) -> DecodeError {
        DecodeError::InvalidNumber {
            group: self.group,
            field,
            value: value.to_owned(),
        }
    }

    fn f64(&self, field: Field) -> Result<f64, DecodeError> {
        let text = self.text(field);
        leading_f64(text)
            .map(|(_, v)| v)
            .map_err(|_| self.invalid(field, text))
    }

    fn u32(&self, field: Field) -> Result<u32, DecodeError> {
        let text = self.text(field);
        leading_u32(text)
            .map(|(_, v)| v)
            .map_err(|_| self.invalid(field, text))
    }

    fn u8(&self, field: Field) -> Result<u8, DecodeError> {
        let text = self.text(field);
        leading_u8(text)
            .map(|(_, v)| v)
            .map_err(|_| self.invalid(field, text))
    }

    fn epoch(&self) -> Result<UtcTimestamp, DecodeError> {
        let text = self.text(Field::Epoch);
        parse_epoch(text).map_err(|e| {
            debug!(group = self.group, error = %e, "Rejected TLE epoch");
            self.invalid(Field::Epoch, text)
        })
    }

    /// The column holds the digits after an implied "0."
    fn eccentricity(&self) -> Result<f64, DecodeError> {
        let text = self.text(Field::Eccentricity);
        let implied = format!("0.{text}");
        leading_f64(&implied)
            .map(|(_, v)| v)
            .map_err(|_| self.invalid(Field::Eccentricity, text))
    }

    /// Mantissa columns read as a plain number, scaled by 10^(|exponent| + 5).
    /// Neither the exponent sign nor the mantissa sign column is applied.
    fn bstar(&self) -> Result<f64, DecodeError> {
        let mantissa = self.f64(Field::Bstar)?;
        let exponent = self.u32(Field::BstarExponent)?;
        Ok(mantissa / 10f64.powi(exponent as i32 + 5))
    }
}
