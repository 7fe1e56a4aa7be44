//! Fixed column layout of the two TLE element lines

use std::fmt;

/// Which of the two element lines a column lives on
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ElementLine {
    One,
    Two,
}

impl fmt::Display for ElementLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementLine::One => f.write_str("1"),
            ElementLine::Two => f.write_str("2"),
        }
    }
}

/// A column range, 0-indexed start and length in characters
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Column {
    pub line: ElementLine,
    pub start: usize,
    pub len: usize,
}

impl Column {
    const fn new(line: ElementLine, start: usize, len: usize) -> Self {
        Self { line, start, len }
    }

    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The column text of `line`, clamped to the line's length
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let byte_offset = |n: usize| {
            line.char_indices()
                .nth(n)
                .map(|(idx, _)| idx)
                .unwrap_or(line.len())
        };
        &line[byte_offset(self.start)..byte_offset(self.end())]
    }
}

/// Every column-sourced field of a TLE.
///
/// The satellite name comes from its own line and is not part of this table.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Field {
    SatelliteCatalogNumber,
    ClassificationType,
    InternationalDesignatorYear,
    InternationalDesignatorLaunchNumber,
    InternationalDesignatorPiece,
    Epoch,
    MeanMotionDot,
    MeanMotionDdot,
    /// Mantissa part of the drag term
    Bstar,
    /// Exponent digit of the drag term
    BstarExponent,
    ElementSetNo,
    Checksum,
    NoradCatId,

    Inclination,
    RaOfAscNode,
    /// Digits after the implied leading "0."
    Eccentricity,
    ArgOfPericenter,
    MeanAnomaly,
    MeanMotion,
    RevAtEpoch,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::SatelliteCatalogNumber,
        Field::ClassificationType,
        Field::InternationalDesignatorYear,
        Field::InternationalDesignatorLaunchNumber,
        Field::InternationalDesignatorPiece,
        Field::Epoch,
        Field::MeanMotionDot,
        Field::MeanMotionDdot,
        Field::Bstar,
        Field::BstarExponent,
        Field::ElementSetNo,
        Field::Checksum,
        Field::NoradCatId,
        Field::Inclination,
        Field::RaOfAscNode,
        Field::Eccentricity,
        Field::ArgOfPericenter,
        Field::MeanAnomaly,
        Field::MeanMotion,
        Field::RevAtEpoch,
    ];

    pub const fn column(self) -> Column {
        use ElementLine::*;
        use Field::*;
        match self {
            SatelliteCatalogNumber => Column::new(One, 2, 5),
            ClassificationType => Column::new(One, 7, 1),
            InternationalDesignatorYear => Column::new(One, 9, 2),
            InternationalDesignatorLaunchNumber => Column::new(One, 11, 3),
            InternationalDesignatorPiece => Column::new(One, 14, 3),
            Epoch => Column::new(One, 18, 14),
            MeanMotionDot => Column::new(One, 33, 10),
            MeanMotionDdot => Column::new(One, 44, 8),
            Bstar => Column::new(One, 54, 7),
            BstarExponent => Column::new(One, 60, 1),
            ElementSetNo => Column::new(One, 65, 3),
            Checksum => Column::new(One, 68, 1),
            NoradCatId => Column::new(One, 2, 5),

            Inclination => Column::new(Two, 8, 8),
            RaOfAscNode => Column::new(Two, 17, 8),
            Eccentricity => Column::new(Two, 26, 7),
            ArgOfPericenter => Column::new(Two, 34, 8),
            MeanAnomaly => Column::new(Two, 43, 8),
            MeanMotion => Column::new(Two, 52, 11),
            RevAtEpoch => Column::new(Two, 63, 5),
        }
    }

    /// Name of the field in serialized records
    pub const fn name(self) -> &'static str {
        use Field::*;
        match self {
            SatelliteCatalogNumber => "SATELLITE_CATALOG_NUMBER",
            ClassificationType => "CLASSIFICATION_TYPE",
            InternationalDesignatorYear => "INTERNATIONAL_DESIGNATOR_YEAR",
            InternationalDesignatorLaunchNumber => "INTERNATIONAL_DESIGNATOR_LAUNCH_NUMBER",
            InternationalDesignatorPiece => "INTERNATIONAL_DESIGNATOR_PIECE",
            Epoch => "EPOCH",
            MeanMotionDot => "MEAN_MOTION_DOT",
            MeanMotionDdot => "MEAN_MOTION_DDOT",
            Bstar => "BSTAR",
            BstarExponent => "BSTAR_EXPONENT",
            ElementSetNo => "ELEMENT_SET_NO",
            Checksum => "CHECKSUM",
            NoradCatId => "NORAD_CAT_ID",
            Inclination => "INCLINATION",
            RaOfAscNode => "RA_OF_ASC_NODE",
            Eccentricity => "ECCENTRICITY",
            ArgOfPericenter => "ARG_OF_PERICENTER",
            MeanAnomaly => "MEAN_ANOMALY",
            MeanMotion => "MEAN_MOTION",
            RevAtEpoch => "REV_AT_EPOCH",
        }
    }

    /// Raw column text of this field
    pub fn extract<'a>(self, line1: &'a str, line2: &'a str) -> &'a str {
        let column = self.column();
        match column.line {
            ElementLine::One => column.slice(line1),
            ElementLine::Two => column.slice(line2),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
