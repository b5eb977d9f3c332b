use crate::angle::AngleUnit;

use std::fmt;

/**
 * A sky position read from a catalog. Angles are
 * always stored in radians.
 **/
#[derive(Clone, Debug, PartialEq)]
pub struct SkyRecord {
    pub id: String,
    pub lon: f64,
    pub lat: f64,
}

/**
 * Holds the program configuration, which
 * corresponds roughly to the CLI arguments
 **/
pub struct Config {
    pub input: String,
    pub output: String,
    // comma-separated column names of the input, in order.
    pub columns: String,
    // angle unit of the input values.
    pub unit: String,
    // output the tangent basis instead of the unit vector.
    pub basis: bool,
    // first line of each input file is a header.
    pub header: bool,
    pub file_num_cap: i32,
    pub star_num_cap: i32,
    // single position, used when no input is given.
    pub lon: f64,
    pub lat: f64,
    pub debug: bool,
}

impl Config {
    pub fn has_position(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    pub fn angle_unit(&self) -> Result<AngleUnit, crate::error::CoordError> {
        self.unit.parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: "".to_string(),
            output: "".to_string(),
            columns: crate::constants::DEFAULT_COLUMNS.to_string(),
            unit: AngleUnit::Degree.to_str().to_string(),
            basis: false,
            header: true,
            file_num_cap: -1,
            star_num_cap: -1,
            lon: f64::NAN,
            lat: f64::NAN,
            debug: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("columns", &self.columns)
            .field("unit", &self.unit)
            .field("basis", &self.basis)
            .field("header", &self.header)
            .field("file_num_cap", &self.file_num_cap)
            .field("star_num_cap", &self.star_num_cap)
            .field("lon", &self.lon)
            .field("lat", &self.lat)
            .field("debug", &self.debug)
            .finish()
    }
}
