//
//ANGLES
//
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

// One hour of right ascension
pub const HOUR_TO_DEG: f64 = 15.0;

pub const ARCMIN_TO_DEG: f64 = 1.0 / 60.0;
pub const ARCSEC_TO_DEG: f64 = 1.0 / 3600.0;
pub const MILLIARCSEC_TO_ARCSEC: f64 = 1.0 / 1000.0;

//
//INPUT
//
// Default column layout of input catalogs
pub const DEFAULT_COLUMNS: &str = "source_id,ra,dec";

// Separator, a comma with optional spaces around it or multiple spaces
pub const DEFAULT_SEP: &str = r"\s*,\s*|\s+";
