use crate::constants;
use crate::error::CoordError;

use std::fmt;
use std::str::FromStr;

/**
 * Unit of the angular values handed in by callers. The
 * coordinate functions only ever consume radians, so any
 * conversion happens here, at the boundary.
 **/
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AngleUnit {
    Radian,
    Degree,
    HourAngle,
    ArcMinute,
    ArcSecond,
    MilliArcSecond,
}

impl AngleUnit {
    pub fn to_str(&self) -> &str {
        match self {
            AngleUnit::Radian => "rad",
            AngleUnit::Degree => "deg",
            AngleUnit::HourAngle => "hourangle",
            AngleUnit::ArcMinute => "arcmin",
            AngleUnit::ArcSecond => "arcsec",
            AngleUnit::MilliArcSecond => "mas",
        }
    }

    /// Number of radians in one unit.
    pub fn radians_per_unit(&self) -> f64 {
        match self {
            AngleUnit::Radian => 1.0,
            AngleUnit::Degree => constants::DEG_TO_RAD,
            AngleUnit::HourAngle => constants::HOUR_TO_DEG * constants::DEG_TO_RAD,
            AngleUnit::ArcMinute => constants::ARCMIN_TO_DEG * constants::DEG_TO_RAD,
            AngleUnit::ArcSecond => constants::ARCSEC_TO_DEG * constants::DEG_TO_RAD,
            AngleUnit::MilliArcSecond => {
                constants::MILLIARCSEC_TO_ARCSEC * constants::ARCSEC_TO_DEG * constants::DEG_TO_RAD
            }
        }
    }

    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Radian => value,
            AngleUnit::Degree => value.to_radians(),
            _ => value * self.radians_per_unit(),
        }
    }

    pub fn from_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Radian => value,
            AngleUnit::Degree => value.to_degrees(),
            _ => value / self.radians_per_unit(),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = CoordError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radian),
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degree),
            "h" | "hour" | "hours" | "hourangle" => Ok(AngleUnit::HourAngle),
            "arcmin" | "amin" => Ok(AngleUnit::ArcMinute),
            "arcsec" | "asec" => Ok(AngleUnit::ArcSecond),
            "mas" | "milliarcsec" => Ok(AngleUnit::MilliArcSecond),
            _ => Err(CoordError::UnknownUnit(input.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn parses_aliases() {
        assert_eq!(AngleUnit::Degree, "deg".parse::<AngleUnit>().unwrap());
        assert_eq!(AngleUnit::Degree, " Degrees ".parse::<AngleUnit>().unwrap());
        assert_eq!(AngleUnit::HourAngle, "hourangle".parse::<AngleUnit>().unwrap());
        assert_eq!(AngleUnit::MilliArcSecond, "mas".parse::<AngleUnit>().unwrap());
        assert_eq!(AngleUnit::Radian, "RAD".parse::<AngleUnit>().unwrap());
    }

    #[test]
    fn rejects_unknown_unit() {
        let res: Result<AngleUnit, _> = "furlong".parse();
        assert!(matches!(res, Err(CoordError::UnknownUnit(u)) if u == "furlong"));
    }

    #[test]
    fn converts_to_radians() {
        let eps = 1e-12;
        assert_relative_eq!(AngleUnit::Degree.to_radians(90.0), FRAC_PI_2, max_relative = eps);
        assert_relative_eq!(AngleUnit::HourAngle.to_radians(12.0), PI, max_relative = eps);
        assert_relative_eq!(AngleUnit::ArcMinute.to_radians(60.0 * 180.0), PI, max_relative = eps);
        assert_relative_eq!(AngleUnit::ArcSecond.to_radians(3600.0 * 180.0), PI, max_relative = eps);
        assert_relative_eq!(
            AngleUnit::MilliArcSecond.to_radians(3.6e6),
            1.0_f64.to_radians(),
            max_relative = eps
        );
        assert_eq!(AngleUnit::Radian.to_radians(1.234), 1.234);
    }

    #[test]
    fn from_radians_inverts() {
        for unit in [AngleUnit::Degree, AngleUnit::HourAngle, AngleUnit::ArcSecond] {
            assert_relative_eq!(unit.from_radians(unit.to_radians(42.5)), 42.5, max_relative = 1e-12);
        }
    }
}
