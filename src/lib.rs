//! Sky coordinate helpers: unit vectors and local tangent bases
//! (east, north, radial) for longitude/latitude pairs such as
//! right ascension and declination.

pub mod angle;
pub mod batch;
pub mod constants;
pub mod convert;
pub mod coord;
pub mod data;
pub mod error;
pub mod load;
pub mod parse;
pub mod write;


pub use angle::AngleUnit;
pub use batch::{tangent_bases, unit_vectors};
pub use coord::{from_tangent, sky_from_vector, tangent_basis, to_tangent, unit_vector};
pub use error::CoordError;
