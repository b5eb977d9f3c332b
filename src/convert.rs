extern crate nalgebra as na;

use crate::batch;
use crate::constants;
use crate::coord;
use crate::data::Config;
use crate::error::CoordError;
use crate::load::Loader;
use crate::write;

use na::Vector3;
use ndarray::Array1;

/**
 * Loads the catalog(s) at `config.input`, converts all positions
 * at once and writes the result to `config.output`. Returns the
 * number of converted positions.
 **/
pub fn convert_catalog(config: &Config) -> Result<usize, CoordError> {
    let unit = config.angle_unit()?;
    let mut loader = Loader::new(
        constants::DEFAULT_SEP,
        config.file_num_cap,
        config.star_num_cap,
        config.header,
        unit,
        &config.columns,
    )?;
    let records = loader.load_dir(&config.input)?;
    log::info!("{} positions loaded from {}", records.len(), config.input);

    let lon: Array1<f64> = records.iter().map(|r| r.lon).collect();
    let lat: Array1<f64> = records.iter().map(|r| r.lat).collect();
    if config.basis {
        let bases = batch::tangent_bases(lon.view(), lat.view())?;
        write::write_tangent_bases(&records, &bases, &config.output)?;
    } else {
        let vectors = batch::unit_vectors(lon.view(), lat.view())?;
        write::write_unit_vectors(&records, &vectors, &config.output)?;
    }
    Ok(records.len())
}

fn fmt_vec(v: &Vector3<f64>) -> String {
    format!("[{:.12}, {:.12}, {:.12}]", v.x, v.y, v.z)
}

/**
 * Human-readable unit vector and, if requested, tangent basis of
 * the single position given by `config.lon` and `config.lat`. The
 * report also gives the position wrapped back into the usual
 * ranges, in the caller's unit.
 **/
pub fn describe_position(config: &Config) -> Result<String, CoordError> {
    let unit = config.angle_unit()?;
    let lon = unit.to_radians(config.lon);
    let lat = unit.to_radians(config.lat);
    log::debug!("Position in radians: lon = {}, lat = {}", lon, lat);

    let v = coord::unit_vector(lon, lat);
    // Position recovered from the vector, wrapped into the usual ranges
    let (norm_lon, norm_lat) = coord::sky_from_vector(&v);
    let mut out = format!(
        "lon = {} {unit}, lat = {} {unit}\nunit vector: {}\nnormalized: lon = {:.9} {unit}, lat = {:.9} {unit}",
        config.lon,
        config.lat,
        fmt_vec(&v),
        unit.from_radians(norm_lon),
        unit.from_radians(norm_lat),
        unit = unit
    );
    if config.basis {
        let basis = coord::tangent_basis(lon, lat);
        for (i, name) in ["east", "north", "radial"].iter().enumerate() {
            let row: Vector3<f64> = basis.row(i).transpose();
            out.push_str(&format!("\n{:<7} {}", format!("{}:", name), fmt_vec(&row)));
        }
    }
    Ok(out)
}
