use crate::data::SkyRecord;
use crate::error::CoordError;

use flate2::write::GzEncoder;
use flate2::Compression;
use ndarray::{ArrayD, ErrorKind, Ix2, Ix3, ShapeError};

use std::fs::File;
use std::io::{self, BufWriter, Write};

const VECTOR_HEADER: &str = "id,x,y,z";
const BASIS_HEADER: &str =
    "id,east_x,east_y,east_z,north_x,north_y,north_z,radial_x,radial_y,radial_z";

/**
 * Opens the output sink. An empty path writes to stdout, a
 * path ending in .gz is gzip-compressed.
 **/
fn open_output(output: &str) -> Result<Box<dyn Write>, CoordError> {
    if output.is_empty() {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let f = File::create(output)?;
    if output.ends_with(".gz") {
        Ok(Box::new(BufWriter::new(GzEncoder::new(
            f,
            Compression::default(),
        ))))
    } else {
        Ok(Box::new(BufWriter::new(f)))
    }
}

// The last axis must hold one entry per record
fn check_len(shape: &[usize], records: &[SkyRecord]) -> Result<(), CoordError> {
    if shape.last() != Some(&records.len()) {
        return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape).into());
    }
    Ok(())
}

fn describe(output: &str) -> &str {
    if output.is_empty() {
        "stdout"
    } else {
        output
    }
}

/**
 * Writes one line per record with its unit vector. `vectors`
 * must have shape (3, N), N being the number of records.
 **/
pub fn write_unit_vectors(
    records: &[SkyRecord],
    vectors: &ArrayD<f64>,
    output: &str,
) -> Result<(), CoordError> {
    let vectors = vectors.view().into_dimensionality::<Ix2>()?;
    check_len(vectors.shape(), records)?;
    log::info!(
        ":: Writing {} unit vectors to {}",
        records.len(),
        describe(output)
    );
    let mut f = open_output(output)?;
    writeln!(f, "{}", VECTOR_HEADER)?;
    for (i, record) in records.iter().enumerate() {
        writeln!(
            f,
            "{},{},{},{}",
            record.id,
            vectors[[0, i]],
            vectors[[1, i]],
            vectors[[2, i]]
        )?;
    }
    f.flush()?;
    Ok(())
}

/**
 * Writes one line per record with its tangent basis, row by
 * row. `bases` must have shape (3, 3, N).
 **/
pub fn write_tangent_bases(
    records: &[SkyRecord],
    bases: &ArrayD<f64>,
    output: &str,
) -> Result<(), CoordError> {
    let bases = bases.view().into_dimensionality::<Ix3>()?;
    check_len(bases.shape(), records)?;
    log::info!(
        ":: Writing {} tangent bases to {}",
        records.len(),
        describe(output)
    );
    let mut f = open_output(output)?;
    writeln!(f, "{}", BASIS_HEADER)?;
    for (i, record) in records.iter().enumerate() {
        let mut line = record.id.clone();
        for r in 0..3 {
            for c in 0..3 {
                line.push(',');
                line.push_str(&bases[[r, c, i]].to_string());
            }
        }
        writeln!(f, "{}", line)?;
    }
    f.flush()?;
    Ok(())
}
