//! Vectorized forms of the coordinate functions.
//!
//! Inputs are arrays of any shape `S` holding longitudes and latitudes in
//! radians. Outputs put the component axis first: unit vectors come back with
//! shape `(3, ...S)` and tangent bases with shape `(3, 3, ...S)`, indexed as
//! `[row, component, ...S]`. Each element is computed by the scalar function
//! in [`crate::coord`], so batched and scalar results are identical.

extern crate nalgebra as na;

use crate::coord;
use crate::error::CoordError;

use na::RealField;
use ndarray::{stack, ArrayD, ArrayView, Axis, Dimension, Zip};

fn check_shapes<T, D: Dimension>(
    lon: &ArrayView<T, D>,
    lat: &ArrayView<T, D>,
) -> Result<(), CoordError> {
    if lon.shape() != lat.shape() {
        return Err(CoordError::ShapeMismatch {
            lon: lon.shape().to_vec(),
            lat: lat.shape().to_vec(),
        });
    }
    Ok(())
}

// Stacks equally shaped arrays along a new leading axis
fn stack_leading<T: Clone>(parts: &[ArrayD<T>]) -> Result<ArrayD<T>, CoordError> {
    let views: Vec<_> = parts.iter().map(|a| a.view()).collect();
    Ok(stack(Axis(0), &views)?)
}

/**
 * Unit vectors for all positions, with shape (3, ...S).
 **/
pub fn unit_vectors<T, D>(
    lon: ArrayView<T, D>,
    lat: ArrayView<T, D>,
) -> Result<ArrayD<T>, CoordError>
where
    T: RealField + Copy,
    D: Dimension,
{
    check_shapes(&lon, &lat)?;
    let vecs = Zip::from(&lon)
        .and(&lat)
        .map_collect(|&lo, &la| coord::unit_vector(lo, la));
    let comps: Vec<ArrayD<T>> = (0..3).map(|c| vecs.map(|v| v[c]).into_dyn()).collect();
    stack_leading(&comps)
}

/**
 * Tangent bases for all positions, with shape (3, 3, ...S). The
 * sub-array at index 2 of the leading axis equals
 * `unit_vectors(lon, lat)`.
 **/
pub fn tangent_bases<T, D>(
    lon: ArrayView<T, D>,
    lat: ArrayView<T, D>,
) -> Result<ArrayD<T>, CoordError>
where
    T: RealField + Copy,
    D: Dimension,
{
    check_shapes(&lon, &lat)?;
    let mats = Zip::from(&lon)
        .and(&lat)
        .map_collect(|&lo, &la| coord::tangent_basis(lo, la));
    let mut rows = Vec::with_capacity(3);
    for r in 0..3 {
        let comps: Vec<ArrayD<T>> = (0..3)
            .map(|c| mats.map(|m| m[(r, c)]).into_dyn())
            .collect();
        rows.push(stack_leading(&comps)?);
    }
    stack_leading(&rows)
}
