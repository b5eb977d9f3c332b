extern crate nalgebra as na;

use na::{Matrix3, RealField, RowVector3, Vector3};

/**
 * Converts a sky position (lon[rad], lat[rad]), e.g. (ra, dec),
 * to the Cartesian unit vector pointing in that direction.
 **/
pub fn unit_vector<T: RealField + Copy>(lon: T, lat: T) -> Vector3<T> {
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    Vector3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat)
}

/**
 * Tangent-space basis at the sky position (lon[rad], lat[rad]).
 * The rows of the matrix are, in order, the east, north and
 * radial unit vectors. The radial row is exactly
 * `unit_vector(lon, lat)`.
 *
 * At the poles east is not uniquely defined. The formula still
 * gives the finite frame with east = (-sin(lon), cos(lon), 0).
 **/
pub fn tangent_basis<T: RealField + Copy>(lon: T, lat: T) -> Matrix3<T> {
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let east = RowVector3::new(-sin_lon, cos_lon, T::zero());
    let north = RowVector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
    let radial = unit_vector(lon, lat).transpose();
    Matrix3::from_rows(&[east, north, radial])
}

/// Components (east, north, radial) of `v` in the tangent frame at (lon, lat).
pub fn to_tangent<T: RealField + Copy>(lon: T, lat: T, v: &Vector3<T>) -> Vector3<T> {
    tangent_basis(lon, lat) * v
}

/// Cartesian vector from its (east, north, radial) components at (lon, lat).
pub fn from_tangent<T: RealField + Copy>(lon: T, lat: T, t: &Vector3<T>) -> Vector3<T> {
    tangent_basis(lon, lat).transpose() * t
}

/**
 * Sky position (lon[rad], lat[rad]) of the direction of `v`, which
 * need not be normalized. The longitude is in [0, 2pi) and the
 * latitude in [-pi/2, pi/2]. The zero vector gives (0, 0).
 **/
pub fn sky_from_vector<T: RealField + Copy>(v: &Vector3<T>) -> (T, T) {
    let mut lon = v.y.atan2(v.x);
    if lon < T::zero() {
        lon += T::two_pi();
    }
    if lon >= T::two_pi() {
        lon = T::zero();
    }
    let lat = v.z.atan2(v.x.hypot(v.y));
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-12;

    fn grid() -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        for i in -8..=24 {
            for j in -6..=6 {
                out.push((i as f64 * PI / 8.0 + 0.1, j as f64 * FRAC_PI_2 / 6.0));
            }
        }
        out
    }

    #[test]
    fn known_unit_vectors() {
        assert_abs_diff_eq!(unit_vector(0.0, 0.0), Vector3::new(1.0, 0.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(unit_vector(FRAC_PI_2, 0.0), Vector3::new(0.0, 1.0, 0.0), epsilon = TOL);
        assert_abs_diff_eq!(unit_vector(0.0, FRAC_PI_2), Vector3::new(0.0, 0.0, 1.0), epsilon = TOL);
        assert_abs_diff_eq!(unit_vector(PI, 0.0), Vector3::new(-1.0, 0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn unit_vector_has_unit_norm() {
        for (lon, lat) in grid() {
            assert_abs_diff_eq!(unit_vector(lon, lat).norm(), 1.0, epsilon = 1e-10);
        }
        // Out-of-range angles wrap through the trig functions
        assert_abs_diff_eq!(unit_vector(1234.5, -77.7).norm(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn known_basis() {
        let expected = Matrix3::new(0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(tangent_basis(0.0, 0.0), expected, epsilon = TOL);
    }

    #[test]
    fn radial_row_is_unit_vector() {
        for (lon, lat) in grid() {
            let basis = tangent_basis(lon, lat);
            assert_eq!(basis.row(2).transpose(), unit_vector(lon, lat));
        }
    }

    #[test]
    fn basis_is_orthonormal() {
        for (lon, lat) in grid() {
            let basis = tangent_basis(lon, lat);
            assert_abs_diff_eq!(basis * basis.transpose(), Matrix3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn basis_at_poles_is_finite() {
        for lat in [FRAC_PI_2, -FRAC_PI_2] {
            let lon = 0.7_f64;
            let basis = tangent_basis(lon, lat);
            assert!(basis.iter().all(|v| v.is_finite()));
            assert_abs_diff_eq!(
                basis.row(0).transpose(),
                Vector3::new(-lon.sin(), lon.cos(), 0.0),
                epsilon = TOL
            );
            assert_abs_diff_eq!(basis * basis.transpose(), Matrix3::identity(), epsilon = 1e-12);
            assert_abs_diff_eq!(basis[(2, 2)], lat.signum(), epsilon = TOL);
        }
    }

    #[test]
    fn east_and_north_are_derivatives() {
        // d(u)/d(lon) = cos(lat) * east, d(u)/d(lat) = north
        let h = 1e-6;
        for (lon, lat) in [(0.3_f64, 0.2_f64), (2.5, -1.1), (5.0, 1.3)] {
            let basis = tangent_basis(lon, lat);
            let d_lon = (unit_vector(lon + h, lat) - unit_vector(lon - h, lat)) / (2.0 * h);
            let d_lat = (unit_vector(lon, lat + h) - unit_vector(lon, lat - h)) / (2.0 * h);
            assert_abs_diff_eq!(d_lon, basis.row(0).transpose() * lat.cos(), epsilon = 1e-8);
            assert_abs_diff_eq!(d_lat, basis.row(1).transpose(), epsilon = 1e-8);
        }
    }

    #[test]
    fn nan_propagates() {
        let v = unit_vector(f64::NAN, 0.0);
        assert!(v.x.is_nan() && v.y.is_nan());
        assert_eq!(v.z, 0.0);
        assert!(tangent_basis(0.0, f64::NAN).row(1).iter().any(|c| c.is_nan()));
    }

    #[test]
    fn single_precision() {
        let v = unit_vector(0.5_f32, 0.25_f32);
        assert!((v.norm() - 1.0).abs() < 1e-6);
        let basis = tangent_basis(0.5_f32, 0.25_f32);
        assert_eq!(basis.row(2).transpose(), v);
    }

    #[test]
    fn tangent_projection() {
        let (lon, lat) = (1.2, -0.4);
        // The radial direction has no tangential component
        let radial = to_tangent(lon, lat, &(unit_vector(lon, lat) * 3.0));
        assert_abs_diff_eq!(radial, Vector3::new(0.0, 0.0, 3.0), epsilon = TOL);

        let v = Vector3::new(0.3, -2.0, 1.5);
        let t = to_tangent(lon, lat, &v);
        assert_abs_diff_eq!(t.norm(), v.norm(), epsilon = TOL);
        assert_abs_diff_eq!(from_tangent(lon, lat, &t), v, epsilon = TOL);
    }

    #[test]
    fn sky_from_vector_inverts_unit_vector() {
        for (lon, lat) in [(0.0, 0.0), (1.0, 0.5), (4.0, -1.2), (6.0, 0.1)] {
            let (l, b) = sky_from_vector(&(unit_vector(lon, lat) * 7.5));
            assert_abs_diff_eq!(l, lon, epsilon = TOL);
            assert_abs_diff_eq!(b, lat, epsilon = TOL);
        }
        // Longitudes wrap into [0, 2pi)
        let (l, _) = sky_from_vector(&unit_vector(-FRAC_PI_2, 0.3));
        assert_abs_diff_eq!(l, 3.0 * FRAC_PI_2, epsilon = TOL);
        assert_eq!(sky_from_vector(&Vector3::<f64>::zeros()), (0.0, 0.0));
        let (_, b) = sky_from_vector(&Vector3::new(0.0, 0.0, -2.0));
        assert_abs_diff_eq!(b, -FRAC_PI_2, epsilon = TOL);
    }
}
