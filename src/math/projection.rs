//! Projections between Euclidean space, spheres and their stereographic charts.
//!
//! Each map is a closed form expression, which is total except at a single
//! singular point (the pole of a chart, the origin of a radial projection,
//! the center of an inversion). At the singular point the result is the
//! IEEE infinity or NaN arising from the division by zero.
use crate::coordinate::{Coor2D, Coor3D, Coor4D, CoordinateTuple};

// ----- R A D I A L   P R O J E C T I O N S ----------------------------------

/// Project the direction `z ∈ ℂ` onto the circle of radius `r`.
/// Singular at `z = 0`.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// assert_eq!(one_sphere(Coor2D::raw(3., 4.), 1.), Coor2D::raw(0.6, 0.8));
/// ```
#[must_use]
pub fn one_sphere(z: Coor2D, r: f64) -> Coor2D {
    z / z.length() * r
}

/// Project the direction `v ∈ ℝ³` onto the 2-sphere of radius `r`.
/// Singular at `v = 0`.
#[must_use]
pub fn two_sphere(v: Coor3D, r: f64) -> Coor3D {
    v / v.length() * r
}

// ----- S T E R E O G R A P H I C   P R O J E C T I O N S --------------------

/// Stereographic projection from S² into ℂ, with the north pole
/// `(0, 0, 1)` as the center of projection. Singular at the pole.
#[must_use]
pub fn stereo2(c: Coor3D) -> Coor2D {
    let [x, y, z] = c.0;
    Coor2D([x, y]) / (1. - z)
}

/// Inverse of [`stereo2`]: lift `q ∈ ℂ` to S². Total.
#[must_use]
pub fn stereo2_inv(q: Coor2D) -> Coor3D {
    let [x, y] = q.0;
    let n = q.length2();
    Coor3D([2. * x, 2. * y, n - 1.]) / (n + 1.)
}

/// Stereographic projection from S³ into ℝ³. This is the default chart,
/// with the pole at `e4 = (0, 0, 0, 1)`. See [`stereo3_e4`].
#[must_use]
pub fn stereo3(c: Coor4D) -> Coor3D {
    stereo3_e4(c)
}

/// Inverse of [`stereo3`]. See [`stereo3_e4_inv`].
#[must_use]
pub fn stereo3_inv(v: Coor3D) -> Coor4D {
    stereo3_e4_inv(v)
}

/// Stereographic projection from S³ into ℝ³, with the 4th basis vector
/// `e4 = (0, 0, 0, 1)` as the center of projection:
/// `(x, y, z, w) → (x, y, z)/(1 - w)`. Singular at `e4`.
#[must_use]
pub fn stereo3_e4(c: Coor4D) -> Coor3D {
    let [x, y, z, w] = c.0;
    Coor3D([x, y, z]) / (1. - w)
}

/// Inverse of [`stereo3_e4`]: `v → (2x, 2y, 2z, |v|² - 1)/(|v|² + 1)`. Total.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// // The origin of ℝ³ is the image of the south pole
/// assert_eq!(stereo3_e4_inv(Coor3D::origin()), Coor4D::raw(0., 0., 0., -1.));
/// ```
#[must_use]
pub fn stereo3_e4_inv(v: Coor3D) -> Coor4D {
    let [x, y, z] = v.0;
    let n = v.length2();
    Coor4D([2. * x, 2. * y, 2. * z, n - 1.]) / (n + 1.)
}

/// Stereographic projection from S³ into ℝ³, with the 3rd basis vector
/// `e3 = (0, 0, 1, 0)` as the center of projection. The image coordinates
/// are ordered `(w, x, y)/(1 - z)`. Singular at `e3`.
#[must_use]
pub fn stereo3_e3(c: Coor4D) -> Coor3D {
    let [x, y, z, w] = c.0;
    Coor3D([w, x, y]) / (1. - z)
}

/// Inverse of [`stereo3_e3`]. Total.
#[must_use]
pub fn stereo3_e3_inv(v: Coor3D) -> Coor4D {
    let [w, x, y] = v.0;
    let n = v.length2();
    Coor4D([2. * x, 2. * y, n - 1., 2. * w]) / (n + 1.)
}

// ----- I N V E R S I O N -----------------------------------------------------

/// Inversion in the sphere with the given `center` and radius `scale`:
/// `z → (z - center)/|z - center|²·scale² + center`.
///
/// Points inside the sphere are mapped outside and vice versa, while the
/// sphere itself is fixed pointwise. Singular at `z = center`.
#[must_use]
pub fn sphere_inversion(z: Coor3D, center: Coor3D, scale: f64) -> Coor3D {
    let transformed = z - center;
    transformed / transformed.length2() * (scale * scale) + center
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn radial() {
        assert_eq!(one_sphere(Coor2D::raw(3., 4.), 1.), Coor2D::raw(0.6, 0.8));
        assert_eq!(one_sphere(Coor2D::raw(0., -2.), 3.), Coor2D::raw(0., -3.));
        assert_float_eq!(
            two_sphere(Coor3D::raw(2., 3., 6.), 14.).0,
            [4., 6., 12.],
            abs_all <= 1e-14
        );
        assert!(!one_sphere(Coor2D::origin(), 1.).is_finite());
        assert!(!two_sphere(Coor3D::origin(), 1.).is_finite());
    }

    #[test]
    fn stereo2_chart() {
        // The equator is fixed, the south pole goes to the origin
        assert_eq!(stereo2(Coor3D::raw(1., 0., 0.)), Coor2D::raw(1., 0.));
        assert_eq!(stereo2(Coor3D::raw(0., 0., -1.)), Coor2D::origin());
        assert_float_eq!(stereo2(Coor3D::raw(0.6, 0., 0.8)).0, [3., 0.], abs_all <= 1e-14);
        assert!(!stereo2(Coor3D::raw(0., 0., 1.)).is_finite());

        let q = Coor2D::raw(0.3, -1.7);
        let c = stereo2_inv(q);
        assert_float_eq!(c.length(), 1., abs <= 1e-15);
        assert_float_eq!(stereo2(c).0, q.0, abs_all <= 1e-14);
    }

    #[test]
    fn stereo3_chart() {
        assert_eq!(stereo3(Coor4D::raw(0., 0., 0., -1.)), Coor3D::origin());
        assert_float_eq!(
            stereo3(Coor4D::raw(0., 0.6, 0., 0.8)).0,
            [0., 3., 0.],
            abs_all <= 1e-14
        );
        assert!(!stereo3(Coor4D::raw(0., 0., 0., 1.)).is_finite());

        let c = Coor4D::raw(0.5, -0.5, 0.5, 0.5);
        assert_float_eq!(stereo3_inv(stereo3(c)).0, c.0, abs_all <= 1e-15);

        let v = Coor3D::raw(1.5, -2., 0.25);
        let c = stereo3_inv(v);
        assert_float_eq!(c.length(), 1., abs <= 1e-15);
        assert_float_eq!(stereo3(c).0, v.0, abs_all <= 1e-14);
        assert_eq!(stereo3(c), stereo3_e4(c));
        assert_eq!(stereo3_inv(v), stereo3_e4_inv(v));
    }

    #[test]
    fn stereo3_e3_chart() {
        let c = Coor4D::raw(0.6, 0., 0., 0.8);
        assert_eq!(stereo3_e3(c), Coor3D::raw(0.8, 0.6, 0.));
        assert!(!stereo3_e3(Coor4D::raw(0., 0., 1., 0.)).is_finite());

        let v = Coor3D::raw(-0.4, 1.1, 2.);
        let c = stereo3_e3_inv(v);
        assert_float_eq!(c.length(), 1., abs <= 1e-15);
        assert_float_eq!(stereo3_e3(c).0, v.0, abs_all <= 1e-14);
    }

    #[test]
    fn inversion() {
        let center = Coor3D::raw(1., 2., 3.);

        // Points on the sphere are fixed
        let on = center + Coor3D::raw(0., 2., 0.);
        assert_float_eq!(sphere_inversion(on, center, 2.).0, on.0, abs_all <= 1e-15);

        // Inside goes outside
        let inside = center + Coor3D::raw(1., 0., 0.);
        let outside = sphere_inversion(inside, center, 2.);
        assert_float_eq!(outside.0, [5., 2., 3.], abs_all <= 1e-15);

        // Involution
        let z = Coor3D::raw(-0.3, 4., 0.7);
        let zz = sphere_inversion(sphere_inversion(z, center, 1.5), center, 1.5);
        assert_float_eq!(zz.0, z.0, abs_all <= 1e-14);

        assert!(!sphere_inversion(center, center, 1.).is_finite());
    }
}
