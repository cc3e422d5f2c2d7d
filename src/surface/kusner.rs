//! Kusner's formula for the family of minimal surfaces with `p`-fold symmetry
use super::{r, rho};
use crate::coordinate::{Coor2D, Coor3D};
use crate::math::complex::{cdiv, cmul, cpow, real, I, ONE};

/// The point of Kusner's surface of order `p` over the stereographic
/// coordinate `z`.
///
/// With `f = i/(z²ᵖ + r(p)·zᵖ - 1)` the result is the real part of
/// `f·(z²ᵖ⁻¹ - z, -i·(z²ᵖ⁻¹ + z), ρ(p)·(z²ᵖ + 1))`.
///
/// Singular where `z²ᵖ + r(p)·zᵖ - 1` vanishes. `p` must be at least 2.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// let x = kusners_formula(Coor2D::raw(0.3, 0.4), 3);
/// assert!(x.is_finite());
/// ```
#[must_use]
pub fn kusners_formula(z: Coor2D, p: i32) -> Coor3D {
    let z_to_the_2p_minus_1 = cpow(z, 2 * p - 1);
    let z_to_the_2p = cmul(z, z_to_the_2p_minus_1);
    let factor = cdiv(I, z_to_the_2p + r(p) * cpow(z, p) - ONE);

    let first = cmul(factor, z_to_the_2p_minus_1 - z);
    let second = cmul(factor, cmul(-I, z_to_the_2p_minus_1 + z));
    let third = cmul(factor, rho(p) * (z_to_the_2p + ONE));
    Coor3D([real(first), real(second), real(third)])
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CoordinateTuple;
    use float_eq::assert_float_eq;

    #[test]
    fn reference_values() {
        let x = kusners_formula(Coor2D::raw(0.5, 0.), 3);
        assert_float_eq!(x.0, [0., -0.7536888160811025, 0.], abs_all <= 1e-12);

        let x = kusners_formula(Coor2D::raw(0.3, 0.4), 3);
        let expected = [-0.3602260206338397, -0.21625612436346908, 0.03238268347889271];
        assert_float_eq!(x.0, expected, abs_all <= 1e-12);

        let x = kusners_formula(Coor2D::raw(1.2, -0.7), 3);
        let expected = [0.18160062092369558, 0.45179364934798427, 0.24501462203261878];
        assert_float_eq!(x.0, expected, abs_all <= 1e-12);
    }

    #[test]
    fn origin() {
        // f = -i, and all three products are purely imaginary
        let x = kusners_formula(Coor2D::origin(), 4);
        assert_float_eq!(x.0, [0., 0., 0.], abs_all <= 1e-15);
    }

    #[test]
    fn singular() {
        // For p = 2 the denominator z⁴ + 2√3·z² - 1 has a real root at z² = 2 - √3
        let z = Coor2D::raw((2. - 3f64.sqrt()).sqrt(), 0.);
        let x = kusners_formula(z, 2);
        assert!(x.0.iter().map(|e| e.abs()).fold(0., f64::max) > 1e10 || !x.is_finite());
    }
}
