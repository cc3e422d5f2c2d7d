//! The associated families of tutorial 6 of the
//! [DDG 2019 course](http://wordpress.discretization.de/ddg2019).
//!
//! `γ = (γ1, γ2, γ3)` is the projected null curve of
//! [`null_curve`](super::null_curve), under its tutorial 6 name. The `s`
//! family rotates the complex structure of `γ` and yields isometric
//! deformations. The `t` family instead rotates the lifted pair `(φ2, φ̃4)`
//! before projecting.
use super::null_curve::{
    phi1, phi2, phi3, phitilde, phitilde1, phitilde2, phitilde3, phitilde4, phitilde5,
    phitilde_family,
};
use crate::coordinate::{Coor2D, Coor3D};
use crate::math::complex::{cdiv, real};

/// `γ1 = φ1/(φ̃5 - φ̃4)`
#[must_use]
pub fn gamma1(z: Coor2D, p: i32) -> Coor2D {
    phitilde1(z, p)
}

/// `γ2 = φ2/(φ̃5 - φ̃4)`
#[must_use]
pub fn gamma2(z: Coor2D, p: i32) -> Coor2D {
    phitilde2(z, p)
}

/// `γ3 = φ3/(φ̃5 - φ̃4)`
#[must_use]
pub fn gamma3(z: Coor2D, p: i32) -> Coor2D {
    phitilde3(z, p)
}

/// The base surface point `(Re γ1, Re γ2, Re γ3)`.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// let x = gamma(Coor2D::raw(0.5, 0.), 3);
/// assert!((x[1] - 0.6304971951713033).abs() < 1e-12);
/// ```
#[must_use]
pub fn gamma(z: Coor2D, p: i32) -> Coor3D {
    phitilde(z, p)
}

/// The member `(Re(c·γ1), Re(c·γ2), Re(c·γ3))` of the associated family,
/// for a unit complex number `c = e^{is}`. See also [`e_to_the_is`](crate::math::e_to_the_is).
#[must_use]
pub fn gamma_s_family(c: Coor2D, z: Coor2D, p: i32) -> Coor3D {
    phitilde_family(c, z, p)
}

/// The member of the `t` family: rotate `(φ2, φ̃4)` by the angle `t`,
///
/// ```txt
/// φ2'  = cos t·φ2 - sin t·φ̃4
/// φ̃4' = sin t·φ2 + cos t·φ̃4
/// ```
///
/// then project as `Re (φ1, φ2', φ3)/(φ̃5 - φ̃4')`.
///
/// Equals [`gamma`] at `t = 0`, and is 2π periodic in `t`. Singular where
/// the rotated denominator vanishes.
#[must_use]
pub fn gamma_t_family(t: f64, z: Coor2D, p: i32) -> Coor3D {
    let (sin, cos) = t.sin_cos();
    let phi2 = phi2(z, p);
    let phitilde4 = phitilde4(z, p);

    let rotated_phi2 = cos * phi2 - sin * phitilde4;
    let rotated_phitilde4 = sin * phi2 + cos * phitilde4;

    let d = phitilde5(z, p) - rotated_phitilde4;
    Coor3D([
        real(cdiv(phi1(z, p), d)),
        real(cdiv(rotated_phi2, d)),
        real(cdiv(phi3(z, p), d)),
    ])
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::complex::{e_to_the_is, I, ONE};
    use crate::surface::null_curve::divisor;
    use float_eq::assert_float_eq;
    use std::f64::consts::PI;

    const Z: Coor2D = Coor2D([0.3, 0.4]);

    #[test]
    fn reference_values() {
        let x = gamma(Coor2D::raw(0.5, 0.), 3);
        assert_float_eq!(x.0, [0., 0.6304971951713033, 0.], abs_all <= 1e-12);

        let x = gamma(Coor2D::raw(1.2, -0.7), 3);
        let expected = [0.7210168356061548, -0.10590189535224714, 0.3233043397586893];
        assert_float_eq!(x.0, expected, abs_all <= 1e-12);

        let x = gamma_s_family(I, Coor2D::raw(1.2, -0.7), 3);
        let expected = [0.511452654888044, 0.6704960483278074, 0.4547120041501085];
        assert_float_eq!(x.0, expected, abs_all <= 1e-12);

        let x = gamma_t_family(0.5, Z, 3);
        let expected = [1.8222724731331974, 1.4672544530072977, -1.3157694696388587];
        assert_float_eq!(x.0, expected, abs_all <= 1e-12);
    }

    #[test]
    fn components() {
        let g = gamma(Z, 4);
        assert_eq!(real(gamma1(Z, 4)), g[0]);
        assert_eq!(real(gamma2(Z, 4)), g[1]);
        assert_eq!(real(gamma3(Z, 4)), g[2]);
        assert_float_eq!(
            gamma1(Z, 4).0,
            cdiv(phi1(Z, 4), divisor(Z, 4)).0,
            abs_all <= 1e-15
        );
    }

    #[test]
    fn s_family() {
        assert_eq!(gamma_s_family(ONE, Z, 3), gamma(Z, 3));
        assert_eq!(gamma_s_family(e_to_the_is(0.), Z, 3), gamma(Z, 3));

        // Rotating by π flips the surface through the origin
        let flipped = gamma_s_family(e_to_the_is(PI), Z, 3);
        assert_float_eq!(flipped.0, (-gamma(Z, 3)).0, abs_all <= 1e-14);

        for s in [0.3, 1.7, -2.2] {
            let a = gamma_s_family(e_to_the_is(s), Z, 5);
            let b = gamma_s_family(e_to_the_is(s + 2. * PI), Z, 5);
            assert_float_eq!(a.0, b.0, abs_all <= 1e-12);
        }
    }

    #[test]
    fn t_family() {
        assert_eq!(gamma_t_family(0., Z, 3), gamma(Z, 3));
        let tiny = gamma_t_family(1e-300, Z, 3);
        assert_float_eq!(tiny.0, gamma(Z, 3).0, abs_all <= 1e-14);

        for t in [0.3, 1.7, -2.2] {
            let a = gamma_t_family(t, Z, 4);
            let b = gamma_t_family(t + 2. * PI, Z, 4);
            assert_float_eq!(a.0, b.0, abs_all <= 1e-10);
        }

        // The t family is not the s family
        let s = gamma_s_family(e_to_the_is(0.5), Z, 3);
        let t = gamma_t_family(0.5, Z, 3);
        assert!(s.hypot3(&t) > 1e-3);
    }
}
