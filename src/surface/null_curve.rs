//! The holomorphic null curve `φ = (φ1, ..., φ5)` of tutorial 5 of the
//! [DDG 2019 course](http://wordpress.discretization.de/ddg2019), and its
//! projection to ℝ³.
//!
//! The components `φ̃4 = (φ4 - φ5)/2` and `φ̃5 = (φ4 + φ5)/2` are the light
//! cone coordinates of the last two components, and the surface point is
//! the real part of `(φ1, φ2, φ3)/(φ̃5 - φ̃4)`.
//!
//! Every function here takes the stereographic coordinate `z` and the
//! natural parameter `p ≥ 2`.
use super::{r, rho};
use crate::coordinate::{Coor2D, Coor3D};
use crate::math::complex::{cdiv, cmul, cpow, real, I, ONE};

/// `φ1 = i·(z²ᵖ⁻¹ - z)`
#[must_use]
pub fn phi1(z: Coor2D, p: i32) -> Coor2D {
    cmul(I, cpow(z, 2 * p - 1) - z)
}

/// `φ2 = z²ᵖ⁻¹ + z`
#[must_use]
pub fn phi2(z: Coor2D, p: i32) -> Coor2D {
    cpow(z, 2 * p - 1) + z
}

/// `φ3 = i·(ρ·z²ᵖ + 1)`
#[must_use]
pub fn phi3(z: Coor2D, p: i32) -> Coor2D {
    cmul(I, rho(p) * cpow(z, 2 * p) + ONE)
}

/// `φ4 = ρ·(r·zᵖ + (z²ᵖ - 1))`
#[must_use]
pub fn phi4(z: Coor2D, p: i32) -> Coor2D {
    rho(p) * (r(p) * cpow(z, p) + (cpow(z, 2 * p) - ONE))
}

/// `φ5 = ρ·(r·zᵖ - (z²ᵖ - 1))`
#[must_use]
pub fn phi5(z: Coor2D, p: i32) -> Coor2D {
    rho(p) * (r(p) * cpow(z, p) - (cpow(z, 2 * p) - ONE))
}

/// `φ̃4 = ρ·(z²ᵖ - 1)`
#[must_use]
pub fn phitilde4(z: Coor2D, p: i32) -> Coor2D {
    rho(p) * (cpow(z, 2 * p) - ONE)
}

/// `φ̃5 = ρ·r·zᵖ`
#[must_use]
pub fn phitilde5(z: Coor2D, p: i32) -> Coor2D {
    rho(p) * r(p) * cpow(z, p)
}

/// The common denominator `φ̃5 - φ̃4` of the projection to ℝ³
#[must_use]
pub(crate) fn divisor(z: Coor2D, p: i32) -> Coor2D {
    phitilde5(z, p) - phitilde4(z, p)
}

/// `φ̃1 = φ1/(φ̃5 - φ̃4)`. Singular where the denominator vanishes.
#[must_use]
pub fn phitilde1(z: Coor2D, p: i32) -> Coor2D {
    cdiv(phi1(z, p), divisor(z, p))
}

/// `φ̃2 = φ2/(φ̃5 - φ̃4)`. Singular where the denominator vanishes.
#[must_use]
pub fn phitilde2(z: Coor2D, p: i32) -> Coor2D {
    cdiv(phi2(z, p), divisor(z, p))
}

/// `φ̃3 = φ3/(φ̃5 - φ̃4)`. Singular where the denominator vanishes.
#[must_use]
pub fn phitilde3(z: Coor2D, p: i32) -> Coor2D {
    cdiv(phi3(z, p), divisor(z, p))
}

/// The three projected components `(φ̃1, φ̃2, φ̃3)`, sharing one evaluation
/// of the denominator
fn projected(z: Coor2D, p: i32) -> [Coor2D; 3] {
    let d = divisor(z, p);
    [
        cdiv(phi1(z, p), d),
        cdiv(phi2(z, p), d),
        cdiv(phi3(z, p), d),
    ]
}

/// The surface point `(Re φ̃1, Re φ̃2, Re φ̃3)`
#[must_use]
pub fn phitilde(z: Coor2D, p: i32) -> Coor3D {
    let [first, second, third] = projected(z, p);
    Coor3D([real(first), real(second), real(third)])
}

/// The member of the associated family selected by the unit complex
/// number `c`: `(Re(c·φ̃1), Re(c·φ̃2), Re(c·φ̃3))`.
///
/// `c = 1` gives [`phitilde`], `c = e^{iπ/2}` gives the conjugate surface.
#[must_use]
pub fn phitilde_family(c: Coor2D, z: Coor2D, p: i32) -> Coor3D {
    let [first, second, third] = projected(z, p);
    Coor3D([
        real(cmul(c, first)),
        real(cmul(c, second)),
        real(cmul(c, third)),
    ])
}

// ----- T E S T S ---------------------------------------------------
