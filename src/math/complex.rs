//! A complex number `re + i·im` is represented as `Coor2D([re, im])`.
//!
//! None of these functions fail: division by zero propagates as IEEE
//! infinities and NaNs, and it is up to the caller to check the results.
use crate::coordinate::Coor2D;

/// The multiplicative unit, `1 + 0i`
pub const ONE: Coor2D = Coor2D([1., 0.]);

/// The imaginary unit, `0 + 1i`
pub const I: Coor2D = Coor2D([0., 1.]);

/// The product `z·w`
#[must_use]
pub fn cmul(z: Coor2D, w: Coor2D) -> Coor2D {
    let [x, y] = z.0;
    let [u, v] = w.0;
    Coor2D([x * u - y * v, x * v + y * u])
}

/// The quotient `w/z`.
///
/// Singular at `z = 0`, where the result is infinite or NaN.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// let w = cdiv(Coor2D::raw(1., 0.), Coor2D::raw(0., 1.));
/// assert_eq!(w, Coor2D::raw(0., -1.));
/// ```
#[must_use]
pub fn cdiv(w: Coor2D, z: Coor2D) -> Coor2D {
    let [x, y] = z.0;
    let [u, v] = w.0;
    let divisor = x * x + y * y;
    Coor2D([(u * x + v * y) / divisor, (v * x - u * y) / divisor])
}

/// The integral power `zⁿ`, evaluated in polar form as `rⁿ·(cos nφ, sin nφ)`.
///
/// `n == 0` yields exactly `1 + 0i` for every `z`, including `z = 0`,
/// where the polar angle would otherwise be left to `atan2(0, 0)`.
/// Negative `n` gives `1/z⁻ⁿ`, which is singular at `z = 0`.
#[must_use]
pub fn cpow(z: Coor2D, n: i32) -> Coor2D {
    if n == 0 {
        return ONE;
    }
    let [x, y] = z.0;
    let r = x.hypot(y);
    let phi = y.atan2(x);
    let angle = n as f64 * phi;
    Coor2D([angle.cos(), angle.sin()]) * r.powi(n)
}

/// The real part of `z`
#[must_use]
pub fn real(z: Coor2D) -> f64 {
    z.0[0]
}

/// The imaginary part of `z`
#[must_use]
pub fn img(z: Coor2D) -> f64 {
    z.0[1]
}

/// The point `e^{is} = (cos s, sin s)` on the unit circle
#[must_use]
pub fn e_to_the_is(s: f64) -> Coor2D {
    let (sin, cos) = s.sin_cos();
    Coor2D([cos, sin])
}

// ----- T E S T S ---------------------------------------------------
