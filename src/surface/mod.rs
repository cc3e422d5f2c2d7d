//! The surface construction layer: closed form minimal surface families,
//! parameterized by the natural parameter `p` (the symmetry order) and the
//! stereographic coordinate `z` of a point on the domain sphere.
use crate::coordinate::{Coor2D, Coor3D, CoordinateTuple};
use crate::math::complex::{e_to_the_is, ONE};
use crate::Error;
use log::{debug, trace, warn};
use std::fmt;
use std::str::FromStr;

pub mod family;
pub mod kusner;
pub mod null_curve;
pub mod parameters;

use parameters::Parameters;

/// The map `ρ(p) = (p - 1)/p`
#[must_use]
pub fn rho(p: i32) -> f64 {
    (p - 1) as f64 / p as f64
}

/// The map `r(p) = 2·√(2p - 1)/(p - 1)`. Infinite at `p = 1`.
#[must_use]
pub fn r(p: i32) -> f64 {
    2. * ((2 * p - 1) as f64).sqrt() / (p - 1) as f64
}

// ----- O R D E R -------------------------------------------------------------

/// The natural parameter `p` of a surface family, validated as `p ≥ 2`.
///
/// The free functions of this module take a plain `i32` and leave the
/// check to the caller. `Order` is the checked way in.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Order(i32);

impl Order {
    /// Largest order for which `2p` is representable
    pub const MAX: i32 = i32::MAX / 2;

    /// # Examples
    ///
    /// ```
    /// use minsurf::prelude::*;
    /// assert_eq!(Order::new(3)?.get(), 3);
    /// assert!(Order::new(1).is_err());
    /// # Ok::<(), minsurf::Error>(())
    /// ```
    pub fn new(p: i64) -> Result<Order, Error> {
        if p < 2 || p > Order::MAX as i64 {
            return Err(Error::InvalidOrder(p));
        }
        Ok(Order(p as i32))
    }

    #[must_use]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Order {
    type Error = Error;
    fn try_from(p: i64) -> Result<Self, Self::Error> {
        Order::new(p)
    }
}

impl TryFrom<i32> for Order {
    type Error = Error;
    fn try_from(p: i32) -> Result<Self, Self::Error> {
        Order::new(p as i64)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----- S U R F A C E ---------------------------------------------------------

/// A member of one of the surface families, configured by its textual
/// definition:
///
/// | definition                    | evaluates                         |
/// |-------------------------------|-----------------------------------|
/// | `kusner p=3`                  | [`kusners_formula`](kusner::kusners_formula) |
/// | `phitilde p=3`                | [`phitilde`](null_curve::phitilde) |
/// | `phitilde_family p=3 c=0,1`   | [`phitilde_family`](null_curve::phitilde_family) |
/// | `gamma p=3`                   | [`gamma`](family::gamma)          |
/// | `gamma_s p=3 s=0.5`           | [`gamma_s_family`](family::gamma_s_family) with `c = e^{is}` |
/// | `gamma_t p=3 t=0.5`           | [`gamma_t_family`](family::gamma_t_family) |
///
/// `s` and `t` default to 0, `c` defaults to `1,0`.
///
/// # Examples
///
/// ```
/// use minsurf::prelude::*;
/// let surface: Surface = "gamma_s p=3 s=0".parse()?;
/// let z = Coor2D::raw(0.3, 0.4);
/// assert_eq!(surface.eval(z), gamma(z, 3));
/// # Ok::<(), minsurf::Error>(())
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Surface {
    Kusner { p: Order },
    Phitilde { p: Order },
    PhitildeFamily { p: Order, c: Coor2D },
    Gamma { p: Order },
    GammaS { p: Order, s: f64 },
    GammaT { p: Order, t: f64 },
}

impl Surface {
    /// The natural parameter of the family
    #[must_use]
    pub fn order(&self) -> Order {
        match *self {
            Surface::Kusner { p }
            | Surface::Phitilde { p }
            | Surface::PhitildeFamily { p, .. }
            | Surface::Gamma { p }
            | Surface::GammaS { p, .. }
            | Surface::GammaT { p, .. } => p,
        }
    }

    /// The name used in the textual definition
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Surface::Kusner { .. } => "kusner",
            Surface::Phitilde { .. } => "phitilde",
            Surface::PhitildeFamily { .. } => "phitilde_family",
            Surface::Gamma { .. } => "gamma",
            Surface::GammaS { .. } => "gamma_s",
            Surface::GammaT { .. } => "gamma_t",
        }
    }

    /// The parameter keys understood by this family
    #[must_use]
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Surface::PhitildeFamily { .. } => &["p", "c"],
            Surface::GammaS { .. } => &["p", "s"],
            Surface::GammaT { .. } => &["p", "t"],
            _ => &["p"],
        }
    }

    /// The surface point over the stereographic coordinate `z`. Non-finite
    /// at the singular points of the family.
    #[must_use]
    pub fn eval(&self, z: Coor2D) -> Coor3D {
        match *self {
            Surface::Kusner { p } => kusner::kusners_formula(z, p.get()),
            Surface::Phitilde { p } => null_curve::phitilde(z, p.get()),
            Surface::PhitildeFamily { p, c } => null_curve::phitilde_family(c, z, p.get()),
            Surface::Gamma { p } => family::gamma(z, p.get()),
            Surface::GammaS { p, s } => family::gamma_s_family(e_to_the_is(s), z, p.get()),
            Surface::GammaT { p, t } => family::gamma_t_family(t, z, p.get()),
        }
    }

    /// Like [`eval`](Self::eval), but reports non-finite results as
    /// [`Error::Singular`]
    pub fn checked_eval(&self, z: Coor2D) -> Result<Coor3D, Error> {
        let x = self.eval(z);
        if x.is_finite() {
            return Ok(x);
        }
        trace!("{self} is singular at {:?}", z.0);
        Err(Error::Singular(format!("{self} at z = {:?}", z.0)))
    }
}

impl FromStr for Surface {
    type Err = Error;

    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        let params = Parameters::new(definition)?;
        let p = params.order("p");
        let surface = match params.name.as_str() {
            "kusner" => Surface::Kusner { p: p? },
            "phitilde" => Surface::Phitilde { p: p? },
            "phitilde_family" => Surface::PhitildeFamily {
                p: p?,
                c: params.complex("c", ONE)?,
            },
            "gamma" => Surface::Gamma { p: p? },
            "gamma_s" => Surface::GammaS {
                p: p?,
                s: params.real("s", 0.)?,
            },
            "gamma_t" => Surface::GammaT {
                p: p?,
                t: params.real("t", 0.)?,
            },
            name => {
                warn!("Unknown surface: '{name}'");
                return Err(Error::NotFound(name.to_string()));
            }
        };

        let ignored = params.ignored(surface.keys());
        if !ignored.is_empty() {
            warn!("{}: ignoring parameters {ignored:?}", surface.name());
        }
        debug!("Parsed surface definition '{definition}' as {surface:?}");
        Ok(surface)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} p={}", self.name(), self.order())?;
        match self {
            Surface::PhitildeFamily { c, .. } => write!(f, " c={},{}", c[0], c[1]),
            Surface::GammaS { s, .. } => write!(f, " s={s}"),
            Surface::GammaT { t, .. } => write!(f, " t={t}"),
            _ => Ok(()),
        }
    }
}

// ----- T E S T S ---------------------------------------------------
