//! *Complex arithmetic, conformal projections, and closed form minimal
//! surface families*.
//!
//! The crate is organized in three layers, each a flat set of pure
//! functions, composed strictly bottom-up:
//!
//! 1. [`math::complex`]: complex numbers as [`Coor2D`](coordinate::Coor2D),
//!    with [`cmul`](math::cmul), [`cdiv`](math::cdiv), [`cpow`](math::cpow)
//!    and friends
//! 2. [`math::projection`]: radial projection onto spheres, stereographic
//!    charts of S² and S³, and sphere inversion
//! 3. [`surface`]: Kusner's formula, and the null curve construction of
//!    tutorials 5 and 6 of the
//!    [DDG 2019 course](http://wordpress.discretization.de/ddg2019), with
//!    its associated families
//!
//! None of the numerical functions fail: at their (documented) singular
//! points, the IEEE infinities and NaNs of the division by zero propagate
//! to the result. The [`Surface`](surface::Surface) descriptor adds a
//! textual definition syntax and a checked evaluation on top.
//!
//! ```
//! use minsurf::prelude::*;
//!
//! // A point of the unit sphere, its stereographic coordinate, and the
//! // corresponding point of the Kusner surface of order 3
//! let z = stereo2(two_sphere(Coor3D::raw(1., 2., -2.), 1.));
//! let x = kusners_formula(z, 3);
//! assert!(x.is_finite());
//!
//! let surface: Surface = "gamma_t p=3 t=0.5".parse()?;
//! assert_eq!(surface.checked_eval(z)?, gamma_t_family(0.5, z, 3));
//! # Ok::<(), minsurf::Error>(())
//! ```

pub mod coordinate;
pub mod math;
pub mod surface;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::coordinate::{Coor2D, Coor3D, Coor4D, CoordinateTuple};
    pub use crate::math::complex::{cdiv, cmul, cpow, e_to_the_is, img, real};
    pub use crate::math::projection::{
        one_sphere, sphere_inversion, stereo2, stereo2_inv, stereo3, stereo3_e3, stereo3_e3_inv,
        stereo3_e4, stereo3_e4_inv, stereo3_inv, two_sphere,
    };
    pub use crate::surface::family::{gamma, gamma1, gamma2, gamma3, gamma_s_family, gamma_t_family};
    pub use crate::surface::kusner::kusners_formula;
    pub use crate::surface::null_curve::{
        phi1, phi2, phi3, phi4, phi5, phitilde, phitilde1, phitilde2, phitilde3, phitilde4,
        phitilde5, phitilde_family,
    };
    pub use crate::surface::{r, rho, Order, Surface};
    pub use crate::Error;
}

/// The errors of the checked layer. The numerical functions themselves
/// never fail, but signal singularities through IEEE infinities and NaNs.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("surface {0} not found")]
    NotFound(String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("invalid order p={0} (must be at least 2)")]
    InvalidOrder(i64),

    #[error("singular point: {0}")]
    Singular(String),
}
