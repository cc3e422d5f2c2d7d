//! The two lower layers: free functions for complex arithmetic, and
//! projections between Euclidean spaces, spheres and their stereographic
//! charts.

/// Complex numbers as `Coor2D`, and their basic arithmetic
pub mod complex;
pub use complex::{cdiv, cmul, cpow, e_to_the_is, img, real};

/// Projections onto spheres, stereographic charts, and sphere inversion
pub mod projection;
pub use projection::{
    one_sphere, sphere_inversion, stereo2, stereo2_inv, stereo3, stereo3_e3, stereo3_e3_inv,
    stereo3_e4, stereo3_e4_inv, stereo3_inv, two_sphere,
};
