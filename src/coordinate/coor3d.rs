/// Generic 3D coordinate tuple, with no fixed interpretation of the elements
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor3D(pub [f64; 3]);

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor3D {
    /// A `Coor3D` from its three elements
    #[must_use]
    pub fn raw(first: f64, second: f64, third: f64) -> Coor3D {
        Coor3D([first, second, third])
    }

    /// A `Coor3D` consisting of 3 `NaN`s
    #[must_use]
    pub fn nan() -> Coor3D {
        Coor3D([f64::NAN, f64::NAN, f64::NAN])
    }

    /// A `Coor3D` consisting of 3 `0`s
    #[must_use]
    pub fn origin() -> Coor3D {
        Coor3D([0., 0., 0.])
    }

    /// A `Coor3D` consisting of 3 `1`s
    #[must_use]
    pub fn ones() -> Coor3D {
        Coor3D([1., 1., 1.])
    }

    /// Euclidean distance between two points in 3D space.
    ///
    /// # Examples
    ///
    /// ```
    /// use minsurf::prelude::*;
    /// let t = 1000 as f64;
    /// let p0 = Coor3D::origin();
    /// let p1 = Coor3D::raw(t, t, t);
    /// assert_eq!(p0.hypot3(&p1), t.hypot(t).hypot(t));
    /// ```
    #[must_use]
    pub fn hypot3(&self, other: &Self) -> f64 {
        (self.0[0] - other.0[0])
            .hypot(self.0[1] - other.0[1])
            .hypot(self.0[2] - other.0[2])
    }
}

impl From<(f64, f64, f64)> for Coor3D {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Coor3D([xyz.0, xyz.1, xyz.2])
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coor3d() {
        let c = Coor3D::raw(1., 2., 3.);
        assert_eq!(c, Coor3D::from((1., 2., 3.)));
        assert_eq!(c.hypot3(&Coor3D::raw(1., 2., 3.)), 0.);
        assert_eq!(Coor3D::origin().hypot3(&Coor3D::raw(2., 3., 6.)), 7.);
        assert!(Coor3D::nan().0.iter().all(|e| e.is_nan()));
    }
}
