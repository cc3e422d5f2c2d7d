//! Small immutable value types for points in the plane, in 3-space and in 4-space.
//!
//! A `Coor2D` doubles as the representation of a complex number, with the
//! real part as the first and the imaginary part as the second element.
pub mod coor2d;
pub mod coor3d;
pub mod coor4d;
pub mod tuple;

pub use coor2d::Coor2D;
pub use coor3d::Coor3D;
pub use coor4d::Coor4D;

/// Uniform element access for the `CoorND` newtypes.
///
/// All accessors have default implementations, except the 3 methods
/// [`nth_unchecked()`](Self::nth_unchecked()),
/// [`set_nth_unchecked()`](Self::set_nth_unchecked) and
/// [`dim()`](Self::dim()),
/// which must be provided by the implementer.
///
/// When accessing dimensions outside of the domain of the tuple,
/// [NaN](f64::NAN) will be returned.
pub trait CoordinateTuple {
    /// Construct a new tuple, with all elements set to `fill`
    fn new(fill: f64) -> Self;

    /// Access the n'th (0-based) element. May panic if `n >= dim()`.
    fn nth_unchecked(&self, n: usize) -> f64;

    /// Replace the n'th (0-based) element with `value`. May panic if `n >= dim()`.
    fn set_nth_unchecked(&mut self, n: usize, value: f64);

    /// Native dimension of the tuple
    fn dim(&self) -> usize;

    /// Access the n'th (0-based) element. Returns NaN if `n >= dim()`.
    fn nth(&self, n: usize) -> f64 {
        if n < self.dim() {
            self.nth_unchecked(n)
        } else {
            f64::NAN
        }
    }

    /// First element
    fn x(&self) -> f64 {
        self.nth_unchecked(0)
    }

    /// Second element
    fn y(&self) -> f64 {
        self.nth(1)
    }

    /// Third element
    fn z(&self) -> f64 {
        self.nth(2)
    }

    /// Fourth element. Named `w`, as the pole coordinate of S³ ⊂ ℝ⁴
    fn w(&self) -> f64 {
        self.nth(3)
    }

    /// Fill all elements of `self` with `value`
    fn fill(&mut self, value: f64) {
        for n in 0..self.dim() {
            self.set_nth_unchecked(n, value);
        }
    }

    /// Scalar product
    fn dot(&self, other: &Self) -> f64
    where
        Self: Sized,
    {
        let mut res = 0.;
        for i in 0..self.dim() {
            res += self.nth_unchecked(i) * other.nth_unchecked(i);
        }
        res
    }

    /// Squared Euclidean norm
    fn length2(&self) -> f64
    where
        Self: Sized,
    {
        self.dot(self)
    }

    /// Euclidean norm
    fn length(&self) -> f64
    where
        Self: Sized,
    {
        self.length2().sqrt()
    }

    /// Multiply every element by `factor`
    #[must_use]
    fn scale(&self, factor: f64) -> Self
    where
        Self: Sized + Copy,
    {
        let mut res = *self;
        for i in 0..self.dim() {
            res.set_nth_unchecked(i, self.nth_unchecked(i) * factor);
        }
        res
    }

    /// True if no element is NaN or infinite
    fn is_finite(&self) -> bool {
        (0..self.dim()).all(|i| self.nth_unchecked(i).is_finite())
    }
}

macro_rules! coordinate_tuple {
    ($type:ident, $dim:expr) => {
        impl CoordinateTuple for $type {
            fn new(fill: f64) -> Self {
                $type([fill; $dim])
            }

            fn dim(&self) -> usize {
                $dim
            }

            fn nth_unchecked(&self, n: usize) -> f64 {
                self.0[n]
            }

            fn set_nth_unchecked(&mut self, n: usize, value: f64) {
                self.0[n] = value;
            }
        }
    };
}

coordinate_tuple!(Coor2D, 2);
coordinate_tuple!(Coor3D, 3);
coordinate_tuple!(Coor4D, 4);

// ----- T E S T S ---------------------------------------------------
