/// Generic 4D coordinate tuple. When representing a point of S³ ⊂ ℝ⁴
/// the elements are read as `(x, y, z, w)`
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor4D(pub [f64; 4]);

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor4D {
    /// A `Coor4D` from its four elements
    #[must_use]
    pub fn raw(first: f64, second: f64, third: f64, fourth: f64) -> Coor4D {
        Coor4D([first, second, third, fourth])
    }

    /// A `Coor4D` consisting of 4 `NaN`s
    #[must_use]
    pub fn nan() -> Coor4D {
        Coor4D([f64::NAN, f64::NAN, f64::NAN, f64::NAN])
    }

    /// A `Coor4D` consisting of 4 `0`s
    #[must_use]
    pub fn origin() -> Coor4D {
        Coor4D([0., 0., 0., 0.])
    }

    /// A `Coor4D` consisting of 4 `1`s
    #[must_use]
    pub fn ones() -> Coor4D {
        Coor4D([1., 1., 1., 1.])
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CoordinateTuple;

    #[test]
    fn coor4d() {
        let b = Coor4D::raw(7., 8., 9., 10.);
        let c = [b[0], b[1], b[2], b[3], f64::NAN, f64::NAN];
        assert_eq!(b[3], c[3]);
        assert_eq!(b.w(), 10.);
        assert_eq!(Coor4D::ones().scale(2.), Coor4D([2., 2., 2., 2.]));
    }
}
