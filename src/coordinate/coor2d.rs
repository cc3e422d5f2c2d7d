/// Generic 2D coordinate tuple. Also the representation of a complex
/// number `re + i·im` as `Coor2D([re, im])`
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor2D(pub [f64; 2]);

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor2D {
    /// A `Coor2D` from its two elements
    #[must_use]
    pub fn raw(first: f64, second: f64) -> Coor2D {
        Coor2D([first, second])
    }

    /// A `Coor2D` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> Coor2D {
        Coor2D([f64::NAN, f64::NAN])
    }

    /// A `Coor2D` consisting of 2 `0`s
    #[must_use]
    pub fn origin() -> Coor2D {
        Coor2D([0., 0.])
    }

    /// A `Coor2D` consisting of 2 `1`s
    #[must_use]
    pub fn ones() -> Coor2D {
        Coor2D([1., 1.])
    }
}

impl From<(f64, f64)> for Coor2D {
    fn from(xy: (f64, f64)) -> Self {
        Coor2D([xy.0, xy.1])
    }
}

// ----- T E S T S ---------------------------------------------------
