use super::*;

// ---- Indexing for the primary CoorND types ----

use std::ops::{Index, IndexMut};

macro_rules! coord_indexing {
    ($type:ty) => {
        impl Index<usize> for $type {
            type Output = f64;
            fn index(&self, i: usize) -> &Self::Output {
                &self.0[i]
            }
        }

        impl IndexMut<usize> for $type {
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                &mut self.0[i]
            }
        }
    };
}

coord_indexing!(Coor2D);
coord_indexing!(Coor3D);
coord_indexing!(Coor4D);

// ---- Vector space operators for the primary CoorND types ----

use std::ops::{Add, Div, Mul, Neg, Sub};

// Generate the elementwise operators Add, Sub, Mul, Div for $type
macro_rules! coord_operator {
    ($type:ident, $othertype:ty, $op:ident, $symbol:tt, $function:ident) => {
        impl $op<$othertype> for $type {
            type Output = Self;
            fn $function(self, other: $othertype) -> Self {
                let mut res = self;
                for (r, o) in res.0.iter_mut().zip(other.0.iter()) {
                    *r = *r $symbol *o;
                }
                res
            }
        }
    };
}

// Generate the scalar broadcast operators Add, Sub, Mul, Div for $type
macro_rules! scalar_operator {
    ($type:ident, $op:ident, $symbol:tt, $function:ident) => {
        impl $op<f64> for $type {
            type Output = Self;
            fn $function(self, other: f64) -> Self {
                let mut res = self;
                for r in res.0.iter_mut() {
                    *r = *r $symbol other;
                }
                res
            }
        }
    };
}

macro_rules! all_coord_operators {
    ($type:ident) => {
        coord_operator!($type, $type, Add, +, add);
        coord_operator!($type, $type, Sub, -, sub);
        coord_operator!($type, $type, Mul, *, mul);
        coord_operator!($type, $type, Div, /, div);
        coord_operator!($type, &$type, Add, +, add);
        coord_operator!($type, &$type, Sub, -, sub);
        coord_operator!($type, &$type, Mul, *, mul);
        coord_operator!($type, &$type, Div, /, div);

        scalar_operator!($type, Add, +, add);
        scalar_operator!($type, Sub, -, sub);
        scalar_operator!($type, Mul, *, mul);
        scalar_operator!($type, Div, /, div);

        // Scalar from the left: `rho * z`
        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, other: $type) -> $type {
                other * self
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self {
                self * -1.
            }
        }
    };
}

all_coord_operators!(Coor2D);
all_coord_operators!(Coor3D);
all_coord_operators!(Coor4D);

// ----- T E S T S ---------------------------------------------------
