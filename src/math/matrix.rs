use core::ops::{Index, IndexMut, Mul};

use super::scalar::{Real, Scalar};
use super::vector::{Vec3, Vector};
use crate::error::{GeometryError, LayoutError, LinalgError, Result};

// Accessors shared by both column-major shapes.
macro_rules! column_major_common {
    ($name:ident, $cols:literal) => {
        impl<T: Scalar> $name<T> {
            /// Reads the first elements of `p` as column-major storage.
            ///
            /// # Panics
            ///
            /// Panics if `p` holds fewer than `3 * COLS` elements.
            #[must_use]
            pub fn from_column_slice(p: &[T]) -> Self {
                let mut data = [T::zero(); 3 * $cols];
                data.copy_from_slice(&p[..3 * $cols]);
                Self { data }
            }

            #[must_use]
            pub const fn from_column_array(data: [T; 3 * $cols]) -> Self {
                Self { data }
            }

            #[must_use]
            pub fn to_column_array(self) -> [T; 3 * $cols] {
                self.data
            }

            /// Flat column-major view.
            #[must_use]
            pub fn as_slice(&self) -> &[T] {
                &self.data
            }

            #[must_use]
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.data
            }

            /// Element at `row`, `col`.
            #[must_use]
            pub fn get(&self, row: usize, col: usize) -> T {
                self.data[col * 3 + row]
            }

            pub fn set(&mut self, row: usize, col: usize, value: T) {
                self.data[col * 3 + row] = value;
            }

            /// Column `c` as a vector.
            #[must_use]
            pub fn col(&self, c: usize) -> Vec3<T> {
                Vec3::from_slice(&self.data[c * 3..c * 3 + 3])
            }

            pub fn set_col(&mut self, c: usize, v: Vec3<T>) {
                self.data[c * 3..c * 3 + 3].copy_from_slice(v.as_slice());
            }

            /// Row `r` of the leading 3x3 block.
            #[must_use]
            pub fn row(&self, r: usize) -> Vec3<T> {
                Vec3::new(self.data[r], self.data[3 + r], self.data[6 + r])
            }

            /// Applies the leading 3x3 block to `x`.
            fn linear_apply(&self, x: &Vec3<T>) -> Vec3<T> {
                let a = &self.data;
                Vec3::from_array(core::array::from_fn(|k| {
                    a[k] * x[0] + a[3 + k] * x[1] + a[6 + k] * x[2]
                }))
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.data[index]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.data[index]
            }
        }

        /// `m[(row, col)]`.
        impl<T> Index<(usize, usize)> for $name<T> {
            type Output = T;

            fn index(&self, (row, col): (usize, usize)) -> &T {
                &self.data[col * 3 + row]
            }
        }

        impl<T> IndexMut<(usize, usize)> for $name<T> {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                &mut self.data[col * 3 + row]
            }
        }

        impl<T> From<[T; 3 * $cols]> for $name<T> {
            fn from(data: [T; 3 * $cols]) -> Self {
                Self { data }
            }
        }

        impl<T: Scalar> TryFrom<&[T]> for $name<T> {
            type Error = LinalgError;

            fn try_from(p: &[T]) -> Result<Self> {
                if p.len() < 3 * $cols {
                    return Err(LayoutError::BufferTooSmall {
                        required: 3 * $cols,
                        available: p.len(),
                    }
                    .into());
                }
                Ok(Self::from_column_slice(p))
            }
        }
    };
}

/// 3x3 matrix, column-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Mat3<T> {
    data: [T; 9],
}

column_major_common!(Mat3, 3);

impl<T: Scalar> Mat3<T> {
    /// Builds a matrix from its elements in row-major reading order
    /// (`mRC` is row `R`, column `C`).
    #[allow(clippy::too_many_arguments, clippy::similar_names)]
    #[must_use]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
    ) -> Self {
        Self {
            data: [m00, m10, m20, m01, m11, m21, m02, m12, m22],
        }
    }

    #[must_use]
    pub fn from_rows(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::new(
            r0[0], r0[1], r0[2], //
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2],
        )
    }

    #[must_use]
    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self {
            data: [
                c0[0], c0[1], c0[2], //
                c1[0], c1[1], c1[2], //
                c2[0], c2[1], c2[2],
            ],
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    #[must_use]
    pub fn zero() -> Self {
        Self {
            data: [T::zero(); 9],
        }
    }

    #[must_use]
    pub fn cols(&self) -> [Vec3<T>; 3] {
        [self.col(0), self.col(1), self.col(2)]
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Matrix-vector product `A x`.
    #[must_use]
    pub fn mul_vec(&self, x: &Vec3<T>) -> Vec3<T> {
        self.linear_apply(x)
    }

    /// Matrix product `A B`, expanded term by term.
    #[allow(clippy::similar_names)]
    #[must_use]
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let [a00, a10, a20, a01, a11, a21, a02, a12, a22] = self.data;
        let [b00, b10, b20, b01, b11, b21, b02, b12, b22] = rhs.data;

        Self::new(
            a00 * b00 + a01 * b10 + a02 * b20,
            a00 * b01 + a01 * b11 + a02 * b21,
            a00 * b02 + a01 * b12 + a02 * b22,
            a10 * b00 + a11 * b10 + a12 * b20,
            a10 * b01 + a11 * b11 + a12 * b21,
            a10 * b02 + a11 * b12 + a12 * b22,
            a20 * b00 + a21 * b10 + a22 * b20,
            a20 * b01 + a21 * b11 + a22 * b21,
            a20 * b02 + a21 * b12 + a22 * b22,
        )
    }

    /// Rows of the adjugate (`c1×c2`, `c2×c0`, `c0×c1`) and the determinant.
    fn adjugate_rows(&self) -> ([Vec3<T>; 3], T) {
        let [c0, c1, c2] = self.cols();
        let r0 = c1.cross(&c2);
        let r1 = c2.cross(&c0);
        let r2 = c0.cross(&c1);
        let det = r2.dot(&c2);
        ([r0, r1, r2], det)
    }

    #[must_use]
    pub fn determinant(&self) -> T {
        self.adjugate_rows().1
    }
}

impl<T: Real> Mat3<T> {
    /// Closed-form inverse via the adjugate.
    ///
    /// Singular input is not detected: the result holds infinities or NaN.
    /// See [`Mat3::try_inverse`] for the checked form.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let ([r0, r1, r2], det) = self.adjugate_rows();
        let inv_det = T::one() / det;
        Self::from_rows(r0.scale(inv_det), r1.scale(inv_det), r2.scale(inv_det))
    }

    /// Inverse that rejects (near-)singular matrices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SingularMatrix`] if `|det|` is below
    /// [`Real::TOLERANCE`] or not a number.
    pub fn try_inverse(&self) -> Result<Self> {
        let ([r0, r1, r2], det) = self.adjugate_rows();
        if det.is_nan() || det.abs() < T::TOLERANCE {
            tracing::debug!(determinant = det.to_f64_lossy(), "matrix is not invertible");
            return Err(GeometryError::SingularMatrix {
                determinant: det.to_f64_lossy(),
            }
            .into());
        }
        let inv_det = T::one() / det;
        Ok(Self::from_rows(
            r0.scale(inv_det),
            r1.scale(inv_det),
            r2.scale(inv_det),
        ))
    }

    /// Largest column length.
    ///
    /// Exact for a rotation times a uniform scale; for anything else it is
    /// only a heuristic, not a singular value.
    #[must_use]
    pub fn get_scale(&self) -> T {
        let sx = self.col(0).length();
        let sy = self.col(1).length();
        let sz = self.col(2).length();
        let t = if sx > sy { sx } else { sy };
        if sz > t {
            sz
        } else {
            t
        }
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.mul_vec(&rhs)
    }
}

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

/// Leading 3x3 block (drops the translation).
impl<T: Scalar> From<Mat3x4<T>> for Mat3<T> {
    fn from(m: Mat3x4<T>) -> Self {
        m.linear()
    }
}

/// 3x4 affine matrix, column-major. Columns 0..3 are the linear part,
/// column 3 the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Mat3x4<T> {
    data: [T; 12],
}

column_major_common!(Mat3x4, 4);

impl<T: Scalar> Mat3x4<T> {
    #[must_use]
    pub fn from_cols(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>, c3: Vec3<T>) -> Self {
        let mut m = Self {
            data: [T::zero(); 12],
        };
        for (c, v) in [c0, c1, c2, c3].into_iter().enumerate() {
            m.set_col(c, v);
        }
        m
    }

    #[must_use]
    pub fn from_linear_translation(linear: &Mat3<T>, translation: Vec3<T>) -> Self {
        let [c0, c1, c2] = linear.cols();
        Self::from_cols(c0, c1, c2, translation)
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::from_linear_translation(&Mat3::identity(), Vec3::splat(T::zero()))
    }

    /// The 3x3 linear part.
    #[must_use]
    pub fn linear(&self) -> Mat3<T> {
        Mat3::from_column_slice(&self.data[..9])
    }

    #[must_use]
    pub fn translation(&self) -> Vec3<T> {
        self.col(3)
    }

    /// Applies the affine map to a point: `A x + t`.
    #[must_use]
    pub fn transform_point(&self, x: &Vec3<T>) -> Vec3<T> {
        let a = &self.data;
        Vec3::from_array(core::array::from_fn(|k| {
            a[k] * x[0] + a[3 + k] * x[1] + a[6 + k] * x[2] + a[9 + k]
        }))
    }

    /// Applies only the linear part, for directions.
    #[must_use]
    pub fn transform_vector(&self, x: &Vec3<T>) -> Vec3<T> {
        self.linear_apply(x)
    }
}

impl<T: Real> Mat3x4<T> {
    /// [`Mat3::get_scale`] of the linear part; translation is ignored.
    #[must_use]
    pub fn get_scale(&self) -> T {
        self.linear().get_scale()
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3x4<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.transform_point(&rhs)
    }
}
