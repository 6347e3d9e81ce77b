use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use num_traits::{Float, One, Zero};

use super::scalar::{Real, Scalar};
use crate::error::{GeometryError, LayoutError, LinalgError, Result};

/// Component-wise algebra shared by [`Vec2`], [`Vec3`] and [`Vec4`].
pub trait Vector: Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> {
    /// Element type.
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    /// Returns a vector with every component set to `value`.
    fn splat(value: Self::Scalar) -> Self;

    /// Flat view of the components in index order.
    fn as_slice(&self) -> &[Self::Scalar];

    /// Mutable flat view of the components in index order.
    fn as_mut_slice(&mut self) -> &mut [Self::Scalar];

    /// Returns the zero vector.
    #[must_use]
    fn zero() -> Self {
        Self::splat(<Self::Scalar as Zero>::zero())
    }

    /// Applies `f` to every component.
    #[must_use]
    fn map(self, f: impl Fn(Self::Scalar) -> Self::Scalar) -> Self {
        let mut out = self;
        for c in out.as_mut_slice() {
            *c = f(*c);
        }
        out
    }

    /// Combines `self` and `other` component by component.
    #[must_use]
    fn zip_map(self, other: Self, f: impl Fn(Self::Scalar, Self::Scalar) -> Self::Scalar) -> Self {
        let mut out = self;
        for (a, &b) in out.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        out
    }

    /// Returns component `index`, or an error when it is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::IndexOutOfRange`] when `index >= DIM`.
    fn try_get(&self, index: usize) -> Result<Self::Scalar> {
        self.as_slice().get(index).copied().ok_or_else(|| {
            LayoutError::IndexOutOfRange {
                index,
                len: Self::DIM,
            }
            .into()
        })
    }

    /// Sum of component-wise products, accumulated in index order.
    #[must_use]
    fn dot(&self, other: &Self) -> Self::Scalar {
        let a = self.as_slice();
        let b = other.as_slice();
        a.iter()
            .zip(b)
            .skip(1)
            .fold(a[0] * b[0], |acc, (&x, &y)| acc + x * y)
    }

    /// Multiplies every component by `s`.
    #[must_use]
    fn scale(&self, s: Self::Scalar) -> Self {
        self.map(|c| s * c)
    }

    #[must_use]
    fn length_squared(&self) -> Self::Scalar {
        self.dot(self)
    }

    #[must_use]
    fn distance_squared(&self, other: &Self) -> Self::Scalar {
        (*self - *other).length_squared()
    }

    /// Euclidean norm.
    #[must_use]
    fn length(&self) -> Self::Scalar
    where
        Self::Scalar: Real,
    {
        self.dot(self).sqrt()
    }

    /// Euclidean distance between `self` and `other`.
    #[must_use]
    fn distance(&self, other: &Self) -> Self::Scalar
    where
        Self::Scalar: Real,
    {
        (*self - *other).length()
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length vector produces NaN or infinite components; use
    /// [`Vector::try_normalize`] when a defined failure is needed.
    #[must_use]
    fn normalize(&self) -> Self
    where
        Self::Scalar: Real,
    {
        self.scale(<Self::Scalar as One>::one() / self.length())
    }

    /// Scales the vector to unit length, rejecting degenerate input.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the length is below
    /// [`Real::TOLERANCE`].
    fn try_normalize(&self) -> Result<Self>
    where
        Self::Scalar: Real,
    {
        let len = self.length();
        if len.is_nan() || len < <Self::Scalar as Real>::TOLERANCE {
            tracing::debug!(length = len.to_f64_lossy(), "refusing to normalize degenerate vector");
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self.scale(<Self::Scalar as One>::one() / len))
    }

    /// Component-wise minimum. A component of `self` wins only when it
    /// compares strictly less.
    #[must_use]
    fn component_min(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if a < b { a } else { b })
    }

    /// Component-wise maximum. A component of `self` wins only when it
    /// compares strictly greater.
    #[must_use]
    fn component_max(&self, other: &Self) -> Self {
        self.zip_map(*other, |a, b| if a > b { a } else { b })
    }

    /// Largest component.
    #[must_use]
    fn max_element(&self) -> Self::Scalar {
        let c = self.as_slice();
        let mut best = if c[0] > c[1] { c[0] } else { c[1] };
        for &v in &c[2..] {
            if v > best {
                best = v;
            }
        }
        best
    }

    /// `true` when every component of `self` is `<=` its counterpart.
    #[must_use]
    fn all_le(&self, other: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a <= b)
    }

    /// `true` when at least one component of `self` is `<` its counterpart.
    #[must_use]
    fn any_lt(&self, other: &Self) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .any(|(a, b)| a < b)
    }

    /// Copies the components into the front of `dst` and returns the
    /// remaining tail.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds fewer than `DIM` elements.
    fn write_to<'a>(&self, dst: &'a mut [Self::Scalar]) -> &'a mut [Self::Scalar] {
        let (head, tail) = dst.split_at_mut(Self::DIM);
        head.copy_from_slice(self.as_slice());
        tail
    }

    /// Checked form of [`Vector::write_to`].
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::BufferTooSmall`] if `dst` holds fewer than
    /// `DIM` elements; `dst` is left untouched in that case.
    fn try_write_to<'a>(&self, dst: &'a mut [Self::Scalar]) -> Result<&'a mut [Self::Scalar]> {
        if dst.len() < Self::DIM {
            tracing::debug!(
                required = Self::DIM,
                available = dst.len(),
                "destination buffer too small"
            );
            return Err(LayoutError::BufferTooSmall {
                required: Self::DIM,
                available: dst.len(),
            }
            .into());
        }
        Ok(self.write_to(dst))
    }
}

// `s * v` for the concrete element types; a blanket `impl<T> Mul<Vec<T>> for T`
// is not expressible for foreign `T`.
macro_rules! left_scalar_mul {
    ($name:ident; $($t:ty),+) => {
        $(
            impl Mul<$name<$t>> for $t {
                type Output = $name<$t>;

                fn mul(self, rhs: $name<$t>) -> $name<$t> {
                    rhs.scale(self)
                }
            }
        )+
    };
}

macro_rules! vector_type {
    (
        $(#[$meta:meta])*
        $name:ident, $dim:literal, [$($field:ident, $setter:ident => $idx:literal),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        pub struct $name<T> {
            data: [T; $dim],
        }

        impl<T: Scalar> $name<T> {
            /// Creates a vector from its components.
            #[must_use]
            pub const fn new($($field: T),+) -> Self {
                Self { data: [$($field),+] }
            }

            /// Returns a vector with every component set to `value`.
            #[must_use]
            pub fn splat(value: T) -> Self {
                Self { data: [value; $dim] }
            }

            /// Reads the first components of `p` in index order.
            ///
            /// # Panics
            ///
            /// Panics if `p` is shorter than the vector.
            #[must_use]
            pub fn from_slice(p: &[T]) -> Self {
                Self { data: [$(p[$idx]),+] }
            }

            /// Wraps an array without copying its layout.
            #[must_use]
            pub const fn from_array(data: [T; $dim]) -> Self {
                Self { data }
            }

            #[must_use]
            pub fn to_array(self) -> [T; $dim] {
                self.data
            }

            #[must_use]
            pub fn as_array(&self) -> &[T; $dim] {
                &self.data
            }

            $(
                #[must_use]
                pub fn $field(&self) -> T {
                    self.data[$idx]
                }

                pub fn $setter(&mut self, value: T) {
                    self.data[$idx] = value;
                }
            )+
        }

        impl<T: Scalar> Vector for $name<T> {
            type Scalar = T;
            const DIM: usize = $dim;

            fn splat(value: T) -> Self {
                Self { data: [value; $dim] }
            }

            fn as_slice(&self) -> &[T] {
                &self.data
            }

            fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.data
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

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { data: [$(self.data[$idx] + rhs.data[$idx]),+] }
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { data: [$(self.data[$idx] - rhs.data[$idx]),+] }
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self { data: [$(-self.data[$idx]),+] }
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self { data: [$(self.data[$idx] * rhs),+] }
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                Self { data: [$(self.data[$idx] / rhs),+] }
            }
        }

        impl<T> From<[T; $dim]> for $name<T> {
            fn from(data: [T; $dim]) -> Self {
                Self { data }
            }
        }

        impl<T> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                v.data
            }
        }

        impl<T> AsRef<[T]> for $name<T> {
            fn as_ref(&self) -> &[T] {
                &self.data
            }
        }

        impl<T: Scalar> TryFrom<&[T]> for $name<T> {
            type Error = LinalgError;

            fn try_from(p: &[T]) -> Result<Self> {
                if p.len() < $dim {
                    return Err(LayoutError::BufferTooSmall {
                        required: $dim,
                        available: p.len(),
                    }
                    .into());
                }
                Ok(Self::from_slice(p))
            }
        }

        left_scalar_mul!($name; f32, f64, i32, u32);
    };
}

vector_type!(
    /// 2D vector.
    Vec2, 2, [x, set_x => 0, y, set_y => 1]
);

vector_type!(
    /// 3D vector.
    Vec3, 3, [x, set_x => 0, y, set_y => 1, z, set_z => 2]
);

vector_type!(
    /// 4D vector.
    Vec4, 4, [x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3]
);

impl<T: Scalar> Vec2<T> {
    /// Appends a `z` component.
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], z)
    }
}

impl<T: Scalar> Vec3<T> {
    /// Right-handed cross product.
    ///
    /// # Panics
    ///
    /// For unsigned elements, panics in debug builds when a term underflows,
    /// like the element type's own subtraction.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drops the `z` component.
    #[must_use]
    pub fn xy(self) -> Vec2<T> {
        Vec2::new(self.data[0], self.data[1])
    }

    /// Appends a `w` component.
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl<T: Scalar> Vec4<T> {
    #[must_use]
    pub fn xy(self) -> Vec2<T> {
        Vec2::new(self.data[0], self.data[1])
    }

    #[must_use]
    pub fn xyz(self) -> Vec3<T> {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }
}
