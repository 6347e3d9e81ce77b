use nalgebra::{Matrix3, Matrix3x4, Vector2, Vector3, Vector4};

use super::matrix::{Mat3, Mat3x4};
use super::scalar::Scalar;
use super::vector::{Vec2, Vec3, Vec4, Vector};

macro_rules! vector_interop {
    ($ours:ident, $theirs:ident) => {
        impl<T: Scalar> From<$theirs<T>> for $ours<T> {
            fn from(v: $theirs<T>) -> Self {
                Self::from_slice(v.as_slice())
            }
        }

        impl<T: Scalar> From<$ours<T>> for $theirs<T> {
            fn from(v: $ours<T>) -> Self {
                $theirs::from_column_slice(v.as_slice())
            }
        }
    };
}

macro_rules! matrix_interop {
    ($ours:ident, $theirs:ident) => {
        impl<T: Scalar> From<$theirs<T>> for $ours<T> {
            fn from(m: $theirs<T>) -> Self {
                Self::from_column_slice(m.as_slice())
            }
        }

        impl<T: Scalar> From<$ours<T>> for $theirs<T> {
            fn from(m: $ours<T>) -> Self {
                $theirs::from_column_slice(m.as_slice())
            }
        }
    };
}

vector_interop!(Vec2, Vector2);
vector_interop!(Vec3, Vector3);
vector_interop!(Vec4, Vector4);
matrix_interop!(Mat3, Matrix3);
matrix_interop!(Mat3x4, Matrix3x4);
