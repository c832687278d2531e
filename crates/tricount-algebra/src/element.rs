//! Matrix element types
//!
//! The value domain of an adjacency matrix is a small unsigned integer.
//! Arithmetic used by semirings and monoids wraps on overflow.

use std::fmt;

/// Runtime tag for the value type stored in a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    U8,
    U16,
    U32,
    U64,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::U8 => "uint8",
            ValueType::U16 => "uint16",
            ValueType::U32 => "uint32",
            ValueType::U64 => "uint64",
        };
        write!(f, "{name}")
    }
}

/// Types that can be stored as matrix values
pub trait MatrixElement:
    Copy + Send + Sync + PartialEq + PartialOrd + fmt::Debug + 'static
{
    const VALUE_TYPE: ValueType;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn wrapping_add(self, other: Self) -> Self;

    fn wrapping_mul(self, other: Self) -> Self;
}

macro_rules! impl_matrix_element {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl MatrixElement for $t {
                const VALUE_TYPE: ValueType = ValueType::$tag;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    <$t>::wrapping_add(self, other)
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    <$t>::wrapping_mul(self, other)
                }
            }
        )*
    };
}

impl_matrix_element!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
