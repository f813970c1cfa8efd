//! Underlying value types and the auto-assignment discipline.

use std::fmt;
use std::hash::Hash;

/// The flavor of a set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SetKind {
    /// Unique values, no composition. Auto values count 1, 2, 3, ...
    Plain,
    /// Single-bit values, composable by union. Auto values count 1, 2, 4, ...
    Flag,
}

impl SetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Flag => "flag",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type usable as the underlying value of a set member.
///
/// Values must be hashable and totally ordered. The auto sequence is optional:
/// types without one (strings, chars, booleans) return `None` from
/// [`Primitive::auto_start`] and the builder rejects auto declarations.
pub trait Primitive: Clone + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    /// First auto value of a set of the given kind.
    fn auto_start(kind: SetKind) -> Option<Self>;

    /// Next auto value after `self`, the watermark of the values declared so
    /// far (see [`Primitive::watermark`]).
    ///
    /// Plain sets continue at `self + 1`; flag sets continue at the power of
    /// two just above the highest set bit of `self`. `None` on overflow.
    fn auto_after(&self, kind: SetKind) -> Option<Self>;

    /// Fold a newly declared value into the auto watermark `self`.
    ///
    /// The default keeps the larger value. Integer flag sets instead keep the
    /// union of occupied bits, so a sign bit counts as the highest bit.
    fn watermark(&self, declared: &Self, _kind: SetKind) -> Self {
        if declared > self {
            declared.clone()
        } else {
            self.clone()
        }
    }

    /// Whether the value has exactly one bit set.
    fn is_single_bit(&self) -> bool {
        false
    }
}

macro_rules! impl_integer_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            #[inline]
            fn auto_start(_kind: SetKind) -> Option<Self> {
                Some(1)
            }

            fn auto_after(&self, kind: SetKind) -> Option<Self> {
                match kind {
                    SetKind::Plain => self.checked_add(1),
                    SetKind::Flag => {
                        let width = <$ty>::BITS - self.leading_zeros();
                        (1 as $ty).checked_shl(width)
                    }
                }
            }

            fn watermark(&self, declared: &Self, kind: SetKind) -> Self {
                match kind {
                    SetKind::Plain => (*self).max(*declared),
                    SetKind::Flag => *self | *declared,
                }
            }

            #[inline]
            fn is_single_bit(&self) -> bool {
                self.count_ones() == 1
            }
        }
    )*};
}

impl_integer_primitive!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

macro_rules! impl_opaque_primitive {
    ($($ty:ty),* $(,)?) => {$(
        impl Primitive for $ty {
            fn auto_start(_kind: SetKind) -> Option<Self> {
                None
            }

            fn auto_after(&self, _kind: SetKind) -> Option<Self> {
                None
            }
        }
    )*};
}

impl_opaque_primitive!(bool, char, String, &'static str);

#[cfg(test)]
#[path = "../tests/primitive_tests.rs"]
mod tests;
