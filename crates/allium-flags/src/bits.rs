//! Integer types usable as flag values.

use allium_core::Primitive;
use num_traits::PrimInt;

/// An integer type whose values can hold flag bits.
///
/// Blanket-implemented for every [`Primitive`] that is also a
/// [`PrimInt`], i.e. all built-in integers. Unsigned types are the natural
/// choice; with signed types the sign bit is an ordinary flag bit.
pub trait FlagBits: Primitive + PrimInt {
    /// Zero-based position of the lowest set bit.
    #[inline]
    fn bit_position(self) -> u32 {
        self.trailing_zeros()
    }
}

impl<T: Primitive + PrimInt> FlagBits for T {}
