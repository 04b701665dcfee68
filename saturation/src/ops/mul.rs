// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::native::Native;
use crate::ops::overflow_value;
use crate::wide::{Wide, WideMul};
use crate::width::{
    debug_check_signed, debug_check_unsigned, Bits, SignedBackerOf, Supported, UnsignedBackerOf,
    Width,
};

/// Computes `x * y` for unsigned `N`-bit values, returning `2^N - 1` if the product does not
/// fit in `N` bits.
///
/// ```
/// assert_eq!(saturation::mulu::<32>(13_862_387, 1_076_719_596), u32::MAX);
/// assert_eq!(saturation::mulu::<6>(7, 9), 63);
/// assert_eq!(saturation::mulu::<6>(7, 8), 56);
/// ```
#[inline]
pub fn mulu<const N: u32>(x: UnsignedBackerOf<N>, y: UnsignedBackerOf<N>) -> UnsignedBackerOf<N>
where
    Bits<N>: WideMul,
{
    let () = Supported::<N>::CHECK;
    debug_check_unsigned!("mulu", N, x, y);
    #[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
    {
        if let Some(res) = crate::fast::mulu::<N>(x, y) {
            return res;
        }
    }
    mulu_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn mulu_portable<const N: u32>(
    x: UnsignedBackerOf<N>,
    y: UnsignedBackerOf<N>,
) -> UnsignedBackerOf<N>
where
    Bits<N>: WideMul,
{
    let Wide { hi, lo } = <Bits<N> as WideMul>::mul_wide_unsigned(x, y);
    let zero = <UnsignedBackerOf<N> as Native>::ZERO;
    let saturate = <UnsignedBackerOf<N> as Native>::from_bool(hi != zero).wrapping_neg();
    (lo | saturate) & <Bits<N> as Width>::MASK
}

/// Computes `x * y` for signed `N`-bit values, returning the maximum or minimum `N`-bit value
/// if the product is too large or too small.
///
/// ```
/// assert_eq!(saturation::muls::<32>(3, -1_342_177_280), i32::MIN);
/// assert_eq!(saturation::muls::<33>(-65_536, -65_536), 4_294_967_295);
/// ```
#[inline]
pub fn muls<const N: u32>(x: SignedBackerOf<N>, y: SignedBackerOf<N>) -> SignedBackerOf<N>
where
    Bits<N>: WideMul,
{
    let () = Supported::<N>::CHECK;
    debug_check_signed!("muls", N, x, y);
    #[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
    {
        if let Some(res) = crate::fast::muls::<N>(x, y) {
            return res;
        }
    }
    muls_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn muls_portable<const N: u32>(
    x: SignedBackerOf<N>,
    y: SignedBackerOf<N>,
) -> SignedBackerOf<N>
where
    Bits<N>: WideMul,
{
    let Wide { hi, lo } = <Bits<N> as WideMul>::mul_wide_signed(x, y);
    // The product fits iff the high half is nothing but copies of the low half's sign bit.
    if hi != lo >> (N - 1) {
        let v = overflow_value::<N>((x ^ y).to_unsigned());
        let zero = <SignedBackerOf<N> as Native>::ZERO;
        debug_assert_eq!(v < zero, hi < zero);
        return v;
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_saturates_at_mask() {
        assert_eq!(mulu_portable::<4>(3, 5), 15);
        assert_eq!(mulu_portable::<4>(4, 4), 15);
        assert_eq!(mulu_portable::<4>(15, 0), 0);
        assert_eq!(mulu_portable::<17>(0x100, 0x1ff), 0x1_ff00);
        assert_eq!(mulu_portable::<17>(0x200, 0x100), 0x1_ffff);
        assert_eq!(mulu_portable::<32>(13_862_387, 1_076_719_596), u32::MAX);
        assert_eq!(mulu_portable::<33>(0x1_0000, 0x1_ffff), 0x1_ffff_0000);
        assert_eq!(mulu_portable::<33>(0x2_0000, 0x1_0000), 0x1_ffff_ffff);
        assert_eq!(mulu_portable::<64>(u64::MAX, 1), u64::MAX);
        assert_eq!(mulu_portable::<64>(1 << 32, 1 << 32), u64::MAX);
    }

    #[test]
    fn signed_saturates_at_limits() {
        assert_eq!(muls_portable::<4>(-8, -1), 7);
        assert_eq!(muls_portable::<4>(-8, 1), -8);
        assert_eq!(muls_portable::<4>(-4, 2), -8);
        assert_eq!(muls_portable::<4>(-3, 3), -8);
        assert_eq!(muls_portable::<4>(3, 3), 7);
        assert_eq!(muls_portable::<4>(-2, -3), 6);
        assert_eq!(muls_portable::<17>(256, -256), -65_536);
        assert_eq!(muls_portable::<17>(256, 256), 65_535);
        assert_eq!(muls_portable::<32>(3, -1_342_177_280), i32::MIN);
        assert_eq!(muls_portable::<48>(-(1 << 24), 1 << 23), -(1 << 47));
        assert_eq!(muls_portable::<48>(1 << 24, 1 << 23), (1 << 47) - 1);
        assert_eq!(muls_portable::<64>(i64::MIN, -1), i64::MAX);
        assert_eq!(muls_portable::<64>(i64::MIN, i64::MIN), i64::MAX);
        assert_eq!(muls_portable::<64>(i64::MAX, -1), -i64::MAX);
    }

    #[test]
    fn zero_never_saturates() {
        assert_eq!(muls_portable::<33>(0, -(1 << 32)), 0);
        assert_eq!(muls_portable::<64>(i64::MIN, 0), 0);
        assert_eq!(mulu_portable::<64>(0, u64::MAX), 0);
    }

    #[test]
    fn public_entry_points_agree() {
        assert_eq!(mulu::<64>(u64::MAX, 2), u64::MAX);
        assert_eq!(muls::<16>(-300, 300), i16::MIN);
        assert_eq!(muls::<16>(-200, 100), -20_000);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "mulu<24> x value out of range")]
    fn rejects_out_of_range_operand() {
        mulu::<24>(1 << 24, 1);
    }
}
