// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::native::Native;
use crate::nbit::Unsigned;
use crate::width::{
    debug_check_signed, debug_check_unsigned, Bits, SignedBackerOf, Supported, UnsignedBackerOf,
    Width,
};

/// Computes `x / y` for unsigned `N`-bit values, rounding towards zero.
///
/// Unsigned division cannot overflow; this exists for symmetry with [`divs`].
///
/// # Panics
///
/// Panics if `y` is zero.
#[inline]
pub fn divu<const N: u32>(x: UnsignedBackerOf<N>, y: UnsignedBackerOf<N>) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_unsigned!("divu", N, x, y);
    divu_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn divu_portable<const N: u32>(
    x: UnsignedBackerOf<N>,
    y: UnsignedBackerOf<N>,
) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    x / y
}

/// Computes `x / y` for signed `N`-bit values, rounding towards zero.
///
/// The only quotient that does not fit is `-2^(N-1) / -1`, which saturates to `2^(N-1) - 1`.
///
/// ```
/// assert_eq!(saturation::divs::<32>(i32::MIN, -1), i32::MAX);
/// assert_eq!(saturation::divs::<17>(-65_536, -1), 65_535);
/// assert_eq!(saturation::divs::<17>(-65_536, 2), -32_768);
/// ```
///
/// # Panics
///
/// Panics if `y` is zero.
#[inline]
pub fn divs<const N: u32>(x: SignedBackerOf<N>, y: SignedBackerOf<N>) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_signed!("divs", N, x, y);
    divs_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn divs_portable<const N: u32>(
    x: SignedBackerOf<N>,
    y: SignedBackerOf<N>,
) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    // Both terms are zero exactly when y == -1 and x == min. Nudging x up by one then gives
    // `(min + 1) / -1 == max` without ever dividing min by -1.
    let min = <Bits<N> as Width>::SLIMITS.min.to_unsigned();
    let one = <UnsignedBackerOf<N> as Native>::ONE;
    let y_plus_one = Unsigned::<N>::new(y.to_unsigned().wrapping_add(one));
    let x_minus_min = Unsigned::<N>::new(x.to_unsigned().wrapping_add(min));
    let bump = (y_plus_one | x_minus_min) == Unsigned::<N>::default();
    x.wrapping_add(<SignedBackerOf<N> as Native>::from_bool(bump)) / y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_truncates() {
        assert_eq!(divu_portable::<4>(15, 4), 3);
        assert_eq!(divu_portable::<4>(0, 15), 0);
        assert_eq!(divu_portable::<17>(0x1_ffff, 1), 0x1_ffff);
        assert_eq!(divu_portable::<64>(u64::MAX, 2), u64::MAX / 2);
    }

    #[test]
    fn signed_saturates_min_over_minus_one() {
        assert_eq!(divs_portable::<4>(-8, -1), 7);
        assert_eq!(divs_portable::<8>(i8::MIN, -1), i8::MAX);
        assert_eq!(divs_portable::<17>(-65_536, -1), 65_535);
        assert_eq!(divs_portable::<32>(i32::MIN, -1), i32::MAX);
        assert_eq!(divs_portable::<33>(-(1 << 32), -1), (1 << 32) - 1);
        assert_eq!(divs_portable::<64>(i64::MIN, -1), i64::MAX);
    }

    #[test]
    fn signed_rounds_towards_zero() {
        assert_eq!(divs_portable::<4>(-7, 2), -3);
        assert_eq!(divs_portable::<4>(7, -2), -3);
        assert_eq!(divs_portable::<4>(-8, 1), -8);
        assert_eq!(divs_portable::<4>(-8, 2), -4);
        assert_eq!(divs_portable::<4>(-7, -1), 7);
        assert_eq!(divs_portable::<17>(65_535, -1), -65_535);
        assert_eq!(divs_portable::<64>(i64::MIN, 1), i64::MIN);
        assert_eq!(divs_portable::<64>(i64::MIN + 1, -1), i64::MAX);
    }

    #[test]
    #[should_panic]
    fn unsigned_divide_by_zero_panics() {
        divu::<16>(1, 0);
    }

    #[test]
    #[should_panic]
    fn signed_divide_by_zero_panics() {
        divs::<24>(-1, 0);
    }
}
