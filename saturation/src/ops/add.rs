// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::native::Native;
use crate::nbit::Unsigned;
use crate::ops::overflow_value;
use crate::width::{
    debug_check_signed, debug_check_unsigned, Bits, SignedBackerOf, Supported, UnsignedBackerOf,
    Width,
};

/// Adds two unsigned `N`-bit values, returning `2^N - 1` if the sum does not fit in `N` bits.
///
/// ```
/// assert_eq!(saturation::addu::<4>(9, 5), 14);
/// assert_eq!(saturation::addu::<4>(9, 7), 15);
/// assert_eq!(saturation::addu::<17>(0x1_0000, 0x1_0000), 0x1_ffff);
/// ```
#[inline]
pub fn addu<const N: u32>(x: UnsignedBackerOf<N>, y: UnsignedBackerOf<N>) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_unsigned!("addu", N, x, y);
    #[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
    {
        if let Some(res) = crate::fast::addu::<N>(x, y) {
            return res;
        }
    }
    addu_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn addu_portable<const N: u32>(
    x: UnsignedBackerOf<N>,
    y: UnsignedBackerOf<N>,
) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    let max = <Bits<N> as Width>::MASK;
    let res = x.wrapping_add(y);
    // Wrapped around the container, or carried out of bit `N - 1`.
    let overflow = <UnsignedBackerOf<N> as Native>::from_bool(res < x || res > max);
    (res | overflow.wrapping_neg()) & max
}

/// Adds two signed `N`-bit values, returning the maximum or minimum `N`-bit value if the sum
/// is too large or too small.
///
/// ```
/// assert_eq!(saturation::adds::<8>(100, 27), 127);
/// assert_eq!(saturation::adds::<8>(100, 28), 127);
/// assert_eq!(saturation::adds::<24>(-8_000_000, -8_000_000), -8_388_608);
/// ```
#[inline]
pub fn adds<const N: u32>(x: SignedBackerOf<N>, y: SignedBackerOf<N>) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_signed!("adds", N, x, y);
    #[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
    {
        if let Some(res) = crate::fast::adds::<N>(x, y) {
            return res;
        }
    }
    adds_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn adds_portable<const N: u32>(
    x: SignedBackerOf<N>,
    y: SignedBackerOf<N>,
) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let ux = Unsigned::<N>::new(x.to_unsigned());
    let uy = Unsigned::<N>::new(y.to_unsigned());
    let res = ux + uy;

    let v = overflow_value::<N>(x.to_unsigned());
    let limits = <Bits<N> as Width>::SLIMITS;
    debug_assert_eq!(
        v,
        if x < <SignedBackerOf<N> as Native>::ZERO {
            limits.min
        } else {
            limits.max
        }
    );

    // Overflow iff x and y share a sign (the sign of `v`) and the sign of res differs from it.
    if !((Unsigned::<N>::new(v.to_unsigned()) ^ uy) | !(uy ^ res)).sign_bit() {
        return v;
    }
    res.to_signed().get()
}
