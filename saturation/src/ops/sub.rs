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

/// Computes `x - y` for unsigned `N`-bit values, returning `0` if `y > x`.
///
/// ```
/// assert_eq!(saturation::subu::<12>(100, 1), 99);
/// assert_eq!(saturation::subu::<12>(1, 100), 0);
/// ```
#[inline]
pub fn subu<const N: u32>(x: UnsignedBackerOf<N>, y: UnsignedBackerOf<N>) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_unsigned!("subu", N, x, y);
    #[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
    {
        if let Some(res) = crate::fast::subu::<N>(x, y) {
            return res;
        }
    }
    subu_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn subu_portable<const N: u32>(
    x: UnsignedBackerOf<N>,
    y: UnsignedBackerOf<N>,
) -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    let res = x.wrapping_sub(y);
    let keep = <UnsignedBackerOf<N> as Native>::from_bool(res <= x).wrapping_neg();
    res & keep & <Bits<N> as Width>::MASK
}

/// Computes `x - y` for signed `N`-bit values, returning the maximum or minimum `N`-bit value
/// if the difference is too large or too small.
///
/// ```
/// assert_eq!(saturation::subs::<32>(i32::MIN, 1), i32::MIN);
/// assert_eq!(saturation::subs::<5>(10, -10), 15);
/// ```
#[inline]
pub fn subs<const N: u32>(x: SignedBackerOf<N>, y: SignedBackerOf<N>) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let () = Supported::<N>::CHECK;
    debug_check_signed!("subs", N, x, y);
    subs_portable::<N>(x, y)
}

#[inline(always)]
pub(crate) fn subs_portable<const N: u32>(
    x: SignedBackerOf<N>,
    y: SignedBackerOf<N>,
) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let ux = Unsigned::<N>::new(x.to_unsigned());
    let uy = Unsigned::<N>::new(y.to_unsigned());
    let res = ux - uy;

    // Overflow iff x and y differ in sign and the sign of res differs from x.
    if ((ux ^ uy) & (ux ^ res)).sign_bit() {
        return overflow_value::<N>(ux.get());
    }
    res.to_signed().get()
}
