// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Double-width products of `N`-bit values.
//!
//! Widths up to [`NARROW_MULTIPLY_MAX`] multiply in a native integer of twice the container
//! size. Wider values are split into half-words and multiplied with [`long_multiply`], which
//! only ever needs arithmetic at the container width.

use crate::native::Native;
use crate::nbit::NBit;
use crate::width::{Bits, Width};

/// The largest width multiplied through a native double-width integer.
pub const NARROW_MULTIPLY_MAX: u32 = 32;

/// A `2N`-bit result split into two `N`-bit halves.
///
/// `lo` holds the low `N` bits, extended to the container width the same way an
/// [`NBit`] value is. `hi` holds the high `N` bits and carries the sign of the whole result
/// for signed values, so `hi * 2^N + (lo mod 2^N)` is the exact product.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wide<T> {
    pub hi: T,
    pub lo: T,
}

/// Multiplies two container-width values, returning every bit of the product.
///
/// Schoolbook multiplication on half-words: each operand is split at `T::BITS / 2`, the four
/// partial products are formed and the carries are propagated between the halves. For signed
/// `T` the high half-words come from an arithmetic shift so that negative operands contribute
/// negative partial products.
pub fn long_multiply<T: Native>(u: T, v: T) -> Wide<T> {
    let half = T::BITS / 2;
    let half_mask = (T::Unsigned::ONE << half).wrapping_sub(T::Unsigned::ONE);

    let u_hi = (u >> half).to_unsigned();
    let u_lo = u.to_unsigned() & half_mask;
    let v_hi = (v >> half).to_unsigned();
    let v_lo = v.to_unsigned() & half_mask;

    let lo_lo = u_lo.wrapping_mul(v_lo);
    let lo_lo_mod = lo_lo & half_mask;
    let lo_lo_over = lo_lo >> half;

    let hi_lo = u_hi.wrapping_mul(v_lo).wrapping_add(lo_lo_over);
    let hi_lo_mod = hi_lo & half_mask;
    let hi_lo_over = (T::from_unsigned(hi_lo) >> half).to_unsigned();

    let lo_hi = u_lo.wrapping_mul(v_hi).wrapping_add(hi_lo_mod);
    let lo_hi_over = (T::from_unsigned(lo_hi) >> half).to_unsigned();

    let hi = u_hi
        .wrapping_mul(v_hi)
        .wrapping_add(hi_lo_over)
        .wrapping_add(lo_hi_over);
    let lo = (lo_hi << half).wrapping_add(lo_lo_mod);

    Wide {
        hi: T::from_unsigned(hi),
        lo: T::from_unsigned(lo),
    }
}

/// Moves the split point of a full-container product from the container boundary to bit `N`.
///
/// `long_multiply` spends every bit of both words; afterwards `hi` holds the bits from `N`
/// upwards and `lo` holds the low `N` bits, extended.
fn adjust<const N: u32, T: Native>(wide: Wide<T>) -> Wide<T> {
    let shift = T::BITS - N;
    if shift == 0 {
        return wide;
    }
    let hi = wide.hi.to_unsigned();
    let lo = wide.lo.to_unsigned();

    let res = Wide {
        hi: T::from_unsigned((hi << shift) | (lo >> N)),
        lo: NBit::<N, T>::new(T::from_unsigned(lo)).get(),
    };
    debug_assert!(
        res.hi >> N == T::ZERO || (T::SIGNED && res.hi >> N == !T::ZERO),
        "Wide multiply high half out of range for {} bits",
        N
    );
    res
}

/// Full double-width multiplication at width `N`.
pub trait WideMul: Width {
    fn mul_wide_unsigned(x: Self::Unsigned, y: Self::Unsigned) -> Wide<Self::Unsigned>;
    fn mul_wide_signed(x: Self::Signed, y: Self::Signed) -> Wide<Self::Signed>;
}

macro_rules! narrow_wide_mul_impl {
    ($uty:ty, $sty:ty, $udbl:ty, $sdbl:ty; $($n:literal)+) => {
        $(
            impl WideMul for Bits<$n> {
                #[inline(always)]
                fn mul_wide_unsigned(x: $uty, y: $uty) -> Wide<$uty> {
                    let res = <$udbl>::from(x) * <$udbl>::from(y);
                    Wide {
                        hi: (res >> $n) as $uty,
                        lo: NBit::<$n, $uty>::new(res as $uty).get(),
                    }
                }

                #[inline(always)]
                fn mul_wide_signed(x: $sty, y: $sty) -> Wide<$sty> {
                    let res = <$sdbl>::from(x) * <$sdbl>::from(y);
                    Wide {
                        hi: (res >> $n) as $sty,
                        lo: NBit::<$n, $sty>::new(res as $sty).get(),
                    }
                }
            }
        )+
    };
}

macro_rules! long_wide_mul_impl {
    ($uty:ty, $sty:ty; $($n:literal)+) => {
        $(
            const _: () = assert!($n > NARROW_MULTIPLY_MAX);

            impl WideMul for Bits<$n> {
                #[inline(always)]
                fn mul_wide_unsigned(x: $uty, y: $uty) -> Wide<$uty> {
                    adjust::<$n, $uty>(long_multiply(x, y))
                }

                #[inline(always)]
                fn mul_wide_signed(x: $sty, y: $sty) -> Wide<$sty> {
                    adjust::<$n, $sty>(long_multiply(x, y))
                }
            }
        )+
    };
}

narrow_wide_mul_impl!(u8, i8, u16, i16; 1 2 3 4 5 6 7 8);
narrow_wide_mul_impl!(u16, i16, u32, i32; 9 10 11 12 13 14 15 16);
narrow_wide_mul_impl!(u32, i32, u64, i64;
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
long_wide_mul_impl!(u64, i64;
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64);
