// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! A value held in exactly `N` bits of a wider native container.
//!
//! Storing always truncates to the low `N` bits and then sign-extends (signed containers) or
//! zero-extends (unsigned containers) from bit `N - 1`, the same as assigning to an `N`-bit
//! hardware register. Arithmetic written once in terms of the container therefore gives `N`-bit
//! answers for widths such as 17 or 24 without masking at every step.

use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

use crate::native::Native;
use crate::width::{SignedBackerOf, UnsignedBackerOf};

#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NBit<const N: u32, T>(T);

/// Unsigned integer type representing `N` bits.
pub type Unsigned<const N: u32> = NBit<N, UnsignedBackerOf<N>>;
/// Signed integer type representing `N` bits.
pub type Signed<const N: u32> = NBit<N, SignedBackerOf<N>>;

impl<const N: u32, T: Native> NBit<N, T> {
    const SHIFT: u32 = {
        assert!(N != 0 && N <= T::BITS, "Width does not fit in the container");
        T::BITS - N
    };

    /// Stores the low `N` bits of `val`, extended to the container width.
    #[inline(always)]
    pub fn new(val: T) -> Self {
        NBit((val << Self::SHIFT) >> Self::SHIFT)
    }

    /// Stores `val` if it already is an `N`-bit value.
    pub fn checked_new(val: T) -> Option<Self> {
        let res = Self::new(val);
        if res.0 == val {
            Some(res)
        } else {
            None
        }
    }

    /// The stored value, extended to the container width.
    #[inline(always)]
    pub fn get(self) -> T {
        self.0
    }

    pub fn into_underlying(self) -> T {
        self.0
    }

    pub fn min_val() -> Self {
        if T::SIGNED {
            Self::new(T::ONE << (N - 1))
        } else {
            Self(T::ZERO)
        }
    }

    pub fn max_val() -> Self {
        if T::SIGNED {
            Self::new((T::ONE << (N - 1)).wrapping_sub(T::ONE))
        } else {
            Self::new(!T::ZERO)
        }
    }

    /// Reinterprets the `N`-bit pattern as the signed container.
    pub fn to_signed(self) -> NBit<N, T::Signed> {
        NBit::new(self.0.to_signed())
    }

    /// Reinterprets the `N`-bit pattern as the unsigned container.
    pub fn to_unsigned(self) -> NBit<N, T::Unsigned> {
        NBit::new(self.0.to_unsigned())
    }

    /// True if bit `N - 1` is set.
    pub fn sign_bit(self) -> bool {
        (self.0 >> (N - 1)) & T::ONE == T::ONE
    }
}

impl<const N: u32, T: Native> From<T> for NBit<N, T> {
    fn from(val: T) -> Self {
        Self::new(val)
    }
}

macro_rules! nbit_binop_impl {
    ($($tr:ident::$f:ident => $e:expr;)+) => {
        $(
            impl<const N: u32, T: Native> $tr for NBit<N, T> {
                type Output = Self;

                #[inline(always)]
                fn $f(self, rhs: Self) -> Self {
                    let op: fn(T, T) -> T = $e;
                    Self::new(op(self.0, rhs.0))
                }
            }
        )+
    };
}

nbit_binop_impl! {
    Add::add => T::wrapping_add;
    Sub::sub => T::wrapping_sub;
    Mul::mul => T::wrapping_mul;
    BitAnd::bitand => |a, b| a & b;
    BitOr::bitor => |a, b| a | b;
    BitXor::bitxor => |a, b| a ^ b;
}

impl<const N: u32, T: Native> Not for NBit<N, T> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::new(!self.0)
    }
}

impl<const N: u32, T: Native> Shl<u32> for NBit<N, T> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u32) -> Self {
        Self::new(self.0 << rhs)
    }
}

/// Arithmetic for signed containers, logical for unsigned ones.
impl<const N: u32, T: Native> Shr<u32> for NBit<N, T> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u32) -> Self {
        Self::new(self.0 >> rhs)
    }
}

impl<const N: u32, T: core::fmt::Debug> core::fmt::Debug for NBit<N, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl<const N: u32, T: core::fmt::Display> core::fmt::Display for NBit<N, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl<const N: u32, T: ufmt::uDebug> ufmt::uDebug for NBit<N, T> {
    fn fmt<W>(&self, formatter: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uDebug::fmt(&self.0, formatter)
    }
}

impl<const N: u32, T: ufmt::uDisplay> ufmt::uDisplay for NBit<N, T> {
    fn fmt<W>(&self, formatter: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        ufmt::uDisplay::fmt(&self.0, formatter)
    }
}
