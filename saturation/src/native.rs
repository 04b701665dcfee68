// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! The primitive integers used to back N-bit values.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Div, Not, Shl, Shr};

/// A primitive integer that can hold an N-bit value.
///
/// Every arithmetic method wraps at the container width; overflow detection is the business of
/// the callers, which know the logical width `N`.
pub trait Native:
    Copy
    + Debug
    + Default
    + Eq
    + Ord
    + core::hash::Hash
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Div<Output = Self>
{
    /// Number of bits in the container.
    const BITS: u32;
    const SIGNED: bool;
    const ZERO: Self;
    const ONE: Self;

    /// The unsigned container of the same size.
    type Unsigned: Native;
    /// The signed container of the same size.
    type Signed: Native;

    /// Reinterprets the bit pattern as the unsigned container.
    fn to_unsigned(self) -> Self::Unsigned;
    /// Reinterprets the bit pattern as the signed container.
    fn to_signed(self) -> Self::Signed;
    /// Reinterprets an unsigned bit pattern as `Self`.
    fn from_unsigned(val: Self::Unsigned) -> Self;

    /// `1` for `true`, `0` for `false`.
    fn from_bool(b: bool) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;

    /// Bit pattern widened to 64 bits (sign-extending for signed containers) and truncated
    /// back. Used to move values between a generic width and a concrete register width.
    fn to_u64_bits(self) -> u64;
    fn from_u64_bits(bits: u64) -> Self;

    /// The mathematical value. Exact for every container except `u128` values above `i128::MAX`.
    fn to_i128(self) -> i128;
}

macro_rules! native_impl {
    ($($t:ty => $signed:literal, $uty:ty, $sty:ty;)+) => {
        $(
            impl Native for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                type Unsigned = $uty;
                type Signed = $sty;

                #[inline(always)]
                fn to_unsigned(self) -> $uty {
                    self as $uty
                }

                #[inline(always)]
                fn to_signed(self) -> $sty {
                    self as $sty
                }

                #[inline(always)]
                fn from_unsigned(val: $uty) -> Self {
                    val as $t
                }

                #[inline(always)]
                fn from_bool(b: bool) -> Self {
                    b as $t
                }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline(always)]
                fn to_u64_bits(self) -> u64 {
                    self as u64
                }

                #[inline(always)]
                fn from_u64_bits(bits: u64) -> Self {
                    bits as $t
                }

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )+
    };
}

native_impl! {
    u8 => false, u8, i8;
    u16 => false, u16, i16;
    u32 => false, u32, i32;
    u64 => false, u64, i64;
    u128 => false, u128, i128;
    i8 => true, u8, i8;
    i16 => true, u16, i16;
    i32 => true, u32, i32;
    i64 => true, u64, i64;
    i128 => true, u128, i128;
}
