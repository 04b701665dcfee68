// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Method-style saturating arithmetic on [`NBit`] values.

use crate::native::Native;
use crate::nbit::NBit;
use crate::wide::WideMul;
use crate::width::Bits;

/// Guarantees the presence of `.saturating_add()` as implemented on the numeric types.
pub trait SaturatingAdd<Rhs = Self> {
    type Output;

    fn saturating_add(self, rhs: Rhs) -> Self::Output;
}

/// Guarantees the presence of `.saturating_sub()` as implemented on the numeric types.
pub trait SaturatingSub<Rhs = Self> {
    type Output;

    fn saturating_sub(self, rhs: Rhs) -> Self::Output;
}

/// Guarantees the presence of `.saturating_mul()` as implemented on the numeric types.
pub trait SaturatingMul<Rhs = Self> {
    type Output;

    fn saturating_mul(self, rhs: Rhs) -> Self::Output;
}

/// Guarantees the presence of `.saturating_div()` as implemented on the numeric types.
///
/// Panics on division by zero, like the numeric types.
pub trait SaturatingDiv<Rhs = Self> {
    type Output;

    fn saturating_div(self, rhs: Rhs) -> Self::Output;
}

pub trait SaturatingAddAssign<Rhs = Self> {
    fn saturating_add_assign(&mut self, rhs: Rhs);
}

pub trait SaturatingSubAssign<Rhs = Self> {
    fn saturating_sub_assign(&mut self, rhs: Rhs);
}

pub trait SaturatingMulAssign<Rhs = Self> {
    fn saturating_mul_assign(&mut self, rhs: Rhs);
}

pub trait SaturatingDivAssign<Rhs = Self> {
    fn saturating_div_assign(&mut self, rhs: Rhs);
}

/// A native container accepted by the saturating operations at width `N`.
///
/// Implemented for the unsigned and signed backers of every supported width, picking the
/// unsigned or signed family of operations.
pub trait SaturatingOperand<const N: u32>: Native {
    fn add_n(x: Self, y: Self) -> Self;
    fn sub_n(x: Self, y: Self) -> Self;
    fn mul_n(x: Self, y: Self) -> Self;
    fn div_n(x: Self, y: Self) -> Self;
}

macro_rules! saturating_operand_impl {
    ($($t:ty => $assoc:ident: $add:ident, $sub:ident, $mul:ident, $div:ident;)+) => {
        $(
            impl<const N: u32> SaturatingOperand<N> for $t
            where
                Bits<N>: WideMul<$assoc = $t>,
            {
                #[inline]
                fn add_n(x: $t, y: $t) -> $t {
                    crate::ops::$add::<N>(x, y)
                }

                #[inline]
                fn sub_n(x: $t, y: $t) -> $t {
                    crate::ops::$sub::<N>(x, y)
                }

                #[inline]
                fn mul_n(x: $t, y: $t) -> $t {
                    crate::ops::$mul::<N>(x, y)
                }

                #[inline]
                fn div_n(x: $t, y: $t) -> $t {
                    crate::ops::$div::<N>(x, y)
                }
            }
        )+
    };
}

saturating_operand_impl! {
    u8 => Unsigned: addu, subu, mulu, divu;
    u16 => Unsigned: addu, subu, mulu, divu;
    u32 => Unsigned: addu, subu, mulu, divu;
    u64 => Unsigned: addu, subu, mulu, divu;
    i8 => Signed: adds, subs, muls, divs;
    i16 => Signed: adds, subs, muls, divs;
    i32 => Signed: adds, subs, muls, divs;
    i64 => Signed: adds, subs, muls, divs;
}

macro_rules! nbit_saturating_impl {
    ($($tr:ident::$f:ident, $tra:ident::$fa:ident => $op:ident;)+) => {
        $(
            impl<const N: u32, T: SaturatingOperand<N>> $tr for NBit<N, T> {
                type Output = Self;

                #[inline]
                fn $f(self, rhs: Self) -> Self {
                    NBit::new(T::$op(self.get(), rhs.get()))
                }
            }

            impl<const N: u32, T: SaturatingOperand<N>> $tra for NBit<N, T> {
                #[inline]
                fn $fa(&mut self, rhs: Self) {
                    *self = $tr::$f(*self, rhs);
                }
            }
        )+
    };
}

nbit_saturating_impl! {
    SaturatingAdd::saturating_add, SaturatingAddAssign::saturating_add_assign => add_n;
    SaturatingSub::saturating_sub, SaturatingSubAssign::saturating_sub_assign => sub_n;
    SaturatingMul::saturating_mul, SaturatingMulAssign::saturating_mul_assign => mul_n;
    SaturatingDiv::saturating_div, SaturatingDivAssign::saturating_div_assign => div_n;
}
