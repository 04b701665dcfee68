// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Saturating arithmetic on the native 8, 16, 32 and 64-bit integers.

macro_rules! fixed_width_impl {
    ($($op:ident: $($f:ident($t:ty) => $n:literal),+;)+) => {
        $($(
            #[doc = concat!(
                "[`", stringify!($op), "`](crate::", stringify!($op), ") on `",
                stringify!($t), "`."
            )]
            #[inline]
            pub fn $f(x: $t, y: $t) -> $t {
                crate::ops::$op::<$n>(x, y)
            }
        )+)+
    };
}

fixed_width_impl! {
    addu: addu8(u8) => 8, addu16(u16) => 16, addu32(u32) => 32, addu64(u64) => 64;
    subu: subu8(u8) => 8, subu16(u16) => 16, subu32(u32) => 32, subu64(u64) => 64;
    mulu: mulu8(u8) => 8, mulu16(u16) => 16, mulu32(u32) => 32, mulu64(u64) => 64;
    divu: divu8(u8) => 8, divu16(u16) => 16, divu32(u32) => 32, divu64(u64) => 64;
    adds: adds8(i8) => 8, adds16(i16) => 16, adds32(i32) => 32, adds64(i64) => 64;
    subs: subs8(i8) => 8, subs16(i16) => 16, subs32(i32) => 32, subs64(i64) => 64;
    muls: muls8(i8) => 8, muls16(i16) => 16, muls32(i32) => 32, muls64(i64) => 64;
    divs: divs8(i8) => 8, divs16(i16) => 16, divs32(i32) => 32, divs64(i64) => 64;
}
