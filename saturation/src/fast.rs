// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Flag-based fast paths for register widths.
//!
//! On x86_64 the carry and overflow flags left behind by `add`, `sub`, `mul` and `imul` say
//! exactly when a 16, 32 or 64-bit result has to saturate, so the boundary value can be
//! selected with `sbb` or `cmov` instead of the portable bit tricks. The portable algorithms
//! in [`crate::ops`] stay the reference: every routine here is tested against them.
//!
//! Only compiled with the `inline-asm` feature on x86_64. Subtraction of signed values and
//! both divisions have no fast path.

/// Name of the backend used for register widths.
#[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
pub const BACKEND: &str = "x86_64-asm";
/// Name of the backend used for register widths.
#[cfg(not(all(target_arch = "x86_64", feature = "inline-asm")))]
pub const BACKEND: &str = "portable";

#[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
pub(crate) use x86::{adds, addu, mulu, muls, subu};

#[cfg(all(target_arch = "x86_64", feature = "inline-asm"))]
mod x86 {
    use core::arch::asm;

    use crate::native::Native;
    use crate::ops::overflow_value;
    use crate::width::{Bits, SignedBackerOf, UnsignedBackerOf, Width};

    /// Routes a generic width to the matching fixed-width routine, or returns `None` when `N`
    /// is not 16, 32 or 64.
    macro_rules! register_dispatch {
        ($($name:ident($backer:ident): $f16:ident, $f32:ident, $f64:ident;)+) => {
            $(
                #[inline(always)]
                pub(crate) fn $name<const N: u32>(
                    x: $backer<N>,
                    y: $backer<N>,
                ) -> Option<$backer<N>>
                where
                    Bits<N>: Width,
                {
                    let (x, y) = (x.to_u64_bits(), y.to_u64_bits());
                    let res = match N {
                        16 => $f16(x as _, y as _) as u64,
                        32 => $f32(x as _, y as _) as u64,
                        64 => $f64(x as _, y as _) as u64,
                        _ => return None,
                    };
                    Some(<$backer<N> as Native>::from_u64_bits(res))
                }
            )+
        };
    }

    register_dispatch! {
        addu(UnsignedBackerOf): addu16, addu32, addu64;
        subu(UnsignedBackerOf): subu16, subu32, subu64;
        mulu(UnsignedBackerOf): mulu16, mulu32, mulu64;
        adds(SignedBackerOf): adds16, adds32, adds64;
        muls(SignedBackerOf): muls16, muls32, muls64;
    }

    /// `add` sets carry on overflow; `sbb t, t` turns the carry into `0` or all ones.
    macro_rules! addu_asm {
        ($name:ident, $t:ty, $m:literal) => {
            #[inline(always)]
            pub(super) fn $name(mut x: $t, y: $t) -> $t {
                let t: $t;
                // SAFETY: register-only arithmetic, no memory or stack access.
                unsafe {
                    asm!(
                        concat!("add {x", $m, "}, {y", $m, "}"),
                        concat!("sbb {t", $m, "}, {t", $m, "}"),
                        x = inout(reg) x,
                        y = in(reg) y,
                        t = out(reg) t,
                        options(pure, nomem, nostack),
                    );
                }
                x | t
            }
        };
    }

    addu_asm!(addu16, u16, ":x");
    addu_asm!(addu32, u32, ":e");
    addu_asm!(addu64, u64, "");

    /// `sub` sets carry on borrow; `cmovc` then replaces the difference with zero.
    macro_rules! subu_asm {
        ($name:ident, $t:ty, $m:literal) => {
            #[inline(always)]
            pub(super) fn $name(mut x: $t, y: $t) -> $t {
                // SAFETY: register-only arithmetic, no memory or stack access.
                unsafe {
                    asm!(
                        concat!("sub {x", $m, "}, {y", $m, "}"),
                        concat!("cmovc {x", $m, "}, {zero", $m, "}"),
                        x = inout(reg) x,
                        y = in(reg) y,
                        zero = in(reg) 0 as $t,
                        options(pure, nomem, nostack),
                    );
                }
                x
            }
        };
    }

    subu_asm!(subu16, u16, ":x");
    subu_asm!(subu32, u32, ":e");
    subu_asm!(subu64, u64, "");

    /// One-operand `mul` writes the high half to `dx` and sets carry iff it is non-zero.
    macro_rules! mulu_asm {
        ($name:ident, $t:ty, $m:literal, $acc:tt, $high:tt) => {
            #[inline(always)]
            pub(super) fn $name(mut x: $t, y: $t) -> $t {
                // SAFETY: register-only arithmetic, no memory or stack access. The high half
                // of the product is discarded through the clobbered `dx` register.
                unsafe {
                    asm!(
                        concat!("mul {y", $m, "}"),
                        concat!("sbb {t", $m, "}, {t", $m, "}"),
                        concat!("or ", $acc, ", {t", $m, "}"),
                        y = in(reg) y,
                        t = out(reg) _,
                        inout($acc) x,
                        out($high) _,
                        options(pure, nomem, nostack),
                    );
                }
                x
            }
        };
    }

    mulu_asm!(mulu16, u16, ":x", "ax", "dx");
    mulu_asm!(mulu32, u32, ":e", "eax", "edx");
    mulu_asm!(mulu64, u64, "", "rax", "rdx");

    /// `add` sets overflow when the signed sum does not fit; `cmovo` selects the boundary.
    macro_rules! adds_asm {
        ($name:ident, $t:ty, $ut:ty, $n:literal, $m:literal) => {
            #[inline(always)]
            pub(super) fn $name(mut x: $t, y: $t) -> $t {
                let v = overflow_value::<$n>(x as $ut);
                // SAFETY: register-only arithmetic, no memory or stack access.
                unsafe {
                    asm!(
                        concat!("add {x", $m, "}, {y", $m, "}"),
                        concat!("cmovo {x", $m, "}, {v", $m, "}"),
                        x = inout(reg) x,
                        y = in(reg) y,
                        v = in(reg) v,
                        options(pure, nomem, nostack),
                    );
                }
                x
            }
        };
    }

    adds_asm!(adds16, i16, u16, 16, ":x");
    adds_asm!(adds32, i32, u32, 32, ":e");
    adds_asm!(adds64, i64, u64, 64, "");

    /// Two-operand `imul` sets carry and overflow when the product is truncated.
    macro_rules! muls_asm {
        ($name:ident, $t:ty, $ut:ty, $n:literal, $m:literal) => {
            #[inline(always)]
            pub(super) fn $name(mut x: $t, y: $t) -> $t {
                let v = overflow_value::<$n>((x ^ y) as $ut);
                // SAFETY: register-only arithmetic, no memory or stack access.
                unsafe {
                    asm!(
                        concat!("imul {x", $m, "}, {y", $m, "}"),
                        concat!("cmovc {x", $m, "}, {v", $m, "}"),
                        x = inout(reg) x,
                        y = in(reg) y,
                        v = in(reg) v,
                        options(pure, nomem, nostack),
                    );
                }
                x
            }
        };
    }

    muls_asm!(muls16, i16, u16, 16, ":x");
    muls_asm!(muls32, i32, u32, 32, ":e");
    muls_asm!(muls64, i64, u64, 64, "");

}
