// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Saturating arithmetic on `N`-bit integers.
//!
//! Every operation takes and returns values in the native container chosen by [`Bits<N>`].
//! Operands must already be in range for `N`: this is checked by `debug_assert!` only, so
//! release builds give unspecified (but memory safe) results for out-of-range operands.
//! Results that cannot be represented are clamped to the nearest boundary value.
//!
//! On x86_64 with the `inline-asm` feature, register widths are routed through
//! [`crate::fast`]. The `*_portable` functions are the reference algorithms and are used for
//! every other width.
//!
//! [`Bits<N>`]: crate::width::Bits

mod add;
mod div;
mod mul;
mod sub;

pub use add::{adds, addu};
pub use div::{divs, divu};
pub use mul::{muls, mulu};
pub use sub::{subs, subu};

pub(crate) use add::{adds_portable, addu_portable};
pub(crate) use div::{divs_portable, divu_portable};
pub(crate) use mul::{muls_portable, mulu_portable};
pub(crate) use sub::{subs_portable, subu_portable};

use crate::native::Native;
use crate::nbit::Unsigned;
use crate::width::{Bits, SignedBackerOf, UnsignedBackerOf, Width};

/// The boundary a signed result saturates to: the maximum if bit `N - 1` of `sign` is clear,
/// the minimum if it is set.
#[inline(always)]
pub(crate) fn overflow_value<const N: u32>(sign: UnsignedBackerOf<N>) -> SignedBackerOf<N>
where
    Bits<N>: Width,
{
    let smax = Unsigned::<N>::new(<Bits<N> as Width>::SLIMITS.max.to_unsigned());
    ((Unsigned::<N>::new(sign) >> (N - 1)) + smax)
        .to_signed()
        .get()
}
