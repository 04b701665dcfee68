// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Saturating arithmetic on signed and unsigned integers of any width from 4 to 64 bits.
//!
//! The width `N` is a const generic parameter. Values travel in the smallest native integer
//! that can hold them ([`UnsignedBackerOf<N>`] and [`SignedBackerOf<N>`]) and must lie in the
//! range of an `N`-bit integer. A result that does not fit is replaced by the nearest
//! boundary value instead of wrapping:
//!
//! ```
//! use saturation::{adds, mulu, subu};
//!
//! // 17-bit signed values live in an `i32`.
//! assert_eq!(adds::<17>(65_000, 1_000), 65_535);
//! // 24-bit unsigned values live in a `u32`.
//! assert_eq!(mulu::<24>(0x1000, 0x1000), 0xff_ffff);
//! assert_eq!(subu::<24>(3, 4), 0);
//! ```
//!
//! [`fixed`] holds the same operations for the native 8, 16, 32 and 64-bit integers, and
//! [`NBit`] values offer them as methods through the traits in [`traits`].

#![cfg_attr(not(test), no_std)]

pub mod fast;
pub mod fixed;
pub mod native;
pub mod nbit;
pub mod ops;
pub mod traits;
pub mod wide;
pub mod width;

pub use nbit::{NBit, Signed, Unsigned};
pub use ops::{adds, addu, divs, divu, muls, mulu, subs, subu};
pub use wide::{long_multiply, Wide, WideMul, NARROW_MULTIPLY_MAX};
pub use width::{
    container_bits, in_signed_range, in_unsigned_range, is_register_width, mask, mask_of,
    slimits, ulimits, Bits, Limits, SignedBackerOf, UnsignedBackerOf, Width,
};
