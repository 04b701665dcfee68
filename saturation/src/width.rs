// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
//! Per-width backing types, masks and limits.
//!
//! `Bits<N>` is a lookup table keyed by the width: it names the smallest native unsigned and
//! signed containers holding `N` bits and carries the constants derived from `N`. The table is
//! populated for `1 <= N <= 64`; any other width fails to compile at the use site.

use crate::native::Native;

/// Equivalent to `(1 << n) - 1` without shifting by the full width of the result.
///
/// `mask(0)` is `0`.
///
/// # Panics
///
/// Panics if `n > 64`.
#[must_use]
pub const fn mask(n: u32) -> u64 {
    assert!(n <= 64, "Cannot make a mask wider than 64 bits");
    if n == 0 {
        0
    } else {
        u64::MAX >> (64 - n)
    }
}

/// For a width `n`, the number of bits in the native container used to store it.
///
/// # Panics
///
/// Panics if `n` is 0 or larger than 64.
#[must_use]
pub const fn container_bits(n: u32) -> u32 {
    assert!(n != 0, "Cannot represent 0 bits!");
    assert!(n <= 64, "Cannot make backer for more than 64 bits");
    if n <= 8 {
        8
    } else {
        n.next_power_of_two()
    }
}

/// True if `n` plausibly matches the number of bits in a target machine register.
#[must_use]
pub const fn is_register_width(n: u32) -> bool {
    n % 8 == 0 && n.count_ones() == 1
}

/// The smallest and largest values representable at some width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Limits<T> {
    pub min: T,
    pub max: T,
}

/// Marker type for the width `N`.
pub struct Bits<const N: u32>;

/// The lookup table entry for one width.
pub trait Width {
    /// Smallest unsigned native integer with at least `N` bits.
    type Unsigned: Native<Unsigned = Self::Unsigned, Signed = Self::Signed>;
    /// Smallest signed native integer with at least `N` bits.
    type Signed: Native<Unsigned = Self::Unsigned, Signed = Self::Signed>;

    /// `2^N - 1`.
    const MASK: Self::Unsigned;
    /// `[0, 2^N - 1]`.
    const ULIMITS: Limits<Self::Unsigned>;
    /// `[-2^(N-1), 2^(N-1) - 1]`.
    const SLIMITS: Limits<Self::Signed>;
}

pub type UnsignedBackerOf<const N: u32> = <Bits<N> as Width>::Unsigned;
pub type SignedBackerOf<const N: u32> = <Bits<N> as Width>::Signed;

macro_rules! width_impl {
    ($uty:ty, $sty:ty; $($n:literal)+) => {
        $(
            impl Width for Bits<$n> {
                type Unsigned = $uty;
                type Signed = $sty;

                const MASK: $uty = mask($n) as $uty;
                const ULIMITS: Limits<$uty> = Limits {
                    min: 0,
                    max: Self::MASK,
                };
                // `max` first: `2^(N-1)` itself is never materialised in the signed type.
                const SLIMITS: Limits<$sty> = {
                    let max = (((1 as $uty) << ($n - 1)) - 1) as $sty;
                    Limits { min: -max - 1, max }
                };
            }

            const _: () = assert!(<$uty as Native>::BITS == container_bits($n));
        )+
    };
}

width_impl!(u8, i8; 1 2 3 4 5 6 7 8);
width_impl!(u16, i16; 9 10 11 12 13 14 15 16);
width_impl!(u32, i32;
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
width_impl!(u64, i64;
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64);

/// `Mask(N)` in the unsigned container of `N`.
#[must_use]
pub fn mask_of<const N: u32>() -> UnsignedBackerOf<N>
where
    Bits<N>: Width,
{
    <Bits<N> as Width>::MASK
}

#[must_use]
pub fn ulimits<const N: u32>() -> Limits<UnsignedBackerOf<N>>
where
    Bits<N>: Width,
{
    <Bits<N> as Width>::ULIMITS
}

#[must_use]
pub fn slimits<const N: u32>() -> Limits<SignedBackerOf<N>>
where
    Bits<N>: Width,
{
    <Bits<N> as Width>::SLIMITS
}

/// True if `val` is a valid unsigned `N`-bit value.
#[must_use]
pub fn in_unsigned_range<const N: u32>(val: UnsignedBackerOf<N>) -> bool
where
    Bits<N>: Width,
{
    val <= <Bits<N> as Width>::MASK
}

/// True if `val` is a valid signed `N`-bit value.
#[must_use]
pub fn in_signed_range<const N: u32>(val: SignedBackerOf<N>) -> bool
where
    Bits<N>: Width,
{
    let limits = <Bits<N> as Width>::SLIMITS;
    val >= limits.min && val <= limits.max
}

/// Widths accepted by the saturating operations.
pub(crate) struct Supported<const N: u32>;

impl<const N: u32> Supported<N> {
    pub(crate) const CHECK: () = assert!(
        N >= 4 && N <= 64,
        "Saturating operations are defined for widths from 4 to 64 bits"
    );
}

/// Debug-only precondition checks shared by the operations.
macro_rules! debug_check_unsigned {
    ($op:literal, $n:ident, $($arg:ident),+) => {
        $(
            debug_assert!(
                $crate::width::in_unsigned_range::<$n>($arg),
                concat!($op, "<{}> ", stringify!($arg), " value out of range"),
                $n
            );
        )+
    };
}

macro_rules! debug_check_signed {
    ($op:literal, $n:ident, $($arg:ident),+) => {
        $(
            debug_assert!(
                $crate::width::in_signed_range::<$n>($arg),
                concat!($op, "<{}> ", stringify!($arg), " value out of range"),
                $n
            );
        )+
    };
}

pub(crate) use debug_check_signed;
pub(crate) use debug_check_unsigned;
