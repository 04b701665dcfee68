// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! Exact reference results computed in `i128`, where no operation on 64-bit operands can
//! overflow.

pub fn unsigned_max(n: u32) -> i128 {
    (1i128 << n) - 1
}

pub fn signed_min(n: u32) -> i128 {
    -(1i128 << (n - 1))
}

pub fn signed_max(n: u32) -> i128 {
    (1i128 << (n - 1)) - 1
}

/// The exact result `v`, clamped to the unsigned range of `n` bits.
pub fn clamp_unsigned(v: i128, n: u32) -> i128 {
    v.clamp(0, unsigned_max(n))
}

/// The exact result `v`, clamped to the signed range of `n` bits.
pub fn clamp_signed(v: i128, n: u32) -> i128 {
    v.clamp(signed_min(n), signed_max(n))
}
