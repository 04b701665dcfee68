// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Every operation against the exact `i128` result, clamped, for a spread of regular and
//! irregular widths.

mod common;

macro_rules! width_properties {
    ($($module:ident: $n:literal;)+) => {
        $(
            mod $module {
                use crate::common::{clamp_signed, clamp_unsigned, unsigned_max};
                use saturation::{
                    adds, addu, divs, divu, mask_of, muls, mulu, slimits, subs, subu,
                    SignedBackerOf, UnsignedBackerOf,
                };
                use test_strategy::proptest;

                const N: u32 = $n;
                type U = UnsignedBackerOf<N>;
                type S = SignedBackerOf<N>;

                #[proptest]
                fn addu_is_exact_or_clamped(
                    #[strategy(0..=mask_of::<N>())] x: U,
                    #[strategy(0..=mask_of::<N>())] y: U,
                ) {
                    let expected = clamp_unsigned(i128::from(x) + i128::from(y), N);
                    assert_eq!(i128::from(addu::<N>(x, y)), expected);
                    assert_eq!(addu::<N>(x, y), addu::<N>(y, x));
                }

                #[proptest]
                fn subu_is_exact_or_clamped(
                    #[strategy(0..=mask_of::<N>())] x: U,
                    #[strategy(0..=mask_of::<N>())] y: U,
                ) {
                    let expected = clamp_unsigned(i128::from(x) - i128::from(y), N);
                    assert_eq!(i128::from(subu::<N>(x, y)), expected);
                }

                #[proptest]
                fn mulu_is_exact_or_clamped(
                    #[strategy(0..=mask_of::<N>())] x: U,
                    #[strategy(0..=mask_of::<N>())] y: U,
                ) {
                    // The exact product of two 64-bit operands can exceed i128.
                    let expected = i128::from(x)
                        .checked_mul(i128::from(y))
                        .map_or(unsigned_max(N), |p| clamp_unsigned(p, N));
                    assert_eq!(i128::from(mulu::<N>(x, y)), expected);
                    assert_eq!(mulu::<N>(x, y), mulu::<N>(y, x));
                }

                #[proptest]
                fn divu_is_exact(
                    #[strategy(0..=mask_of::<N>())] x: U,
                    #[strategy(1..=mask_of::<N>())] y: U,
                ) {
                    assert_eq!(i128::from(divu::<N>(x, y)), i128::from(x) / i128::from(y));
                }

                #[proptest]
                fn unsigned_identities(#[strategy(0..=mask_of::<N>())] x: U) {
                    assert_eq!(addu::<N>(x, 0), x);
                    assert_eq!(subu::<N>(x, 0), x);
                    assert_eq!(subu::<N>(x, x), 0);
                    assert_eq!(mulu::<N>(x, 1), x);
                    assert_eq!(mulu::<N>(x, 0), 0);
                    assert_eq!(divu::<N>(x, 1), x);
                    assert_eq!(addu::<N>(x, mask_of::<N>()), mask_of::<N>());
                }

                #[proptest]
                fn adds_is_exact_or_clamped(
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] x: S,
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] y: S,
                ) {
                    let expected = clamp_signed(i128::from(x) + i128::from(y), N);
                    assert_eq!(i128::from(adds::<N>(x, y)), expected);
                    assert_eq!(adds::<N>(x, y), adds::<N>(y, x));
                }

                #[proptest]
                fn subs_is_exact_or_clamped(
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] x: S,
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] y: S,
                ) {
                    let expected = clamp_signed(i128::from(x) - i128::from(y), N);
                    assert_eq!(i128::from(subs::<N>(x, y)), expected);
                }

                #[proptest]
                fn muls_is_exact_or_clamped(
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] x: S,
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] y: S,
                ) {
                    let expected = clamp_signed(i128::from(x) * i128::from(y), N);
                    assert_eq!(i128::from(muls::<N>(x, y)), expected);
                    assert_eq!(muls::<N>(x, y), muls::<N>(y, x));
                }

                #[proptest]
                fn divs_is_exact_or_clamped(
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)] x: S,
                    #[strategy(slimits::<N>().min..=slimits::<N>().max)]
                    #[filter(#y != 0)]
                    y: S,
                ) {
                    let expected = clamp_signed(i128::from(x) / i128::from(y), N);
                    assert_eq!(i128::from(divs::<N>(x, y)), expected);
                }

                #[proptest]
                fn signed_identities(#[strategy(slimits::<N>().min..=slimits::<N>().max)] x: S) {
                    assert_eq!(adds::<N>(x, 0), x);
                    assert_eq!(subs::<N>(x, 0), x);
                    assert_eq!(subs::<N>(x, x), 0);
                    assert_eq!(muls::<N>(x, 1), x);
                    assert_eq!(muls::<N>(x, 0), 0);
                    assert_eq!(divs::<N>(x, 1), x);
                    assert_eq!(adds::<N>(x, slimits::<N>().max), clamp_max(x));
                }

                fn clamp_max(x: S) -> S {
                    if x > 0 {
                        slimits::<N>().max
                    } else {
                        x + slimits::<N>().max
                    }
                }

                #[test]
                fn boundaries_saturate() {
                    let (umax, l) = (mask_of::<N>(), slimits::<N>());
                    assert_eq!(addu::<N>(umax, 1), umax);
                    assert_eq!(subu::<N>(0, 1), 0);
                    assert_eq!(mulu::<N>(umax, 2), umax);
                    assert_eq!(adds::<N>(l.max, 1), l.max);
                    assert_eq!(adds::<N>(l.min, -1), l.min);
                    assert_eq!(subs::<N>(l.min, 1), l.min);
                    assert_eq!(subs::<N>(l.max, -1), l.max);
                    assert_eq!(subs::<N>(0, l.min), l.max);
                    assert_eq!(muls::<N>(l.min, -1), l.max);
                    assert_eq!(muls::<N>(l.min, l.min), l.max);
                    assert_eq!(muls::<N>(l.min, l.max), l.min);
                    assert_eq!(divs::<N>(l.min, -1), l.max);
                    assert_eq!(divs::<N>(l.min, 1), l.min);
                }
            }
        )+
    };
}

width_properties! {
    width_4: 4;
    width_7: 7;
    width_8: 8;
    width_16: 16;
    width_17: 17;
    width_24: 24;
    width_32: 32;
    width_33: 33;
    width_48: 48;
    width_63: 63;
    width_64: 64;
}
