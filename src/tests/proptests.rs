use proptest::prelude::*;

use crate::bits::BitSource;
use crate::width::{num_bits, plan_widths};
use crate::zigzag;
use crate::{compress, compress_signed, decompress, decompress_signed, UintDecoder};

/// Unsigned values spread across every field width: a raw 32-bit draw
/// shifted right by a random amount, so small and large magnitudes mix.
fn arb_values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        (any::<u32>(), 0u32..32).prop_map(|(v, shift)| v >> shift),
        1..600,
    )
}

/// Mostly-zero streams, to exercise the run-length path.
fn arb_sparse_values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        prop_oneof![4 => Just(0u32), 1 => any::<u32>()],
        1..600,
    )
}

/// A correlated random walk, the signal shape this codec is built for.
fn arb_walk() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..=50, 1..600).prop_map(|deltas| {
        let mut level = 0i32;
        deltas
            .iter()
            .map(|&d| {
                level = level.saturating_add(d);
                level
            })
            .collect()
    })
}

proptest! {
    /// Encoding then decoding any nonempty stream is the identity.
    #[test]
    fn prop_roundtrip(values in arb_values()) {
        let code = compress(&values);
        prop_assert_eq!(decompress(&code, values.len()).unwrap(), values);
    }

    /// Round-trip holds on zero-dominated streams.
    #[test]
    fn prop_roundtrip_sparse(values in arb_sparse_values()) {
        let code = compress(&values);
        prop_assert_eq!(decompress(&code, values.len()).unwrap(), values);
    }

    /// Round-trip holds for signed correlated walks.
    #[test]
    fn prop_roundtrip_walk(values in arb_walk()) {
        let code = compress_signed(&values);
        prop_assert_eq!(decompress_signed(&code, values.len()).unwrap(), values);
    }

    /// Round-trip holds for signed values of every magnitude.
    #[test]
    fn prop_roundtrip_signed(raw in prop::collection::vec((any::<i32>(), 0u32..32), 1..600)) {
        let values: Vec<i32> = raw.iter().map(|&(v, shift)| v >> shift).collect();
        let code = compress_signed(&values);
        prop_assert_eq!(decompress_signed(&code, values.len()).unwrap(), values);
    }

    /// Every planned width covers its value and adjacent widths differ by
    /// at most one.
    #[test]
    fn prop_planner_covers_and_slopes(values in arb_values()) {
        let widths = plan_widths(&values, 0);
        for (&v, &w) in values.iter().zip(widths.iter()) {
            prop_assert!(u32::from(w) >= num_bits(v));
        }
        for pair in widths.windows(2) {
            prop_assert!(pair[0].abs_diff(pair[1]) <= 1);
        }
    }

    /// The plan is pointwise minimal: every width sits exactly at the
    /// largest of its three lower bounds, so lowering any single entry
    /// would violate a constraint.
    #[test]
    fn prop_planner_minimal(values in arb_values()) {
        let widths = plan_widths(&values, 0);
        let n = widths.len();
        for i in 0..n {
            let left = if i > 0 { widths[i - 1].saturating_sub(1) } else { 0 };
            let right = if i + 1 < n { widths[i + 1].saturating_sub(1) } else { 0 };
            let bound = (num_bits(values[i]) as u8).max(left).max(right);
            prop_assert_eq!(
                widths[i], bound,
                "width at {} exceeds its lower bounds", i
            );
        }
    }

    /// The first 5 (or 6) bits of any stream carry the first symbol's
    /// planned width.
    #[test]
    fn prop_prelude_law(values in arb_values()) {
        let code = compress(&values);
        let horizon = values.len().min(64);
        let expected = u32::from(plan_widths(&values[..horizon], 0)[0]);

        let mut source = BitSource::new(&code);
        let mut width = source.read(5).unwrap();
        if width == 31 {
            width += source.read(1).unwrap();
        }
        prop_assert_eq!(width, expected);
    }

    /// A pure zero stream of length k costs 5 prelude bits plus
    /// 2*floor(log2(k)) + 1 run bits.
    #[test]
    fn prop_zero_run_length_law(k in 1usize..3000) {
        let code = compress(&vec![0u32; k]);
        let exponent = (usize::BITS - k.leading_zeros() - 1) as usize;
        prop_assert_eq!(code.len(), (5 + 2 * exponent + 1).div_ceil(8));
    }

    /// Zig-zag is a bijection that maps non-negatives to evens and
    /// negatives to odds.
    #[test]
    fn prop_zigzag_bijection(s in any::<i32>()) {
        let u = zigzag::encode(s);
        prop_assert_eq!(zigzag::decode(u), s);
        prop_assert_eq!(u % 2 == 0, s >= 0);
    }

    /// Arbitrary bytes never panic the decoder; they decode or fail.
    #[test]
    fn prop_decoder_tolerates_garbage(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(mut dec) = UintDecoder::new(&bytes) {
            for _ in 0..512 {
                if dec.read().is_err() {
                    break;
                }
            }
        }
    }
}
