//! Integration tests for the xoroshiro128+ bit stream.
//!
//! Covers the fixed regression vectors, the 32-bit split law, jump-ahead
//! behaviour and property-based checks over arbitrary non-zero states.

use bitgen_core::{BitGenerator, JumpAhead, StreamSet, UniformExt, Xoroshiro128, Xoroshiro128State};
use proptest::prelude::*;

fn nonzero_state() -> impl Strategy<Value = (u64, u64)> {
    (any::<u64>(), any::<u64>()).prop_filter("state must not be all zero", |&(a, b)| a != 0 || b != 0)
}

// ============================================================================
// Regression Vectors
// ============================================================================

/// Seed (1, 2): the first four outputs of the recurrence.
#[test]
fn test_regression_sequence_from_one_two() {
    let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
    let outputs: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert_eq!(
        outputs,
        vec![
            0x3,
            0x0080_0030_0000_c003,
            0x0118_4060_3800_0363,
            0xa080_fe50_30c4_c366,
        ]
    );
}

/// A denser seed exercises carries in the output sum.
#[test]
fn test_regression_sequence_golden_seed() {
    let mut rng = Xoroshiro128::from_state(0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9).unwrap();
    assert_eq!(rng.next_u64(), 0x5d8f_c126_9c2f_61ce);
    assert_eq!(rng.next_u64(), 0x1efe_d845_306e_29d8);
    assert_eq!(rng.next_u64(), 0xb6fc_0b8b_aa3a_e0da);
}

#[test]
fn test_regression_u32_sequence_golden_seed() {
    let mut rng = Xoroshiro128::from_state(0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9).unwrap();
    let words: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
    assert_eq!(words, vec![0x5d8f_c126, 0x9c2f_61ce, 0x1efe_d845, 0x306e_29d8]);
}

// ============================================================================
// Jump-Ahead
// ============================================================================

#[test]
fn test_jump_twice_differs_from_jump_once() {
    let base = Xoroshiro128::from_state(1, 2).unwrap();
    let once = base.jumped();
    let twice = once.jumped();
    assert_ne!(once.state(), twice.state());
    assert_ne!(base.state(), once.state());
}

#[test]
fn test_jumped_stream_does_not_coincide_with_original() {
    let mut original = Xoroshiro128::from_state(0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9).unwrap();
    let mut jumped = original.jumped();

    let coincidences = (0..10_000)
        .filter(|_| original.next_u64() == jumped.next_u64())
        .count();
    assert_eq!(coincidences, 0, "jumped stream overlapped the original");
}

#[test]
fn test_jump_via_trait_object() {
    let mut direct = Xoroshiro128::from_state(1, 2).unwrap();
    let mut boxed: Box<Xoroshiro128> = Box::new(direct.clone());

    direct.jump();
    JumpAhead::jump(&mut boxed);
    assert_eq!(boxed.state(), direct.state());
}

#[test]
fn test_stream_set_matches_manual_jumps() {
    let base = Xoroshiro128::from_state(3, 5).unwrap();
    let streams = StreamSet::new(&base, 5).into_vec();

    let mut expected = base.clone();
    for (index, stream) in streams.iter().enumerate() {
        assert_eq!(stream.state(), expected.state(), "stream {} misplaced", index);
        expected.jump();
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Replaying a state replays the stream.
    #[test]
    fn prop_replay_is_deterministic((s0, s1) in nonzero_state(), count in 1..500usize) {
        let mut a = Xoroshiro128::from_state(s0, s1).unwrap();
        let mut b = Xoroshiro128::from_state(s0, s1).unwrap();
        for i in 0..count {
            prop_assert_eq!(a.next_u64(), b.next_u64(), "divergence at draw {}", i);
        }
    }

    /// Two 32-bit draws from an empty cache rebuild the 64-bit draw.
    #[test]
    fn prop_u32_pair_rebuilds_u64((s0, s1) in nonzero_state(), skip in 0..16usize) {
        let mut words = Xoroshiro128::from_state(s0, s1).unwrap();
        for _ in 0..skip {
            words.next_u64();
        }
        let mut halves = words.clone();

        let expected = words.next_u64();
        let hi = halves.next_u32() as u64;
        let lo = halves.next_u32() as u64;

        prop_assert_eq!((hi << 32) | lo, expected);
        prop_assert_eq!(halves.state(), words.state());
        prop_assert_eq!(halves.spare_word(), None);
    }

    /// The jump is a polynomial in the step map, so the two commute.
    #[test]
    fn prop_jump_commutes_with_step((s0, s1) in nonzero_state()) {
        let mut step_then_jump = Xoroshiro128::from_state(s0, s1).unwrap();
        step_then_jump.next_u64();
        step_then_jump.jump();

        let mut jump_then_step = Xoroshiro128::from_state(s0, s1).unwrap();
        jump_then_step.jump();
        jump_then_step.next_u64();

        prop_assert_eq!(step_then_jump.state(), jump_then_step.state());
    }

    /// A jump never lands on the zero state from a non-zero one.
    #[test]
    fn prop_jump_preserves_nonzero((s0, s1) in nonzero_state()) {
        let rng = Xoroshiro128::from_state(s0, s1).unwrap();
        prop_assert!(!rng.jumped().state().is_zero());
    }

    /// Uniform adapters stay inside their intervals for any state.
    #[test]
    fn prop_uniforms_in_range((s0, s1) in nonzero_state()) {
        let mut rng = Xoroshiro128::from_state(s0, s1).unwrap();
        for _ in 0..256 {
            let half_open = rng.next_double();
            prop_assert!((0.0..1.0).contains(&half_open));
            let open = rng.next_double_open();
            prop_assert!(open > 0.0 && open < 1.0);
        }
    }

    /// Display and FromStr agree on every state.
    #[test]
    fn prop_state_text_round_trip((s0, s1) in nonzero_state()) {
        let state = Xoroshiro128State::new(s0, s1);
        let parsed: Xoroshiro128State = state.to_string().parse().unwrap();
        prop_assert_eq!(parsed, state);
    }
}

/// Generic code sees only the capability trait.
#[test]
fn test_generic_consumer_accepts_borrowed_generator() {
    fn sum_words<G: BitGenerator>(mut rng: G, n: usize) -> u64 {
        (0..n).fold(0u64, |acc, _| acc.wrapping_add(rng.next_u64()))
    }

    let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
    let total = sum_words(&mut rng, 2);
    assert_eq!(total, 3u64.wrapping_add(0x0080_0030_0000_c003));
    assert_eq!(rng.next_u64(), 0x0118_4060_3800_0363);
}

// ============================================================================
// Serialisation
// ============================================================================

#[cfg(feature = "serde")]
mod serde_snapshots {
    use super::*;
    use bitgen_core::StateError;

    #[test]
    fn test_snapshot_round_trip_keeps_spare_word() {
        let mut rng = Xoroshiro128::from_state(1, 2).unwrap();
        rng.next_u32();

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xoroshiro128 = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, rng);
        assert_eq!(restored.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_zero_state_snapshot_rejected() {
        let json = r#"{"state":{"s0":0,"s1":0},"spare_word":null}"#;
        let err = serde_json::from_str::<Xoroshiro128>(json).unwrap_err();
        assert!(err.to_string().contains(&StateError::AllZero.to_string()));
    }
}
