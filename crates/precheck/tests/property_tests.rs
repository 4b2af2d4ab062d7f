//! Property-based tests for the range checks.

use chrono::TimeDelta;
use precheck::prelude::*;
use proptest::prelude::*;

fn duration() -> impl Strategy<Value = TimeDelta> {
    any::<i32>().prop_map(|ms| TimeDelta::milliseconds(i64::from(ms)))
}

// ============================================================================
// AGREEMENT WITH THE COMPARISON OPERATORS
// ============================================================================

proptest! {
    #[test]
    fn is_in_range_matches_operators(v in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert_eq!(verify::is_in_range(v, lo, hi, "v").is_ok(), lo <= v && v <= hi);
        prop_assert_eq!(verify::is_strictly_in_range(v, lo, hi, "v").is_ok(), lo < v && v < hi);
    }

    #[test]
    fn one_sided_limits_match_operators(v in any::<i32>(), limit in any::<i32>()) {
        prop_assert_eq!(verify::is_greater_than(v, limit, "v").is_ok(), v >= limit);
        prop_assert_eq!(verify::is_less_than(v, limit, "v").is_ok(), v <= limit);
        prop_assert_eq!(verify::is_strictly_greater_than(v, limit, "v").is_ok(), v > limit);
        prop_assert_eq!(verify::is_strictly_less_than(v, limit, "v").is_ok(), v < limit);
    }

    #[test]
    fn sign_checks_match_operators(v in any::<f64>()) {
        prop_assert_eq!(verify::is_positive(v, "v").is_ok(), !(v < 0.0));
        prop_assert_eq!(verify::is_strictly_positive(v, "v").is_ok(), !(v <= 0.0));
    }

    #[test]
    fn durations_order_like_integers(a in duration(), b in duration()) {
        prop_assert_eq!(verify::is_less_than(a, b, "d").is_ok(), a <= b);
        prop_assert_eq!(verify::is_strictly_greater_than(a, b, "d").is_ok(), a > b);
    }
}

// ============================================================================
// FAILURE PAYLOAD
// ============================================================================

proptest! {
    #[test]
    fn range_failure_carries_value_and_violated_side(v in any::<i32>(), lo in -100..0_i32, hi in 0..100_i32) {
        match verify::is_in_range(v, lo, hi, "v") {
            Ok(()) => prop_assert!((lo..=hi).contains(&v)),
            Err(error) => {
                prop_assert_eq!(error.actual_value(), Some(Value::Int32(v)));
                let expected = if v < lo {
                    (LimitKind::Lower, Value::Int32(lo))
                } else {
                    (LimitKind::Upper, Value::Int32(hi))
                };
                prop_assert_eq!((error.limit_kind(), error.limit()), (expected.0, Some(expected.1)));
            }
        }
    }

    #[test]
    fn segment_accepts_exactly_in_bounds(len in 0..32_usize, offset in -4..40_i32, count in -4..40_i32) {
        let data = vec![0_u8; len];
        let len = i32::try_from(len).unwrap();
        let in_bounds = offset >= 0
            && count >= 0
            && (offset < len || offset == 0)
            && offset + count <= len;
        prop_assert_eq!(verify::array_segment_range(Some(&data[..]), offset, count).is_ok(), in_bounds);
    }
}
