//! Sign, limit and range checks across the four value domains.

use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use rstest::rstest;

use precheck::messages;
use precheck::prelude::*;

// ============================================================================
// SIGN
// ============================================================================

#[rstest]
#[case::int32(0_i32, -1_i32)]
#[case::int64(0_i64, -1_i64)]
#[case::double(0.0_f64, -0.5_f64)]
#[case::duration(TimeDelta::zero(), TimeDelta::milliseconds(-1))]
fn test_is_positive_across_domains<T: Limit>(#[case] zero: T, #[case] negative: T) {
    assert!(verify::is_positive(zero, "v").is_ok());
    assert!(verify::is_strictly_positive(zero, "v").is_err());

    let error = verify::is_positive(negative, "v").unwrap_err();
    assert!(error.is_out_of_range());
    assert_eq!(error.kind(), FailureKind::OutOfRange);
    let negative: Value = negative.into();
    assert_eq!(error.actual_value(), Some(negative));
    assert_eq!(error.limit_kind(), LimitKind::None);
    assert_eq!(error.limit(), None);
}

// ============================================================================
// LIMITS
// ============================================================================

#[rstest]
#[case::int32(5_i32, 5_i32, 4_i32)]
#[case::int64(5_i64, 5_i64, 4_i64)]
#[case::double(1.5_f64, 1.5_f64, 1.25_f64)]
#[case::duration(TimeDelta::seconds(5), TimeDelta::seconds(5), TimeDelta::seconds(4))]
fn test_boundaries<T: Limit>(#[case] value: T, #[case] limit: T, #[case] below: T) {
    assert!(verify::is_greater_than(value, limit, "v").is_ok());
    assert!(verify::is_less_than(value, limit, "v").is_ok());
    assert!(verify::is_strictly_greater_than(value, limit, "v").is_err());
    assert!(verify::is_strictly_less_than(value, limit, "v").is_err());

    let error = verify::is_greater_than(below, limit, "v").unwrap_err();
    assert_eq!(error.kind(), FailureKind::LowerLimit);
    assert_eq!(error.limit_kind(), LimitKind::Lower);
    let (limit, below): (Value, Value) = (limit.into(), below.into());
    assert_eq!(error.limit(), Some(limit));
    assert_eq!(error.actual_value(), Some(below));
}

#[test]
fn test_strictly_less_than_at_boundary() {
    let error = verify::is_strictly_less_than(10, 10, "count").unwrap_err();

    assert_eq!(error.reason(), Some(Reason::ArgumentIsStrictlyLessThan));
    assert_eq!(error.limit_kind(), LimitKind::Upper);
    assert_eq!(
        error.message(),
        format!(
            "{}\nParameter name: count\nActual value was 10.\nUpper limit: 10",
            messages::ARGUMENT_IS_STRICTLY_LESS_THAN
        )
    );
}

// ============================================================================
// RANGES
// ============================================================================

#[rstest]
#[case(0, true)]
#[case(10, true)]
#[case(-1, false)]
#[case(11, false)]
fn test_is_in_range_inclusive(#[case] value: i32, #[case] ok: bool) {
    assert_eq!(verify::is_in_range(value, 0, 10, "v").is_ok(), ok);
}

#[rstest]
#[case(1, true)]
#[case(9, true)]
#[case(0, false)]
#[case(10, false)]
fn test_is_strictly_in_range_exclusive(#[case] value: i32, #[case] ok: bool) {
    assert_eq!(verify::is_strictly_in_range(value, 0, 10, "v").is_ok(), ok);
}

#[test]
fn test_in_range_reports_violated_side() {
    let low = verify::is_in_range(-1_i64, 0, 10, "v").unwrap_err();
    assert_eq!(low.limit_kind(), LimitKind::Lower);
    assert_eq!(low.reason(), Some(Reason::ArgumentIsGreaterThan));
    assert_eq!(low.limit(), Some(Value::Int64(0)));

    let high = verify::is_strictly_in_range(10_i64, 0, 10, "v").unwrap_err();
    assert_eq!(high.limit_kind(), LimitKind::Upper);
    assert_eq!(high.reason(), Some(Reason::ArgumentIsStrictlyLessThan));
    assert_eq!(high.limit(), Some(Value::Int64(10)));
}

#[test]
fn test_nan_passes() {
    assert!(verify::is_strictly_positive(f64::NAN, "v").is_ok());
    assert!(verify::is_less_than(f64::NAN, 0.0, "v").is_ok());
    assert!(verify::is_strictly_greater_than(f64::NAN, 0.0, "v").is_ok());
}

#[test]
fn test_duration_message() {
    let error = verify::is_less_than(TimeDelta::seconds(90), TimeDelta::seconds(60), "timeout")
        .unwrap_err();

    insta::assert_snapshot!(error.message(), @r"
    Values exceeding the inclusive upper limit are invalid.
    Parameter name: timeout
    Actual value was PT90S.
    Upper limit: PT60S
    ");
}

#[rstest]
#[case::below(99, Some((LimitKind::Lower, 100)))]
#[case::at_lower(100, None)]
#[case::at_upper(200, None)]
#[case::above(201, Some((LimitKind::Upper, 200)))]
fn test_in_range_payload(#[case] value: i64, #[case] expected: Option<(LimitKind, i64)>) {
    let result = verify::is_in_range(value, 100, 200, "v");
    match expected {
        None => assert!(result.is_ok()),
        Some((kind, limit)) => {
            let error = result.unwrap_err();
            assert_eq!(error.limit_kind(), kind);
            assert_eq!(error.limit(), Some(Value::Int64(limit)));
            assert_eq!(error.actual_value(), Some(Value::Int64(value)));
        }
    }
}

#[test]
fn test_strictly_greater_than_at_boundary() {
    assert!(verify::is_greater_than(100, 100, "v").is_ok());

    let error = verify::is_strictly_greater_than(100, 100, "v").unwrap_err();
    assert_eq!(error.actual_value(), Some(Value::Int32(100)));
    assert_eq!(error.limit(), Some(Value::Int32(100)));
    assert_eq!(error.limit_kind(), LimitKind::Lower);
}
