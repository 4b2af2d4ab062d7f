//! Shared fixtures for the mode tests

/// Calls every check once with input that violates it, through the given
/// path prefix (`verify::`, `debug::`, `configurable::`) or receiver
/// (`checks.`), and collects the results in a fixed order.
macro_rules! violating_calls {
    ($($via:tt)+) => {
        vec![
            $($via)+ not_null::<str>(None, "a"),
            $($via)+ not_empty(Some(""), "b"),
            $($via)+ not_empty_collection(Some(Vec::<u8>::new()), "c"),
            $($via)+ not_empty_or_whitespace(Some(" "), "d"),
            $($via)+ is_positive(-1, "e"),
            $($via)+ is_strictly_positive(0_i64, "f"),
            $($via)+ is_greater_than(1.0, 2.0, "g"),
            $($via)+ is_less_than(3, 2, "h"),
            $($via)+ is_strictly_greater_than(2, 2, "i"),
            $($via)+ is_strictly_less_than(chrono::TimeDelta::seconds(2), chrono::TimeDelta::seconds(2), "j"),
            $($via)+ is_in_range(11, 0, 10, "k"),
            $($via)+ is_strictly_in_range(0, 0, 10, "l"),
            $($via)+ is_interface(None, "m"),
            $($via)+ is_instantiable(None, "n"),
            $($via)+ is_assignable_to(None, None, "o"),
            $($via)+ is_subclass_of(None, None, "p"),
            $($via)+ array_segment::<u8>(None, 0),
            $($via)+ array_segment_range(Some(&[1_u8][..]), 0, 2),
        ]
    };
}
