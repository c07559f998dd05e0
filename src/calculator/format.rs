//! Result formatting for display.
//!
//! Floats use the shortest decimal text that parses back to the same value,
//! with no exponent. `6.0` renders as `6` and `6.5` as `6.5`.

use super::NumericResult;

/// Format an engine result for display.
///
/// `prefer_float` is set when the user's expression contained a division;
/// integer results are then rendered through `f64` as well.
pub fn format_result(result: &NumericResult, prefer_float: bool) -> String {
    if prefer_float {
        return match result {
            NumericResult::Float32(v) => format_f32(*v),
            NumericResult::Float64(v) => format_f64(*v),
            NumericResult::Int(v) => format_f64(f64::from(*v)),
            NumericResult::Int64(v) => format_f64(*v as f64),
            NumericResult::Text(s) | NumericResult::Other(s) => s.clone(),
        };
    }

    match result {
        NumericResult::Int(v) => v.to_string(),
        NumericResult::Int64(v) => v.to_string(),
        NumericResult::Float32(v) => format_f32(*v),
        NumericResult::Float64(v) => format_f64(*v),
        NumericResult::Text(s) => s.clone(),
        NumericResult::Other(s) => s.clone(),
    }
}

fn format_f32(value: f32) -> String {
    format!("{}", value)
}

fn format_f64(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_without_division() {
        assert_eq!(format_result(&NumericResult::Int(14), false), "14");
        assert_eq!(format_result(&NumericResult::Int64(-9_000_000_000), false), "-9000000000");
    }

    #[test]
    fn test_integers_on_division_path() {
        assert_eq!(format_result(&NumericResult::Int(4), true), "4");
        assert_eq!(format_result(&NumericResult::Int64(-2), true), "-2");
    }

    #[test]
    fn test_shortest_round_trip_floats() {
        assert_eq!(format_result(&NumericResult::Float64(6.0), false), "6");
        assert_eq!(format_result(&NumericResult::Float64(6.5), false), "6.5");
        assert_eq!(format_result(&NumericResult::Float64(0.1 + 0.2), true), "0.30000000000000004");
        assert_eq!(format_result(&NumericResult::Float64(1.0 / 3.0), true), "0.3333333333333333");
    }

    #[test]
    fn test_no_exponent_notation() {
        assert_eq!(format_result(&NumericResult::Float64(1e21), true), "1000000000000000000000");
        assert_eq!(format_result(&NumericResult::Float64(1e-7), true), "0.0000001");
    }

    #[test]
    fn test_float32_uses_single_precision() {
        assert_eq!(format_result(&NumericResult::Float32(0.1), true), "0.1");
        assert_eq!(format_result(&NumericResult::Float32(2.5), false), "2.5");
    }

    #[test]
    fn test_text_and_other_pass_through() {
        let text = NumericResult::Text("hello".to_string());
        let other = NumericResult::Other("true".to_string());
        for prefer_float in [false, true] {
            assert_eq!(format_result(&text, prefer_float), "hello");
            assert_eq!(format_result(&other, prefer_float), "true");
        }
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let value = NumericResult::Float64(22.0 / 7.0);
        assert_eq!(format_result(&value, true), format_result(&value, true));
    }
}
