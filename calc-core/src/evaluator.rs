//! Arithmetic evaluator
//!
//! Pure functions mapping two operands and an operator to a result. The
//! evaluator is total: NaN and infinite outcomes become `Operand::Invalid`
//! in [`to_operand`], and `Invalid` inputs propagate unchanged.

use crate::types::{Operand, Operator};

/// Normalize a raw floating-point result into an operand
pub fn to_operand(value: f64) -> Operand {
    if value.is_finite() {
        Operand::Number(value)
    } else {
        Operand::Invalid
    }
}

/// Parse a stored operand text
///
/// Anything that is not a number (including the error marker) is `Invalid`.
pub fn parse_operand(text: &str) -> Operand {
    match text.parse::<f64>() {
        Ok(value) => to_operand(value),
        Err(_) => Operand::Invalid,
    }
}

/// Textual form stored back into an operand register after a fold
pub fn format_operand(operand: Operand) -> String {
    operand.to_string()
}

/// Apply `op` to `a` and `b`
///
/// # Example
/// ```
/// use calc_core::{evaluate, Operand, Operator};
///
/// assert_eq!(
///     evaluate(Operand::Number(2.0), Operand::Number(3.0), Operator::Power),
///     Operand::Number(8.0)
/// );
/// assert_eq!(
///     evaluate(Operand::Number(1.0), Operand::Number(0.0), Operator::Divide),
///     Operand::Invalid
/// );
/// ```
pub fn evaluate(a: Operand, b: Operand, op: Operator) -> Operand {
    let (a, b) = match (a, b) {
        (Operand::Number(a), Operand::Number(b)) => (a, b),
        _ => return Operand::Invalid,
    };

    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        Operator::Power => a.powf(b),
    };

    to_operand(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ERROR_MARKER;

    fn num(v: f64) -> Operand {
        Operand::Number(v)
    }

    #[test]
    fn test_basic_operators() {
        assert_eq!(evaluate(num(5.0), num(3.0), Operator::Add), num(8.0));
        assert_eq!(evaluate(num(5.0), num(3.0), Operator::Subtract), num(2.0));
        assert_eq!(evaluate(num(5.0), num(3.0), Operator::Multiply), num(15.0));
        assert_eq!(evaluate(num(6.0), num(4.0), Operator::Divide), num(1.5));
        assert_eq!(evaluate(num(2.0), num(10.0), Operator::Power), num(1024.0));
    }

    #[test]
    fn test_math_errors() {
        assert_eq!(evaluate(num(1.0), num(0.0), Operator::Divide), Operand::Invalid);
        assert_eq!(evaluate(num(0.0), num(0.0), Operator::Divide), Operand::Invalid);
        // 0^-1 is infinite
        assert_eq!(evaluate(num(0.0), num(-1.0), Operator::Power), Operand::Invalid);
        // Fractional power of a negative base is undefined over the reals
        assert_eq!(evaluate(num(-8.0), num(0.5), Operator::Power), Operand::Invalid);
        assert_eq!(evaluate(num(f64::MAX), num(2.0), Operator::Multiply), Operand::Invalid);
    }

    #[test]
    fn test_negative_base_integer_power() {
        assert_eq!(evaluate(num(-2.0), num(3.0), Operator::Power), num(-8.0));
    }

    #[test]
    fn test_invalid_propagation() {
        for op in Operator::ALL {
            assert_eq!(evaluate(Operand::Invalid, num(1.0), op), Operand::Invalid);
            assert_eq!(evaluate(num(1.0), Operand::Invalid, op), Operand::Invalid);
        }
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("3."), num(3.0));
        assert_eq!(parse_operand("-0"), num(-0.0));
        assert_eq!(parse_operand("0.25"), num(0.25));
        assert_eq!(parse_operand(ERROR_MARKER), Operand::Invalid);
        assert_eq!(parse_operand("inf"), Operand::Invalid);
        assert_eq!(parse_operand("NaN"), Operand::Invalid);
        assert_eq!(parse_operand(""), Operand::Invalid);
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(format_operand(num(20.0)), "20");
        assert_eq!(format_operand(Operand::Invalid), ERROR_MARKER);
        assert_eq!(parse_operand(&format_operand(num(1e22))), num(1e22));
    }
}
