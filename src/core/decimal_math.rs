use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// Converts a float through its shortest round-trip decimal text.
///
/// `0.1` becomes exactly `0.1` rather than the nearest binary fraction, which
/// keeps merged values free of artifacts like `0.30000000000000004`.
pub fn f64_to_decimal(value: f64, field_name: &str) -> ChartResult<Decimal> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite"
        )));
    }
    Decimal::from_str(&value.to_string()).map_err(|e| {
        ChartError::InvalidData(format!(
            "{field_name} cannot be represented as decimal: {e}"
        ))
    })
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Adds two values in decimal space and returns the nearest float.
pub fn decimal_safe_add(lhs: f64, rhs: f64) -> ChartResult<f64> {
    let sum = f64_to_decimal(lhs, "lhs")?
        .checked_add(f64_to_decimal(rhs, "rhs")?)
        .ok_or_else(|| ChartError::InvalidData("decimal addition overflowed".to_owned()))?;
    decimal_to_f64(sum, "sum")
}

/// Element-wise decimal addition of two equally sized value vectors.
///
/// Nothing is written back on error, so callers can apply the result atomically.
pub fn decimal_safe_add_vectors(lhs: &[f64], rhs: &[f64]) -> ChartResult<Vec<f64>> {
    if lhs.len() != rhs.len() {
        return Err(ChartError::DataShapeMismatch {
            expected: lhs.len(),
            actual: rhs.len(),
        });
    }
    lhs.iter()
        .zip(rhs)
        .map(|(a, b)| decimal_safe_add(*a, *b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_one_plus_point_two_is_exact() {
        assert_eq!(decimal_safe_add(0.1, 0.2).expect("add"), 0.3);
    }

    #[test]
    fn non_finite_operands_are_rejected() {
        assert!(decimal_safe_add(f64::NAN, 1.0).is_err());
        assert!(decimal_safe_add(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn vector_length_mismatch_is_reported() {
        let err = decimal_safe_add_vectors(&[1.0, 2.0], &[1.0]).expect_err("mismatch");
        assert_eq!(
            err,
            ChartError::DataShapeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
