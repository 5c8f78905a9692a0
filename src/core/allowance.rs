//! Allowance arithmetic
//!
//! The personal allowance is a fraction of the class ceiling, scaled by the
//! workload. All the complexity of this tool is in finding the ceiling; the
//! formula itself is one multiplication chain.

use crate::error::{PriplatekError, PriplatekResult};
use crate::types::{Allowance, ClassMaxima};

/// Lowest accepted allowance percentage.
pub const PERCENT_MIN: f64 = 0.0;

/// Highest accepted allowance percentage. The statutory cap is 100 % of the
/// class ceiling.
pub const PERCENT_MAX: f64 = 100.0;

/// Lowest accepted workload percentage.
pub const FTE_MIN: f64 = 1.0;

/// Highest accepted workload percentage. Double full time is the most any
/// contract stack can reach.
pub const FTE_MAX: f64 = 200.0;

/// Compute the monthly personal allowance for one employee.
///
/// `percent` is the granted allowance as a share of the class ceiling,
/// `fte` the workload as a share of full time. Both are validated here so
/// every caller gets the same bounds, and NaN fails the range checks like
/// any other out-of-range value.
pub fn personal_allowance(
    maxima: &ClassMaxima,
    class: u8,
    percent: f64,
    fte: f64,
) -> PriplatekResult<Allowance> {
    let Some(base) = maxima.amount(class) else {
        return Err(PriplatekError::ClassNotFound(class));
    };

    if !(PERCENT_MIN..=PERCENT_MAX).contains(&percent) {
        return Err(PriplatekError::OutOfRange {
            what: "allowance percentage",
            value: percent,
            min: PERCENT_MIN,
            max: PERCENT_MAX,
        });
    }

    if !(FTE_MIN..=FTE_MAX).contains(&fte) {
        return Err(PriplatekError::OutOfRange {
            what: "workload percentage",
            value: fte,
            min: FTE_MIN,
            max: FTE_MAX,
        });
    }

    let amount = base as f64 * (percent / 100.0) * (fte / 100.0);

    Ok(Allowance {
        class,
        base,
        percent,
        fte,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn maxima() -> ClassMaxima {
        let amounts: BTreeMap<u8, i64> = (1..=16).map(|c| (c, 20_000 + 1_500 * c as i64)).collect();
        ClassMaxima::new("Tarify".to_string(), amounts)
    }

    #[test]
    fn test_full_percent_full_time_is_the_ceiling() {
        let allowance =
            personal_allowance(&maxima(), 12, 100.0, 100.0).expect("should compute");
        assert_eq!(allowance.base, 38_000);
        assert_eq!(allowance.amount, 38_000.0);
    }

    #[test]
    fn test_percent_and_fte_scale_independently() {
        let m = maxima();
        let half_percent = personal_allowance(&m, 12, 50.0, 100.0).expect("should compute");
        let half_time = personal_allowance(&m, 12, 100.0, 50.0).expect("should compute");
        assert_eq!(half_percent.amount, 19_000.0);
        assert_eq!(half_time.amount, 19_000.0);

        let quarter = personal_allowance(&m, 12, 50.0, 50.0).expect("should compute");
        assert_eq!(quarter.amount, 9_500.0);
    }

    #[test]
    fn test_reference_amounts() {
        let single = ClassMaxima::new(
            "Tarify".to_string(),
            std::iter::once((12u8, 50_000i64)).collect(),
        );
        let full_time = personal_allowance(&single, 12, 20.0, 100.0).expect("should compute");
        assert_eq!(full_time.amount, 10_000.0);

        let half_time = personal_allowance(&single, 12, 20.0, 50.0).expect("should compute");
        assert_eq!(half_time.amount, 5_000.0);
    }

    #[test]
    fn test_zero_percent_is_a_valid_zero_allowance() {
        let allowance = personal_allowance(&maxima(), 5, 0.0, 100.0).expect("should compute");
        assert_eq!(allowance.amount, 0.0);
    }

    #[test]
    fn test_fractional_inputs() {
        let allowance = personal_allowance(&maxima(), 1, 12.5, 80.0).expect("should compute");
        assert_eq!(allowance.base, 21_500);
        assert_eq!(allowance.amount, 21_500.0 * 0.125 * 0.8);
    }

    #[test]
    fn test_class_missing_from_table() {
        let amounts: BTreeMap<u8, i64> = (1..=10).map(|c| (c, 20_000)).collect();
        let sparse = ClassMaxima::new("Tarify".to_string(), amounts);
        let err = personal_allowance(&sparse, 11, 50.0, 100.0).expect_err("class 11 is absent");
        assert!(matches!(err, PriplatekError::ClassNotFound(11)));
    }

    #[test]
    fn test_percent_bounds() {
        let m = maxima();
        assert!(personal_allowance(&m, 3, 0.0, 100.0).is_ok());
        assert!(personal_allowance(&m, 3, 100.0, 100.0).is_ok());

        let low = personal_allowance(&m, 3, -0.1, 100.0).expect_err("below range");
        assert!(matches!(
            low,
            PriplatekError::OutOfRange {
                what: "allowance percentage",
                ..
            }
        ));
        assert!(personal_allowance(&m, 3, 100.1, 100.0).is_err());
        assert!(personal_allowance(&m, 3, f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_fte_bounds() {
        let m = maxima();
        assert!(personal_allowance(&m, 3, 50.0, 1.0).is_ok());
        assert!(personal_allowance(&m, 3, 50.0, 200.0).is_ok());

        let zero = personal_allowance(&m, 3, 50.0, 0.0).expect_err("zero workload");
        assert!(matches!(
            zero,
            PriplatekError::OutOfRange {
                what: "workload percentage",
                ..
            }
        ));
        assert!(personal_allowance(&m, 3, 50.0, 200.5).is_err());
        assert!(personal_allowance(&m, 3, 50.0, f64::NAN).is_err());
    }

    #[test]
    fn test_class_checked_before_ranges() {
        // An absent class is reported even when the other inputs are also
        // bad, matching the order a user can fix things in.
        let err = personal_allowance(&maxima(), 0, 500.0, 0.0).expect_err("should fail");
        assert!(matches!(err, PriplatekError::ClassNotFound(0)));
    }
}
