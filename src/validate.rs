//! Input validation
//!
//! Turns the raw text of a submitted form into a feature vector. The batch is
//! all-or-nothing: one bad value rejects every value.

use crate::error::ValidationError;

/// Ordered numeric input to a classifier
pub type FeatureVector = Vec<f64>;

/// Parse `raw` (in vector order) into finite numbers.
///
/// `labels` names each position for the error report; positions beyond the
/// label list are reported by index.
pub fn parse_features<S: AsRef<str>>(
    labels: &[&str],
    raw: &[S],
) -> Result<FeatureVector, ValidationError> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            let value = value.as_ref();
            parse_value(value).ok_or_else(|| ValidationError {
                index,
                label: labels
                    .get(index)
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| format!("value #{}", index + 1)),
                value: value.to_string(),
            })
        })
        .collect()
}

fn parse_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diabetes_scenario() {
        let raw = ["2", "120", "70", "20", "79", "25.5", "0.5", "30"];
        let vector = parse_features(&[], &raw).unwrap();
        assert_eq!(vector, vec![2.0, 120.0, 70.0, 20.0, 79.0, 25.5, 0.5, 30.0]);
    }

    #[test]
    fn test_accepts_number_formats() {
        let raw = ["-3", "0.25", "1e3", "2.5E-2", "  42  ", "+7", ".5"];
        let vector = parse_features(&[], &raw).unwrap();
        assert_eq!(vector, vec![-3.0, 0.25, 1000.0, 0.025, 42.0, 7.0, 0.5]);
    }

    #[test]
    fn test_empty_rejects_batch() {
        let err = parse_features(&["Age", "Sex"], &["63", ""]).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.label, "Sex");
        assert_eq!(err.value, "");
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(parse_features(&[], &["1", "   ", "2"]).is_err());
    }

    #[test]
    fn test_text_rejected() {
        let err = parse_features(&["Glucose"], &["high"]).unwrap_err();
        assert_eq!(err.label, "Glucose");
        assert!(err.to_string().contains("valid numeric values"));
    }

    #[test]
    fn test_reports_first_bad_value() {
        let err = parse_features(&[], &["1", "x", "y"]).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.label, "value #2");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_features(&[], &["inf"]).is_err());
        assert!(parse_features(&[], &["NaN"]).is_err());
        assert!(parse_features(&[], &["-infinity"]).is_err());
    }

    #[test]
    fn test_extra_long_input() {
        let long_number = format!("1{}", "0".repeat(400));
        assert!(parse_features(&[], &[long_number]).is_err());

        let long_decimal = format!("0.{}1", "0".repeat(300));
        let vector = parse_features(&[], &[long_decimal]).unwrap();
        assert!(vector[0] >= 0.0 && vector[0] < 1e-299);

        let long_text = "9".repeat(20);
        assert_eq!(parse_features(&[], &[long_text]).unwrap(), vec![99999999999999999999.0]);
    }

    #[test]
    fn test_preserves_length_and_order() {
        let raw: Vec<String> = (0..23).map(|i| format!("{}.5", i)).collect();
        let vector = parse_features(&[], &raw).unwrap();
        assert_eq!(vector.len(), 23);
        for (i, v) in vector.iter().enumerate() {
            assert_eq!(*v, i as f64 + 0.5);
        }
    }

    #[test]
    fn test_empty_batch() {
        let raw: [&str; 0] = [];
        assert_eq!(parse_features(&[], &raw).unwrap(), Vec::<f64>::new());
    }
}
