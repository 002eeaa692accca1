//! Alert condition evaluation
//!
//! Nothing in the service feeds live prices through this: alerts change
//! status only through explicit user action. The evaluator exists so a
//! price-watching component has a single place to test conditions.

use super::types::AlertCondition;

/// Whether `current_value` satisfies `condition` against `threshold`.
///
/// For the `change_*` conditions `current_value` is the change figure
/// (e.g. a percentage move), not a price.
pub fn evaluate_condition(condition: AlertCondition, threshold: f64, current_value: f64) -> bool {
    match condition {
        AlertCondition::Above | AlertCondition::ChangeAbove => current_value > threshold,
        AlertCondition::Below | AlertCondition::ChangeBelow => current_value < threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_and_below_are_strict() {
        assert!(evaluate_condition(AlertCondition::Above, 100.0, 100.5));
        assert!(!evaluate_condition(AlertCondition::Above, 100.0, 100.0));
        assert!(evaluate_condition(AlertCondition::Below, 50.0, 49.9));
        assert!(!evaluate_condition(AlertCondition::Below, 50.0, 50.0));
    }

    #[test]
    fn test_change_conditions() {
        assert!(evaluate_condition(AlertCondition::ChangeAbove, 5.0, 7.2));
        assert!(!evaluate_condition(AlertCondition::ChangeAbove, 5.0, -7.2));
        assert!(evaluate_condition(AlertCondition::ChangeBelow, -3.0, -4.0));
        assert!(!evaluate_condition(AlertCondition::ChangeBelow, -3.0, 1.0));
    }

    #[test]
    fn test_nan_never_matches() {
        assert!(!evaluate_condition(AlertCondition::Above, 1.0, f64::NAN));
        assert!(!evaluate_condition(AlertCondition::Below, 1.0, f64::NAN));
    }
}
