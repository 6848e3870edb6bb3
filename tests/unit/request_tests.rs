/// Tests for validating tool arguments at the boundary
use habit_log_mcp::*;
use serde_json::{json, Value};
use std::collections::HashMap;

fn args(value: Value) -> HashMap<String, Value> {
    serde_json::from_value(value).expect("arguments must be an object")
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[test]
    fn test_every_required_field_is_checked() {
        let full = json!({"name": "Water", "amount": 2, "unit": "Liters"});

        for field in ["name", "amount", "unit"] {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(field);

            let result = OperationRequest::parse(ADD_HABIT, &args(partial));
            match result {
                Err(ToolError::Validation(DomainError::MissingField(missing))) => assert_eq!(missing, field),
                other => panic!("expected missing {} error, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_null_counts_as_missing() {
        let result = OperationRequest::parse(
            ADD_HABIT,
            &args(json!({"name": "Water", "amount": null, "unit": "Liters"})),
        );
        assert!(matches!(result, Err(ToolError::Validation(DomainError::MissingField("amount")))));
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        let result = OperationRequest::parse(
            ADD_HABIT,
            &args(json!({"name": "Sugar", "amount": -1.5, "unit": "spoons"})),
        );
        assert!(matches!(result, Ok(OperationRequest::AddHabit(AddHabitParams { amount, .. })) if amount == -1.5));
    }

    #[test]
    fn test_get_habits_ignores_unknown_arguments() {
        let result = OperationRequest::parse(GET_HABITS, &args(json!({"verbose": true})));
        assert_eq!(result.unwrap(), OperationRequest::GetHabits(GetHabitsParams { limit: None }));
    }
}
