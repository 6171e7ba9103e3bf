use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// A points submission after decode-and-validate. `user_id` is the ledger
/// key; `points` may be zero or negative (the schema does not constrain the
/// sign, matching the accrual contract).
#[derive(Debug, Clone, Serialize, Validate, ToSchema)]
pub struct CreatePointsRequest {
    #[serde(rename = "userID")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,

    pub points: i64,
}

impl CreatePointsRequest {
    /// Decodes an already-parsed JSON payload into a typed request,
    /// collecting every violated field constraint instead of stopping at
    /// the first one.
    pub fn decode(value: &Value) -> Result<Self, Vec<String>> {
        let mut violations = Vec::new();

        let user_id = match value.get("userID") {
            None | Some(Value::Null) => {
                violations.push("userID: required".to_string());
                None
            }
            Some(Value::String(s)) => {
                if s.is_empty() {
                    violations.push("userID: must not be empty".to_string());
                    None
                } else {
                    Some(s.clone())
                }
            }
            Some(_) => {
                violations.push("userID: must be a string".to_string());
                None
            }
        };

        let points = match value.get("points") {
            None | Some(Value::Null) => {
                violations.push("points: required".to_string());
                None
            }
            Some(other) => match coerce_points(other) {
                Some(points) => Some(points),
                None => {
                    violations.push("points: must be an integer number".to_string());
                    None
                }
            },
        };

        match (user_id, points) {
            (Some(user_id), Some(points)) if violations.is_empty() => {
                Ok(Self { user_id, points })
            }
            _ => Err(violations),
        }
    }
}

/// Accepts JSON numbers and numeric strings ("5"), coerced to an integer
/// quantity. Fractional values are rejected rather than rounded.
fn coerce_points(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Some(i)
            } else {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_reports_both_fields() {
        let err = CreatePointsRequest::decode(&json!({})).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.iter().any(|v| v.starts_with("userID:")));
        assert!(err.iter().any(|v| v.starts_with("points:")));
    }

    #[test]
    fn non_string_user_id_is_a_violation() {
        let err = CreatePointsRequest::decode(&json!({"userID": 123, "points": 5})).unwrap_err();
        assert_eq!(err, vec!["userID: must be a string".to_string()]);
    }

    #[test]
    fn empty_user_id_is_a_violation() {
        let err = CreatePointsRequest::decode(&json!({"userID": "", "points": 5})).unwrap_err();
        assert_eq!(err, vec!["userID: must not be empty".to_string()]);
    }

    #[test]
    fn numeric_string_points_are_coerced() {
        let req = CreatePointsRequest::decode(&json!({"userID": "u1", "points": "5"})).unwrap();
        assert_eq!(req.user_id, "u1");
        assert_eq!(req.points, 5);
    }

    #[test]
    fn whole_float_points_are_accepted() {
        let req = CreatePointsRequest::decode(&json!({"userID": "u1", "points": 5.0})).unwrap();
        assert_eq!(req.points, 5);
    }

    #[test]
    fn fractional_points_are_a_violation() {
        let err = CreatePointsRequest::decode(&json!({"userID": "u1", "points": 5.5})).unwrap_err();
        assert_eq!(err, vec!["points: must be an integer number".to_string()]);
    }

    #[test]
    fn non_numeric_points_are_a_violation() {
        let err =
            CreatePointsRequest::decode(&json!({"userID": "u1", "points": "lots"})).unwrap_err();
        assert_eq!(err, vec!["points: must be an integer number".to_string()]);
    }

    #[test]
    fn zero_and_negative_points_pass_validation() {
        let zero = CreatePointsRequest::decode(&json!({"userID": "u1", "points": 0})).unwrap();
        assert_eq!(zero.points, 0);

        let negative =
            CreatePointsRequest::decode(&json!({"userID": "u1", "points": -3})).unwrap();
        assert_eq!(negative.points, -3);
    }
}
