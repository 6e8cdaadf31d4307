use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate's declared matching inputs.
///
/// `skills` is `None` when the candidate never filled the field in; that is a
/// different state from an explicitly empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub user_id: Uuid,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
}

impl CandidateProfile {
    /// Location to match against, with blank strings treated as absent.
    pub fn match_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct CandidateProfileRow {
    pub user_id: Uuid,
    pub skills: Option<Value>,
    pub location: Option<String>,
}

impl From<CandidateProfileRow> for CandidateProfile {
    fn from(row: CandidateProfileRow) -> Self {
        CandidateProfile {
            user_id: row.user_id,
            skills: parse_skills(row.skills.as_ref()),
            location: row.location,
        }
    }
}

/// Normalizes the JSONB `skills` column.
///
/// NULL or missing → `None`. An array keeps its string elements in order, first
/// occurrence wins. Any other shape is coerced to an empty list.
pub fn parse_skills(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut skills: Vec<String> = Vec::with_capacity(items.len());
            for item in items.iter().filter_map(Value::as_str) {
                if !skills.iter().any(|s| s == item) {
                    skills.push(item.to_string());
                }
            }
            Some(skills)
        }
        Some(_) => Some(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_skills_are_undeclared() {
        assert_eq!(parse_skills(None), None);
        assert_eq!(parse_skills(Some(&Value::Null)), None);
    }

    #[test]
    fn test_array_skills_keep_order_and_dedupe() {
        let v = json!(["React", "Node.js", "React"]);
        assert_eq!(
            parse_skills(Some(&v)),
            Some(vec!["React".to_string(), "Node.js".to_string()])
        );
    }

    #[test]
    fn test_non_array_skills_coerce_to_empty() {
        assert_eq!(parse_skills(Some(&json!("React, SQL"))), Some(vec![]));
        assert_eq!(parse_skills(Some(&json!({"React": true}))), Some(vec![]));
        assert_eq!(parse_skills(Some(&json!(42))), Some(vec![]));
    }

    #[test]
    fn test_non_string_elements_dropped() {
        let v = json!(["SQL", 3, null, {"x": 1}, "Excel"]);
        assert_eq!(
            parse_skills(Some(&v)),
            Some(vec!["SQL".to_string(), "Excel".to_string()])
        );
    }

    #[test]
    fn test_blank_location_is_absent() {
        let p = CandidateProfile {
            user_id: Uuid::new_v4(),
            skills: Some(vec![]),
            location: Some("   ".to_string()),
        };
        assert_eq!(p.match_location(), None);
    }
}
