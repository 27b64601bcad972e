use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

/// One project from `projects.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub updated_at: String,
    /// Attached documents; only counted.
    #[serde(default, deserialize_with = "lenient::values")]
    pub docs: Vec<Value>,
}

impl Project {
    /// Display name, `"Unknown"` when blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Project;

    #[test]
    fn docs_are_counted_whatever_their_shape() {
        let project: Project = serde_json::from_value(json!({
            "name": "Garden planner",
            "docs": [{"filename": "a.md"}, "b", 3]
        }))
        .unwrap();
        assert_eq!(project.docs.len(), 3);
        assert_eq!(project.display_name(), "Garden planner");
    }

    #[test]
    fn blank_name_displays_unknown() {
        let project: Project = serde_json::from_value(json!({"docs": null})).unwrap();
        assert!(project.docs.is_empty());
        assert_eq!(project.display_name(), "Unknown");
    }
}
