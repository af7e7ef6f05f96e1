//! Degree program requirement model

use serde::{Deserialize, Serialize};

/// One row of a program's requirement table.
///
/// A requirement is either a concrete course (`course_id` set) or a free-form
/// description with a credit amount (`description`/`description_credits` set).
/// Rows sharing an `or_group` within an option are alternatives to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRequirement {
    /// Owning program identifier (foreign key to `DegreeProgram::id`)
    pub program_id: String,

    /// Degree option (track) number within the program
    pub option: u32,

    /// Core curriculum area this requirement satisfies, when applicable
    pub core_area: Option<String>,

    /// Concrete course identifier (e.g., "CS 1332"), when applicable
    pub course_id: Option<String>,

    /// OR-group number; rows with the same group are interchangeable
    pub or_group: u32,

    /// Free-form requirement text (e.g., "Any 3000-level elective")
    pub description: Option<String>,

    /// Credit hours granted by a free-form requirement
    pub description_credits: Option<f32>,
}

impl ProgramRequirement {
    /// Whether this row names a concrete course rather than free-form text
    #[must_use]
    pub const fn is_course(&self) -> bool {
        self.course_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_deserialization() {
        let json = r#"{
            "program_id": "bs-cs",
            "option": 1,
            "core_area": "F",
            "course_id": "CS 1332",
            "or_group": 0,
            "description": null,
            "description_credits": null
        }"#;

        let req: ProgramRequirement = serde_json::from_str(json).expect("valid requirement JSON");
        assert_eq!(req.program_id, "bs-cs");
        assert_eq!(req.course_id.as_deref(), Some("CS 1332"));
        assert!(req.is_course());
        assert!(req.description.is_none());
    }

    #[test]
    fn test_free_form_requirement() {
        let req = ProgramRequirement {
            program_id: "bs-cs".to_string(),
            option: 1,
            core_area: None,
            course_id: None,
            or_group: 2,
            description: Some("Any free elective".to_string()),
            description_credits: Some(3.0),
        };

        assert!(!req.is_course());
        assert_eq!(req.description_credits, Some(3.0));
    }
}
