//! Per-term grade distribution model

use serde::{Deserialize, Serialize};

/// Aggregated grade distribution for one program in one term.
///
/// Percentages and GPA may be absent for terms where the registrar reported
/// no data; absence is normal and must not be treated as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermAverages {
    /// Program identifier (foreign key to `DegreeProgram::id`)
    pub program: String,

    /// Term label (e.g., "Fall 2024")
    pub term: String,

    /// Percentage of A grades
    #[serde(rename = "A")]
    pub a: Option<f64>,

    /// Percentage of B grades
    #[serde(rename = "B")]
    pub b: Option<f64>,

    /// Percentage of C grades
    #[serde(rename = "C")]
    pub c: Option<f64>,

    /// Percentage of D grades
    #[serde(rename = "D")]
    pub d: Option<f64>,

    /// Percentage of F grades
    #[serde(rename = "F")]
    pub f: Option<f64>,

    /// Percentage of withdrawals
    #[serde(rename = "W")]
    pub w: Option<f64>,

    /// Mean grade point average for the term
    #[serde(rename = "GPA")]
    pub gpa: Option<f64>,

    /// Number of enrolled students
    pub enrollment: Option<u32>,
}

impl TermAverages {
    /// Whether the registrar reported any grade data for this term
    #[must_use]
    pub const fn has_grades(&self) -> bool {
        self.a.is_some()
            || self.b.is_some()
            || self.c.is_some()
            || self.d.is_some()
            || self.f.is_some()
            || self.w.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages_deserialization_uppercase_fields() {
        let json = r#"{
            "program": "bs-cs",
            "term": "Fall 2024",
            "A": 42.5,
            "B": 30.1,
            "C": 15.0,
            "D": 5.2,
            "F": 3.2,
            "W": 4.0,
            "GPA": 3.11,
            "enrollment": 812
        }"#;

        let row: TermAverages = serde_json::from_str(json).expect("valid averages JSON");
        assert_eq!(row.term, "Fall 2024");
        assert_eq!(row.gpa, Some(3.11));
        assert_eq!(row.enrollment, Some(812));
        assert!(row.has_grades());
    }

    #[test]
    fn test_averages_with_missing_data() {
        let json = r#"{
            "program": "bs-cs",
            "term": "Summer 2020",
            "A": null, "B": null, "C": null, "D": null, "F": null, "W": null,
            "GPA": null,
            "enrollment": null
        }"#;

        let row: TermAverages = serde_json::from_str(json).expect("valid sparse JSON");
        assert!(!row.has_grades());
        assert!(row.gpa.is_none());
    }
}
