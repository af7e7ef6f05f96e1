//! Student profile model

use serde::{Deserialize, Serialize};

/// A student's planning profile.
///
/// Edits go through the debounced field updater one field at a time; the
/// struct itself is only ever replaced wholesale by a refresh, never mutated
/// field by field on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Unique profile record identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Expected graduation year
    pub year: Option<u32>,

    /// Selected degree program (foreign key to `DegreeProgram::id`)
    pub degree_program_id: Option<String>,

    /// Selected minor program, when declared
    pub minor_id: Option<String>,
}

/// Profile field names accepted by the update endpoint.
pub mod fields {
    /// Expected graduation year
    pub const YEAR: &str = "year";
    /// Selected degree program
    pub const DEGREE_PROGRAM_ID: &str = "degree_program_id";
    /// Selected minor program
    pub const MINOR_ID: &str = "minor_id";
    /// Display name
    pub const NAME: &str = "name";
}
