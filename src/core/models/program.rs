//! Degree program model

use serde::{Deserialize, Serialize};

/// Represents a degree program offered by the institution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeProgram {
    /// Unique program identifier (e.g., "bs-cs")
    pub id: String,

    /// Display name (e.g., "Bachelor of Science in Computer Science")
    pub name: String,

    /// Short description of the program
    pub overview: String,

    /// Total credit hours required to graduate
    pub total_credits: f32,

    /// Link to the official program page
    pub link: String,
}

impl DegreeProgram {
    /// Create a new degree program
    ///
    /// # Arguments
    /// * `id` - Unique program identifier
    /// * `name` - Display name
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            overview: String::new(),
            total_credits: 0.0,
            link: String::new(),
        }
    }
}
