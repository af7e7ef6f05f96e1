//! Data models for `PlanPath`

pub mod averages;
pub mod profile;
pub mod program;
pub mod requirement;

pub use averages::TermAverages;
pub use profile::StudentProfile;
pub use program::DegreeProgram;
pub use requirement::ProgramRequirement;
