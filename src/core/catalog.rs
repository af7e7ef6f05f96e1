//! Derived lookup indexes over the flat program data

use crate::core::models::{DegreeProgram, ProgramRequirement, TermAverages};
use std::collections::HashMap;

/// Lookup indexes built from the three flat arrays served by the data source.
///
/// The catalog is built in full each time the source data is (re)fetched and
/// is read-only afterward; consumers replace the whole catalog rather than
/// mutating it in place. Foreign keys are not validated: a requirement or
/// averages row referencing an unknown program simply never surfaces through
/// the program-keyed accessors.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs_by_id: HashMap<String, DegreeProgram>,
    requirements_by_program: HashMap<String, Vec<ProgramRequirement>>,
    averages_by_program: HashMap<String, Vec<TermAverages>>,
    averages_by_term: HashMap<String, Vec<TermAverages>>,
}

impl ProgramCatalog {
    /// Build all four indexes from flat slices.
    ///
    /// A single pass per output map: the id map keeps the last record seen for
    /// a duplicate id, and the grouped maps append in source order, so each
    /// per-key sequence preserves the relative order of the input. Empty
    /// inputs produce empty maps; this never fails.
    #[must_use]
    pub fn build(
        programs: &[DegreeProgram],
        requirements: &[ProgramRequirement],
        averages: &[TermAverages],
    ) -> Self {
        let mut programs_by_id = HashMap::with_capacity(programs.len());
        for program in programs {
            programs_by_id.insert(program.id.clone(), program.clone());
        }

        let mut requirements_by_program: HashMap<String, Vec<ProgramRequirement>> = HashMap::new();
        for requirement in requirements {
            requirements_by_program
                .entry(requirement.program_id.clone())
                .or_default()
                .push(requirement.clone());
        }

        let mut averages_by_program: HashMap<String, Vec<TermAverages>> = HashMap::new();
        let mut averages_by_term: HashMap<String, Vec<TermAverages>> = HashMap::new();
        for row in averages {
            averages_by_program
                .entry(row.program.clone())
                .or_default()
                .push(row.clone());
            averages_by_term
                .entry(row.term.clone())
                .or_default()
                .push(row.clone());
        }

        Self {
            programs_by_id,
            requirements_by_program,
            averages_by_program,
            averages_by_term,
        }
    }

    /// Look up a program by id
    #[must_use]
    pub fn program(&self, id: &str) -> Option<&DegreeProgram> {
        self.programs_by_id.get(id)
    }

    /// Requirements for a program, in source order (empty if unknown)
    #[must_use]
    pub fn requirements_for(&self, program_id: &str) -> &[ProgramRequirement] {
        self.requirements_by_program
            .get(program_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Term averages for a program, in source order (empty if unknown)
    #[must_use]
    pub fn averages_for_program(&self, program_id: &str) -> &[TermAverages] {
        self.averages_by_program
            .get(program_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Averages across programs for a term, in source order (empty if unknown)
    #[must_use]
    pub fn averages_for_term(&self, term: &str) -> &[TermAverages] {
        self.averages_by_term.get(term).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct program ids in the catalog
    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs_by_id.len()
    }

    /// Whether the catalog holds no data at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs_by_id.is_empty()
            && self.requirements_by_program.is_empty()
            && self.averages_by_program.is_empty()
    }

    /// Iterate over all indexed programs (arbitrary order)
    pub fn programs(&self) -> impl Iterator<Item = &DegreeProgram> {
        self.programs_by_id.values()
    }

    /// Distinct terms present in the averages data (arbitrary order)
    pub fn terms(&self) -> impl Iterator<Item = &String> {
        self.averages_by_term.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: &str, name: &str) -> DegreeProgram {
        DegreeProgram::new(id.to_string(), name.to_string())
    }

    fn requirement(program_id: &str, course_id: &str) -> ProgramRequirement {
        ProgramRequirement {
            program_id: program_id.to_string(),
            option: 1,
            core_area: None,
            course_id: Some(course_id.to_string()),
            or_group: 0,
            description: None,
            description_credits: None,
        }
    }

    fn averages(program_id: &str, term: &str) -> TermAverages {
        TermAverages {
            program: program_id.to_string(),
            term: term.to_string(),
            a: Some(40.0),
            b: Some(30.0),
            c: Some(15.0),
            d: Some(5.0),
            f: Some(5.0),
            w: Some(5.0),
            gpa: Some(3.0),
            enrollment: Some(100),
        }
    }

    #[test]
    fn test_empty_inputs_yield_empty_catalog() {
        let catalog = ProgramCatalog::build(&[], &[], &[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.program_count(), 0);
        assert!(catalog.program("bs-cs").is_none());
        assert!(catalog.requirements_for("bs-cs").is_empty());
        assert!(catalog.averages_for_term("Fall 2024").is_empty());
    }

    #[test]
    fn test_program_lookup_by_id() {
        let programs = vec![program("bs-cs", "Computer Science"), program("bs-ee", "EE")];
        let catalog = ProgramCatalog::build(&programs, &[], &[]);

        assert_eq!(catalog.program_count(), 2);
        assert_eq!(catalog.program("bs-cs").unwrap().name, "Computer Science");
        assert!(catalog.program("bs-me").is_none());
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        let programs = vec![program("bs-cs", "Old Name"), program("bs-cs", "New Name")];
        let catalog = ProgramCatalog::build(&programs, &[], &[]);

        assert_eq!(catalog.program_count(), 1);
        assert_eq!(catalog.program("bs-cs").unwrap().name, "New Name");
    }

    #[test]
    fn test_requirements_grouped_in_source_order() {
        let requirements = vec![
            requirement("bs-cs", "CS 1332"),
            requirement("bs-ee", "ECE 2020"),
            requirement("bs-cs", "CS 2110"),
            requirement("bs-cs", "MATH 1554"),
        ];
        let catalog = ProgramCatalog::build(&[], &requirements, &[]);

        let cs = catalog.requirements_for("bs-cs");
        let courses: Vec<_> = cs.iter().filter_map(|r| r.course_id.as_deref()).collect();
        assert_eq!(courses, vec!["CS 1332", "CS 2110", "MATH 1554"]);
        assert_eq!(catalog.requirements_for("bs-ee").len(), 1);
    }

    #[test]
    fn test_grouped_union_preserves_multiset() {
        let requirements = vec![
            requirement("bs-cs", "CS 1332"),
            requirement("bs-cs", "CS 1332"), // real data can repeat rows
            requirement("bs-ee", "ECE 2020"),
        ];
        let catalog = ProgramCatalog::build(&[], &requirements, &[]);

        let total: usize = catalog.requirements_for("bs-cs").len()
            + catalog.requirements_for("bs-ee").len();
        assert_eq!(total, requirements.len());
    }

    #[test]
    fn test_averages_grouped_both_ways() {
        let rows = vec![
            averages("bs-cs", "Fall 2024"),
            averages("bs-cs", "Spring 2025"),
            averages("bs-ee", "Fall 2024"),
        ];
        let catalog = ProgramCatalog::build(&[], &[], &rows);

        assert_eq!(catalog.averages_for_program("bs-cs").len(), 2);
        assert_eq!(catalog.averages_for_term("Fall 2024").len(), 2);
        assert_eq!(catalog.averages_for_term("Spring 2025").len(), 1);

        // term grouping keeps source order too
        let fall = catalog.averages_for_term("Fall 2024");
        assert_eq!(fall[0].program, "bs-cs");
        assert_eq!(fall[1].program, "bs-ee");
    }

    #[test]
    fn test_dangling_references_are_tolerated() {
        let programs = vec![program("bs-cs", "Computer Science")];
        let requirements = vec![requirement("bs-nonexistent", "XX 1000")];
        let catalog = ProgramCatalog::build(&programs, &requirements, &[]);

        // Dangling rows are still indexed; they just never match a program.
        assert!(catalog.program("bs-nonexistent").is_none());
        assert_eq!(catalog.requirements_for("bs-nonexistent").len(), 1);
    }

    #[test]
    fn test_build_is_idempotent() {
        let programs = vec![program("bs-cs", "CS"), program("bs-ee", "EE")];
        let requirements = vec![requirement("bs-cs", "CS 1332")];
        let rows = vec![averages("bs-cs", "Fall 2024")];

        let first = ProgramCatalog::build(&programs, &requirements, &rows);
        let second = ProgramCatalog::build(&programs, &requirements, &rows);

        assert_eq!(first.program_count(), second.program_count());
        assert_eq!(first.program("bs-cs"), second.program("bs-cs"));
        assert_eq!(
            first.requirements_for("bs-cs"),
            second.requirements_for("bs-cs")
        );
        assert_eq!(
            first.averages_for_term("Fall 2024"),
            second.averages_for_term("Fall 2024")
        );
    }
}
