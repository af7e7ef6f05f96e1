//! Programs command handler

use crate::args::ProgramsSubcommand;
use planpath::core::config::Config;
use planpath::core::models::{ProgramRequirement, TermAverages};
use planpath::core::service::ProgramService;
use planpath::fetch::select_source;
use planpath::{error, verbose};

/// Dispatch programs subcommands
pub async fn run(subcommand: ProgramsSubcommand, config: &Config) {
    let service = match ProgramService::load(select_source(&config.api)).await {
        Ok(service) => service,
        Err(err) => {
            error!("Failed to load program data: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };
    verbose!("Loaded {} degree programs", service.programs().len());

    match subcommand {
        ProgramsSubcommand::List { search } => handle_list(&service, search.as_deref()),
        ProgramsSubcommand::Show { id } => handle_show(&service, &id),
        ProgramsSubcommand::Requirements { id } => handle_requirements(&service, &id),
        ProgramsSubcommand::Averages { id, term } => {
            handle_averages(&service, id.as_deref(), term.as_deref());
        }
    }
}

fn handle_list(service: &ProgramService, search: Option<&str>) {
    let programs = search.map_or_else(
        || service.programs().iter().collect(),
        |query| service.search(query),
    );

    if programs.is_empty() {
        println!("No programs matched.");
        return;
    }
    for program in programs {
        println!("{:<12} {}", program.id, program.name);
    }
}

fn handle_show(service: &ProgramService, id: &str) {
    let Some(program) = service.program(id) else {
        eprintln!("✗ Unknown program id: '{id}'");
        std::process::exit(1);
    };

    println!("{} ({})", program.name, program.id);
    println!("  Credits: {}", program.total_credits);
    println!("  Link:    {}", program.link);
    if !program.overview.is_empty() {
        println!("\n{}", program.overview);
    }

    let requirement_count = service.requirements_for(id).len();
    let term_count = service.averages_for_program(id).len();
    println!("\n{requirement_count} requirement rows, {term_count} terms of grade history");
}

fn handle_requirements(service: &ProgramService, id: &str) {
    let requirements = service.requirements_for(id);
    if requirements.is_empty() {
        println!("No requirements on record for '{id}'.");
        return;
    }
    for requirement in requirements {
        println!("{}", format_requirement(requirement));
    }
}

fn format_requirement(requirement: &ProgramRequirement) -> String {
    let area = requirement.core_area.as_deref().unwrap_or("-");
    let what = requirement.course_id.as_deref().map_or_else(
        || {
            let text = requirement.description.as_deref().unwrap_or("(unspecified)");
            requirement.description_credits.map_or_else(
                || text.to_string(),
                |credits| format!("{text} ({credits} cr)"),
            )
        },
        ToString::to_string,
    );
    format!(
        "option {}  area {:<3} group {}  {what}",
        requirement.option, area, requirement.or_group
    )
}

fn handle_averages(service: &ProgramService, id: Option<&str>, term: Option<&str>) {
    let rows: Vec<&TermAverages> = match (id, term) {
        (Some(id), Some(term)) => service
            .averages_for_program(id)
            .iter()
            .filter(|row| row.term == term)
            .collect(),
        (Some(id), None) => service.averages_for_program(id).iter().collect(),
        (None, Some(term)) => service.averages_for_term(term).iter().collect(),
        (None, None) => {
            eprintln!("✗ Provide a program id, --term, or both.");
            std::process::exit(1);
        }
    };

    if rows.is_empty() {
        println!("No grade history matched.");
        return;
    }
    for row in rows {
        println!("{}", format_averages(row));
    }
}

fn format_averages(row: &TermAverages) -> String {
    let gpa = row
        .gpa
        .map_or_else(|| "  n/a".to_string(), |gpa| format!("{gpa:.2}"));
    let enrollment = row
        .enrollment
        .map_or_else(|| "n/a".to_string(), |n| n.to_string());
    format!(
        "{:<12} {:<14} GPA {gpa}  enrolled {enrollment}",
        row.program, row.term
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_requirement_course_row() {
        let requirement = ProgramRequirement {
            program_id: "bs-cs".to_string(),
            option: 1,
            core_area: Some("F".to_string()),
            course_id: Some("CS 1332".to_string()),
            or_group: 0,
            description: None,
            description_credits: None,
        };
        let line = format_requirement(&requirement);
        assert!(line.contains("CS 1332"));
        assert!(line.contains("area F"));
    }

    #[test]
    fn test_format_requirement_free_form_row() {
        let requirement = ProgramRequirement {
            program_id: "bs-cs".to_string(),
            option: 2,
            core_area: None,
            course_id: None,
            or_group: 3,
            description: Some("Any free elective".to_string()),
            description_credits: Some(6.0),
        };
        let line = format_requirement(&requirement);
        assert!(line.contains("Any free elective"));
        assert!(line.contains("6 cr"));
    }

    #[test]
    fn test_format_averages_with_missing_data() {
        let row = TermAverages {
            program: "bs-math".to_string(),
            term: "Summer 2024".to_string(),
            a: None,
            b: None,
            c: None,
            d: None,
            f: None,
            w: None,
            gpa: None,
            enrollment: None,
        };
        let line = format_averages(&row);
        assert!(line.contains("n/a"));
    }
}
