//! Search command handler

use planpath::core::config::Config;
use planpath::core::service::ProgramService;
use planpath::error;
use planpath::fetch::select_source;

/// Run a token-filter search over program names and print the matches.
///
/// The query string is passed through verbatim; spacing matters to the
/// matcher, so the shell quoting the user chose is respected.
pub async fn run(query: &str, config: &Config) {
    let service = match ProgramService::load(select_source(&config.api)).await {
        Ok(service) => service,
        Err(err) => {
            error!("Failed to load program data: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    let matches = service.search(query);
    if matches.is_empty() {
        println!("No programs matched '{query}'.");
        return;
    }

    println!("{} match(es):", matches.len());
    for program in matches {
        println!("{:<12} {}", program.id, program.name);
    }
}
