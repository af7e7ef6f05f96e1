//! Profile command handler

use crate::args::ProfileSubcommand;
use planpath::core::config::Config;
use planpath::core::service::ProfileService;
use planpath::fetch::select_profile_store;
use planpath::verbose;
use serde_json::Value;

/// Dispatch profile subcommands
pub async fn run(subcommand: ProfileSubcommand, config: &Config) {
    match subcommand {
        ProfileSubcommand::Show { id } => handle_show(&id, config).await,
        ProfileSubcommand::Set { id, field, value } => handle_set(&id, &field, &value, config).await,
    }
}

async fn handle_show(id: &str, config: &Config) {
    let service = ProfileService::new(select_profile_store(&config.api), id.to_string());
    match service.refresh().await {
        Ok(profile) => {
            println!("{} ({})", profile.name, profile.id);
            println!(
                "  Year:    {}",
                profile.year.map_or_else(|| "-".to_string(), |y| y.to_string())
            );
            println!(
                "  Program: {}",
                profile.degree_program_id.as_deref().unwrap_or("-")
            );
            println!("  Minor:   {}", profile.minor_id.as_deref().unwrap_or("-"));
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

async fn handle_set(id: &str, field: &str, raw_value: &str, config: &Config) {
    let service = ProfileService::new(select_profile_store(&config.api), id.to_string());
    let value = parse_value(raw_value);

    service.set_field(field, value);
    verbose!("Staged {field} update, waiting out the debounce window");

    // One-shot process: wait for the debounced write instead of dropping it.
    service.flush().await;

    match service.profile().await {
        Some(profile) => {
            println!("✓ Updated {field} for {}", profile.id);
        }
        None => {
            // The write failed and was logged; surface a terse note here too.
            eprintln!("✗ Update for {field} did not persist (see log)");
            std::process::exit(1);
        }
    }
}

/// Interpret the raw CLI value: JSON when it parses, bare string otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_number() {
        assert_eq!(parse_value("2027"), Value::from(2027));
    }

    #[test]
    fn test_parse_value_null() {
        assert_eq!(parse_value("null"), Value::Null);
    }

    #[test]
    fn test_parse_value_bare_string() {
        assert_eq!(parse_value("bs-cs"), Value::from("bs-cs"));
    }

    #[test]
    fn test_parse_value_quoted_string() {
        assert_eq!(parse_value("\"bs-cs\""), Value::from("bs-cs"));
    }
}
