//! Configuration subcommand handlers

use crate::args::ConfigSubcommand;
use planpath::core::config::Config;
use std::io::{self, Write};

/// Route a `config` subcommand; bare `planpath config` shows everything.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_one(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset_all(),
    }
}

fn show_all(config: &Config) {
    println!(
        "PlanPath configuration ({})\n",
        Config::get_config_file_path().display()
    );
    print!("{config}");
}

fn show_one(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => {
            eprintln!("✗ No such config key: '{key}'");
            std::process::exit(1);
        }
    }
}

fn persist(config: &Config) {
    if let Err(err) = config.save() {
        eprintln!("✗ Could not write config file: {err}");
        std::process::exit(1);
    }
}

fn set_key(config: &mut Config, key: &str, value: &str) {
    if let Err(err) = config.set(key, value) {
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
    persist(config);
    println!("✓ {key} = {value}");
}

fn unset_key(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(err) = config.unset(key, defaults) {
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
    persist(config);
    println!("✓ {key} restored to its default");
}

/// Delete the config file after confirmation; the next run recreates it from
/// the compiled-in defaults.
fn reset_all() {
    if !Config::get_config_file_path().exists() {
        println!("Nothing to reset; no config file on disk.");
        return;
    }

    print!("Delete the config file and fall back to defaults? [y/N] ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).ok();

    if confirmed(&answer) {
        if let Err(err) = Config::reset() {
            eprintln!("✗ Could not delete config file: {err}");
            std::process::exit(1);
        }
        println!("✓ Config reset; defaults will be rewritten on next run.");
    } else {
        println!("Reset cancelled.");
    }
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
