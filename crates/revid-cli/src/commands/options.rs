//! Options command implementation

use std::path::Path;

use colored::Colorize;
use revid_config::{ConfigKey, load_options};
use revid_git::RevisionSettings;
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct OptionsReport {
    settings: RevisionSettings,
    repository_directory: String,
    ignored_keys: Vec<String>,
}

/// Run the options command.
pub fn run_options(config: &Path, json: bool) -> Result<()> {
    let table = load_options(config)?;
    let settings = RevisionSettings::from_options(&table);

    let repository = settings.repository_directory(config);
    let repository_directory = dunce::canonicalize(&repository)
        .unwrap_or(repository)
        .display()
        .to_string();

    let known: Vec<String> = ConfigKey::ALL
        .iter()
        .map(|key| key.as_str().to_uppercase())
        .collect();
    let mut ignored_keys: Vec<String> = table
        .iter()
        .map(|(key, _)| key.to_string())
        .filter(|key| !known.contains(key))
        .collect();
    ignored_keys.sort();

    let report = OptionsReport {
        settings,
        repository_directory,
        ignored_keys,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let s = &report.settings;
    println!("{}", "Resolved Options".bold());
    println!();
    println!("{}:        {}", "Version".dimmed(), s.version_core());
    println!("{}:         {:?}", "Prefix".dimmed(), s.prefix);
    println!("{}:         {:?}", "Suffix".dimmed(), s.suffix);
    println!("{}:     {:?}", "Dirty mark".dimmed(), s.dirty_mark);
    println!("{}:    {:?}", "Broken mark".dimmed(), s.broken_mark);
    println!("{}:     {}", "References".dimmed(), s.reference_type);
    println!("{}:      {}", "Tag state".dimmed(), s.tag_state);
    println!("{}:        {}", "Parents".dimmed(), s.parent_commit);
    println!("{}:     {}", "Candidates".dimmed(), s.candidate_amount);
    println!("{}:         {}", "Abbrev".dimmed(), s.abbrev_length);
    println!("{}:          {}", "Match".dimmed(), s.match_patterns.join(", "));
    println!("{}:        {}", "Exclude".dimmed(), s.exclude_patterns.join(", "));
    println!("{}:     {}", "Repository".dimmed(), report.repository_directory);
    println!(
        "{}:      {} ({}::{}::{})",
        "Generated".dimmed(),
        s.generated_file_name,
        s.generated_namespace,
        s.generated_type_name,
        s.generated_field_name
    );

    if !report.ignored_keys.is_empty() {
        println!();
        println!("{}:", "Ignored keys".bold());
        for key in &report.ignored_keys {
            println!("  {} {}", "-".yellow(), key);
        }
    }
    Ok(())
}
