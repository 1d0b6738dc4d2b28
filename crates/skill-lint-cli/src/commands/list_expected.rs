//! List expected reference files command implementation.

use anyhow::Result;

use crate::config_resolver::ConfigSource;

/// Runs the list-expected command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    println!("Expected reference files:\n");
    println!("{:<35} {:<10} Max lines", "File", "Role");
    println!("{}", "-".repeat(60));

    for entry in config.curated() {
        println!("{:<35} {:<10} {}", entry.name, "curated", entry.max_lines);
    }
    for entry in config.indexes() {
        println!("{:<35} {:<10} -", entry.name, "index");
    }

    println!(
        "\n{} must stay within {} lines and mention every file above.",
        config.root_file, config.root_max_lines
    );
    println!(
        "Curated files must contain a \"{}\" section.",
        config.section_marker
    );

    Ok(())
}
