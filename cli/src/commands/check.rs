//! Check command - validates configuration

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    println!("{}", output::heading("Checking configuration..."));
    println!();

    if let Some(out) = &config.out {
        println!("  {}: {}", output::label("Output"), out.display());
    }

    for table in &config.tables {
        print!("  {} {}... ", output::label("Table"), table.name);

        match table.build() {
            Ok(definition) => {
                println!(
                    "{} {}",
                    output::status_ok(),
                    output::column_count(definition.columns().len())
                );
            }
            Err(source) => {
                println!("{}", output::status_error());
                return Err(CliError::Build {
                    table: table.name.clone(),
                    source,
                });
            }
        }
    }

    println!();
    println!(
        "{}",
        output::success(&format!("{} table(s) OK", config.tables.len()))
    );

    Ok(())
}
