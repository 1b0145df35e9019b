//! Dry-run commands that never call the model

use crate::cli::SourceArgs;
use crate::error::CliError;
use site_briefing::prompt::render_briefing_prompt;

/// Print the briefing prompt the model would receive
pub fn print_prompt(source: &SourceArgs) -> Result<(), CliError> {
    let answers = source.load()?.normalize()?;
    print!("{}", render_briefing_prompt(&answers));
    Ok(())
}

/// Print the canonical answers as pretty JSON
pub fn print_normalized(source: &SourceArgs) -> Result<(), CliError> {
    let answers = source.load()?.normalize()?;
    println!("{}", serde_json::to_string_pretty(&answers)?);
    Ok(())
}
