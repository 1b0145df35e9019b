//! Blank answers sheet

use crate::error::CliError;
use site_briefing::normalize::table_template;
use std::path::Path;

pub fn write_template(output: Option<&Path>) -> Result<(), CliError> {
    let template = table_template()?;
    match output {
        Some(path) => {
            std::fs::write(path, &template)?;
            println!("Modelo salvo em {}", path.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}
