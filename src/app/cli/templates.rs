//! Template listing and inspection.

use clap::Subcommand;

use crate::adapters::catalogs::builtin_registry;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List built-in templates
    #[clap(visible_alias = "ls")]
    List,
    /// Print a template definition as YAML
    Show {
        /// Template id
        id: String,
    },
}

pub fn run_templates(command: TemplatesCommands) -> Result<(), AppError> {
    let registry = builtin_registry()?;

    match command {
        TemplatesCommands::List => {
            let templates = registry.list();
            let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
            for template in templates {
                println!("{:<width$}  {}", template.id, template.name, width = width);
            }
        }
        TemplatesCommands::Show { id } => {
            let template = registry.get(&id).ok_or_else(|| AppError::TemplateNotFound(id))?;
            let yaml = serde_yaml::to_string(template).map_err(|e| AppError::ParseError {
                what: format!("template {}", template.id),
                details: e.to_string(),
            })?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
