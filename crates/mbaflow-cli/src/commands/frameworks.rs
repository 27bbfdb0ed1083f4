//! Implementation of the `mbaflow frameworks` command.

use serde::Serialize;

use mbaflow_core::{domain::Framework, error::MbaflowError};

use crate::{
    cli::{FrameworksArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct FrameworkEntry {
    index: usize,
    name: Framework,
    definition: &'static str,
}

impl From<Framework> for FrameworkEntry {
    fn from(framework: Framework) -> Self {
        Self {
            index: framework.menu_index(),
            name: framework,
            definition: framework.definition(),
        }
    }
}

pub fn execute(args: FrameworksArgs, output: OutputManager) -> CliResult<()> {
    let selected = select(args.name.as_deref())?;

    match args.format {
        ListFormat::Table => {
            output.header("Available frameworks:")?;
            for framework in selected {
                output.print(&format!("{}. {}", framework.menu_index(), framework))?;
                output.print(&format!("   {}", framework.definition()))?;
            }
        }
        ListFormat::List => {
            for framework in selected {
                output.print(framework.as_str())?;
            }
        }
        ListFormat::Json => {
            let entries: Vec<FrameworkEntry> = selected.into_iter().map(Into::into).collect();
            output.json(&entries)?;
        }
    }

    Ok(())
}

fn select(name: Option<&str>) -> CliResult<Vec<Framework>> {
    match name {
        Some(name) => {
            let framework = name.parse::<Framework>().map_err(MbaflowError::from)?;
            Ok(vec![framework])
        }
        None => Ok(Framework::ALL.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_selects_all_in_menu_order() {
        let all = select(None).unwrap();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Framework::PortersFiveForces);
    }

    #[test]
    fn alias_filter() {
        assert_eq!(select(Some("pestel")).unwrap(), vec![Framework::Pestel]);
    }

    #[test]
    fn unknown_name_is_user_error() {
        let err = select(Some("balanced scorecard")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn entry_serialises_display_name() {
        let value = serde_json::to_value(FrameworkEntry::from(Framework::McKinsey7S)).unwrap();
        assert_eq!(value["index"], 7);
        assert_eq!(value["name"], "McKinsey 7S");
        assert!(value["definition"].as_str().unwrap().contains("Strategy"));
    }
}
