//! Team output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::join_or_none;
use crate::cli::OutputFormat;
use crate::concourse::Team;
use crate::error::Result;

/// Serializable team for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableTeam<'a> {
    name: &'a str,
    users: &'a [String],
    groups: &'a [String],
}

impl<'a> From<&'a Team> for SerializableTeam<'a> {
    fn from(team: &'a Team) -> Self {
        Self {
            name: &team.name,
            users: team.users(),
            groups: team.groups(),
        }
    }
}

/// Render teams in the requested format
pub fn render_teams(teams: &[Team], format: OutputFormat, details: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(teams, details)),
        OutputFormat::Json => {
            let rows: Vec<SerializableTeam> = teams.iter().map(SerializableTeam::from).collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Yaml => {
            let rows: Vec<SerializableTeam> = teams.iter().map(SerializableTeam::from).collect();
            Ok(serde_yml::to_string(&rows)?)
        }
    }
}

fn render_table(teams: &[Team], details: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if details {
        table.set_header(vec!["NAME", "USERS", "GROUPS"]);
    } else {
        table.set_header(vec!["NAME"]);
    }

    for team in teams {
        if details {
            table.add_row(vec![
                team.name.clone(),
                join_or_none(team.users()),
                join_or_none(team.groups()),
            ]);
        } else {
            table.add_row(vec![team.name.clone()]);
        }
    }

    table.to_string()
}
