//! targets command handler

use comfy_table::{presets::NOTHING, Table};
use std::io::Write;

use crate::concourse::token_expiry;
use crate::error::Result;
use crate::rc::RcStore;

/// List saved targets (no network access)
pub fn run_targets_command(store: &RcStore, out: &mut dyn Write) -> Result<()> {
    let rc = store.load()?;

    if rc.targets.is_empty() {
        writeln!(out, "no targets configured")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["NAME", "URL", "TEAM", "EXPIRY"]);

    for (name, props) in &rc.targets {
        let expiry = props
            .token
            .as_ref()
            .and_then(|t| token_expiry(&t.value))
            .map(|e| e.to_rfc2822())
            .unwrap_or_else(|| "n/a".to_string());

        table.add_row(vec![
            name.as_str(),
            props.api.as_str(),
            props.team.as_str(),
            expiry.as_str(),
        ]);
    }

    writeln!(out, "{table}")?;
    Ok(())
}
