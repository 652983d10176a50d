//! `--host`: one host's variables as JSON

use anyhow::Context;
use std::io::Write;
use tfi_core::output::to_json;
use tfi_core::{InventoryBuilder, StateDocument};

pub fn execute(
    builder: &InventoryBuilder,
    states: &[StateDocument],
    id: &str,
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let attributes = builder.find_host(states, id)?;
    let json = to_json(&attributes, pretty).context("Error encoding JSON")?;
    out.write_all(json.as_bytes()).context("Error writing JSON")?;
    Ok(())
}
