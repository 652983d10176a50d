//! `--list`: full inventory as JSON

use anyhow::Context;
use std::io::Write;
use tfi_core::output::to_json;
use tfi_core::{InventoryBuilder, StateDocument};

pub fn execute(
    builder: &InventoryBuilder,
    states: &[StateDocument],
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let inventory = builder.aggregate(states);
    let json = to_json(&inventory, pretty).context("Error encoding JSON")?;
    out.write_all(json.as_bytes()).context("Error writing JSON")?;
    Ok(())
}
