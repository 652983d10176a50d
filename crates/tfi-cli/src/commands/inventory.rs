//! `--inventory`: groups in INI format

use anyhow::Context;
use std::io::Write;
use tfi_core::output::to_ini;
use tfi_core::{InventoryBuilder, StateDocument};

pub fn execute(
    builder: &InventoryBuilder,
    states: &[StateDocument],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let inventory = builder.aggregate(states);
    out.write_all(to_ini(&inventory).as_bytes()).context("Error writing Inventory")?;
    Ok(())
}
