//! Output mode handlers
//!
//! Each mode renders the state documents to a writer.

pub mod host;
pub mod inventory;
pub mod list;

use std::io::Write;
use tfi_core::{InventoryBuilder, StateDocument};

/// What to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// All groups and hostvars as JSON
    List,
    /// All groups as INI text
    Inventory,
    /// One host's variables as JSON
    Host(String),
}

/// Execute the selected mode
pub fn execute(
    mode: &Mode,
    builder: &InventoryBuilder,
    states: &[StateDocument],
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match mode {
        Mode::List => list::execute(builder, states, pretty, out),
        Mode::Inventory => inventory::execute(builder, states, out),
        Mode::Host(id) => host::execute(builder, states, id, pretty, out),
    }
}
