//! terraform-inventory - Ansible dynamic inventory for Terraform state
//!
//! Provides `--list`, `--inventory` and `--host` modes over one or more
//! state files.

mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tfi_core::discover::find_state_files;
use tfi_core::parser::read_state;
use tfi_core::{Config, InventoryBuilder, StateDocument};

use commands::Mode;

#[derive(Parser)]
#[command(name = "terraform-inventory")]
#[command(about = "Ansible dynamic inventory from Terraform state files")]
#[command(version)]
struct Cli {
    /// List mode: print all groups and host variables as JSON
    #[arg(long)]
    list: bool,

    /// Inventory mode: print groups in INI format
    #[arg(long)]
    inventory: bool,

    /// Host mode: print the variables of a single host as JSON
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,

    /// State file (defaults to $TF_STATE, then $TI_TFSTATE, then every
    /// *.tfstate file in the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

impl Cli {
    /// Selected mode; list wins over inventory, which wins over host
    fn mode(&self) -> Option<Mode> {
        if self.list {
            Some(Mode::List)
        } else if self.inventory {
            Some(Mode::Inventory)
        } else {
            self.host
                .as_ref()
                .filter(|h| !h.is_empty())
                .map(|h| Mode::Host(h.clone()))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_env();

    let files = match cli.path.clone().or_else(|| config.state_path.clone()) {
        Some(path) => vec![path],
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            find_state_files(&cwd)?
        }
    };

    let mode = cli
        .mode()
        .context("Either --host or --list must be specified")?;

    let states = load_states(&files)?;
    let builder = InventoryBuilder::new().with_address_resolver(config.address_resolver());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&mode, &builder, &states, cli.pretty, &mut out)?;
    out.flush().context("Error writing output")?;
    Ok(())
}

fn load_states(files: &[PathBuf]) -> anyhow::Result<Vec<StateDocument>> {
    files
        .iter()
        .map(|file| {
            read_state(file)
                .with_context(|| format!("Error reading tfstate file {}", file.display()))
        })
        .collect()
}
