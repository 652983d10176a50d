//! tfi core - Terraform state to Ansible dynamic inventory
//!
//! This crate turns one or more parsed Terraform state documents into the
//! grouped inventory structure Ansible expects from a dynamic inventory
//! script. It performs no network access and never modifies state files.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]

pub mod address;
pub mod config;
pub mod discover;
pub mod error;
pub mod groups;
pub mod inventory;
pub mod output;
pub mod parser;
pub mod providers;
pub mod types;

pub use address::AddressResolver;
pub use config::Config;
pub use error::{InventoryError, InventoryResult};
pub use inventory::{GroupValue, Inventory, InventoryBuilder};
pub use providers::{ProviderRegistry, ProviderRules};
pub use types::{Attributes, OutputVariable, Resource, StateDocument};
