//! Parsers for Terraform state files

pub mod key;
pub mod state;

pub use key::{parse_key, ResourceKey};
pub use state::{parse_state, read_state};
