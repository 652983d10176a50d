//! Output formatters for inventories

pub mod ini;
pub mod json;

pub use ini::to_ini;
pub use json::to_json;
