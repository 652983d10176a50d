//! Process configuration read from the environment

use crate::address::AddressResolver;
use std::path::PathBuf;

/// Environment variable naming the state file
pub const STATE_ENV: &str = "TF_STATE";

/// Older name for [`STATE_ENV`]
pub const LEGACY_STATE_ENV: &str = "TI_TFSTATE";

/// Environment variable naming the attribute to use as address
pub const KEY_NAME_ENV: &str = "TF_KEY_NAME";

/// Configuration read once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// State file to load when none is given on the command line
    pub state_path: Option<PathBuf>,
    /// Attribute overriding the address candidate list
    pub key_name: Option<String>,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            state_path: get(STATE_ENV)
                .or_else(|| get(LEGACY_STATE_ENV))
                .map(PathBuf::from),
            key_name: get(KEY_NAME_ENV),
        }
    }

    /// Address resolver honoring the configured override key
    pub fn address_resolver(&self) -> AddressResolver {
        AddressResolver::new(self.key_name.clone())
    }
}
