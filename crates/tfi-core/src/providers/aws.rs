//! Amazon EC2 instances

use super::ProviderRules;
use crate::types::Attributes;
use std::collections::BTreeMap;

/// Rules for `aws_instance`
///
/// Attributes pass through unchanged. Tags are stored flattened as
/// `tags.<key>`, with a count marker entry: `tags.#` in older state files,
/// `tags.%` from state version 3 on.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsInstance;

const COUNT_MARKERS: &[&str] = &["#", "%"];

impl ProviderRules for AwsInstance {
    fn extract_tags(&self, attributes: &Attributes) -> BTreeMap<String, String> {
        attributes
            .iter()
            .filter_map(|(key, value)| {
                let tag = key.strip_prefix("tags.")?;
                if COUNT_MARKERS.contains(&tag) {
                    return None;
                }
                Some((tag.to_lowercase(), value.to_lowercase()))
            })
            .collect()
    }
}
