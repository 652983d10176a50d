//! Inventory group classification

use crate::providers::ProviderRegistry;
use crate::types::Attributes;

/// Groups a resource belongs to
///
/// Always contains the base name and `type_<resource_type>`, followed by any
/// provider-derived groups and one `<key>_<value>` group per tag. Names are
/// unique and keep first-seen order.
pub fn classify(
    registry: &ProviderRegistry,
    resource_type: &str,
    base_name: &str,
    attributes: &Attributes,
) -> Vec<String> {
    let rules = registry.rules_for(resource_type);

    let mut groups = vec![base_name.to_string(), format!("type_{resource_type}")];
    groups.extend(rules.extra_groups(attributes));
    groups.extend(
        rules
            .extract_tags(attributes)
            .into_iter()
            .map(|(key, value)| format!("{key}_{value}")),
    );

    let mut seen = std::collections::HashSet::new();
    groups.retain(|g| seen.insert(g.clone()));
    groups
}
