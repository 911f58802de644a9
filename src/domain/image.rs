//! Container image entries offered in the form, grouped by user group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A selectable container image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub display: String,
    pub reference: String,
}

impl ImageEntry {
    pub fn new(display: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            reference: reference.into(),
        }
    }
}

/// Configured image lists keyed by an opaque group identifier, with a
/// default list for users that belong to no known group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageCatalog {
    #[serde(default)]
    pub default: Vec<ImageEntry>,
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<ImageEntry>>,
}

impl ImageCatalog {
    /// Images for a single group; unknown groups yield nothing.
    pub fn for_group(&self, group: &str) -> &[ImageEntry] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Flattened image list for a user's groups, in group order.
    ///
    /// A user with no groups falls back to the default list.
    pub fn for_groups(&self, groups: &[String]) -> Vec<ImageEntry> {
        if groups.is_empty() {
            return self.default.clone();
        }
        groups
            .iter()
            .flat_map(|group| self.for_group(group))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ImageCatalog {
        let mut groups = BTreeMap::new();
        groups.insert(
            "group_a".to_string(),
            vec![ImageEntry::new("base image group_a", "jupyterhub/singleuser")],
        );
        groups.insert(
            "group_b".to_string(),
            vec![ImageEntry::new("base image group_b", "jupyterhub/singleuser")],
        );
        ImageCatalog {
            default: vec![ImageEntry::new("base", "jupyterhub/singleuser")],
            groups,
        }
    }

    #[test]
    fn unknown_group_is_empty() {
        assert!(catalog().for_group("nope").is_empty());
    }

    #[test]
    fn no_groups_falls_back_to_default() {
        let images = catalog().for_groups(&[]);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].display, "base");
    }

    #[test]
    fn groups_flatten_in_order() {
        let images = catalog().for_groups(&["group_b".into(), "group_a".into()]);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].display, "base image group_b");
    }
}
