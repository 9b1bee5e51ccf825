use crate::package_listing::domain::PackageSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// A package present in both sets with a different version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    pub name: String,
    pub from: String,
    pub to: String,
}

/// PackageSetDiff - differences between two snapshots of the same dialect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageSetDiff {
    pub added: BTreeMap<String, String>,
    pub removed: BTreeMap<String, String>,
    pub changed: Vec<VersionChange>,
}

impl PackageSetDiff {
    /// Compares `old` against `new`
    pub fn between(old: &PackageSet, new: &PackageSet) -> Self {
        let mut diff = PackageSetDiff::default();

        for (name, old_version) in old.iter() {
            match new.get(name) {
                None => {
                    diff.removed
                        .insert(name.to_string(), old_version.to_string());
                }
                Some(new_version) if new_version != old_version => {
                    diff.changed.push(VersionChange {
                        name: name.to_string(),
                        from: old_version.to_string(),
                        to: new_version.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        for (name, new_version) in new.iter() {
            if !old.contains(name) {
                diff.added.insert(name.to_string(), new_version.to_string());
            }
        }

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}
