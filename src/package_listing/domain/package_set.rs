use super::PackageRecord;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// PackageSet - mapping of package name to version for one snapshot
///
/// Keys are unique. Inserting a name twice keeps the later version
/// (last-write-wins). Backed by an ordered map so iteration and
/// serialization order depend only on the contents. Deserialization
/// goes through `PackageRecord`, so empty names or versions are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct PackageSet {
    packages: BTreeMap<String, String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the version it replaced
    pub(crate) fn insert(&mut self, record: PackageRecord) -> Option<String> {
        let (name, version) = record.into_parts();
        self.packages.insert(name, version)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterates `(name, version)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.packages
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.packages
    }
}

impl FromIterator<PackageRecord> for PackageSet {
    fn from_iter<I: IntoIterator<Item = PackageRecord>>(iter: I) -> Self {
        let mut set = PackageSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl TryFrom<BTreeMap<String, String>> for PackageSet {
    type Error = anyhow::Error;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(name, version)| PackageRecord::new(name, version))
            .collect()
    }
}

impl From<PackageSet> for BTreeMap<String, String> {
    fn from(set: PackageSet) -> Self {
        set.packages
    }
}

impl IntoIterator for PackageSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}
