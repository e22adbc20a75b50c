//! Suffix-based classification of listing entries

use super::package::{BUNDLE_SUFFIX, DEPENDENCY_SUFFIX};
use super::PackageEntry;
use serde::Serialize;

/// Listing entries partitioned into dependency packages and application
/// bundles, in source order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageSet {
    /// `.appx` entries, installed first and filtered by architecture
    pub dependencies: Vec<PackageEntry>,
    /// `.msixbundle` entries, installed after the dependencies
    pub bundles: Vec<PackageEntry>,
}

impl PackageSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one entry. The two suffix tests run independently; an
    /// entry matching neither is dropped.
    pub fn add(&mut self, entry: PackageEntry) {
        let name = entry.name.to_lowercase();

        if name.ends_with(DEPENDENCY_SUFFIX) {
            self.dependencies.push(entry.clone());
        }
        if name.ends_with(BUNDLE_SUFFIX) {
            self.bundles.push(entry);
        }
    }

    /// Classifies a whole listing in document order
    pub fn from_entries(entries: Vec<PackageEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            set.add(entry);
        }
        set
    }

    /// Total number of classified entries
    pub fn len(&self) -> usize {
        self.dependencies.len() + self.bundles.len()
    }

    /// Returns true if nothing was classified
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> PackageEntry {
        PackageEntry::new(name, format!("http://dl.example/{}", name), "", "")
    }

    #[test]
    fn test_add_dependency() {
        let mut set = PackageSet::new();
        set.add(entry("Microsoft.VCLibs.x64.appx"));
        assert_eq!(set.dependencies.len(), 1);
        assert!(set.bundles.is_empty());
    }

    #[test]
    fn test_add_bundle() {
        let mut set = PackageSet::new();
        set.add(entry("App_2.1.0.0_neutral.msixbundle"));
        assert!(set.dependencies.is_empty());
        assert_eq!(set.bundles.len(), 1);
    }

    #[test]
    fn test_add_is_case_insensitive() {
        let mut set = PackageSet::new();
        set.add(entry("LIB.ARM64.APPX"));
        set.add(entry("App.MsixBundle"));
        assert_eq!(set.dependencies.len(), 1);
        assert_eq!(set.bundles.len(), 1);
    }

    #[test]
    fn test_add_drops_other_suffixes() {
        let mut set = PackageSet::new();
        set.add(entry("App.msix"));
        set.add(entry("App.appxbundle"));
        set.add(entry("BlockMap.xml"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_entries_preserves_order() {
        let set = PackageSet::from_entries(vec![
            entry("B.x64.appx"),
            entry("A.x86.appx"),
            entry("Main.msixbundle"),
        ]);
        let names: Vec<&str> = set.dependencies.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B.x64.appx", "A.x86.appx"]);
        assert_eq!(set.bundles[0].name, "Main.msixbundle");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let entries = vec![entry("A.appx"), entry("B.msixbundle"), entry("C.txt")];
        let first = PackageSet::from_entries(entries.clone());
        let second = PackageSet::from_entries(entries);
        assert_eq!(first.dependencies, second.dependencies);
        assert_eq!(first.bundles, second.bundles);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut set = PackageSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        set.add(entry("A.appx"));
        set.add(entry("B.msixbundle"));
        assert!(!set.is_empty());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serialize_set() {
        let set = PackageSet::from_entries(vec![entry("A.appx")]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"dependencies\""));
        assert!(json.contains("\"bundles\":[]"));
    }
}
