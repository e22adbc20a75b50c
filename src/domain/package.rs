//! Package listing entry structures

use serde::Serialize;
use std::fmt;

/// File name suffix marking a dependency package
pub const DEPENDENCY_SUFFIX: &str = ".appx";

/// File name suffix marking an application bundle
pub const BUNDLE_SUFFIX: &str = ".msixbundle";

/// One row of the mirror's file listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageEntry {
    /// Display name, also the file name the download is stored under
    pub name: String,
    /// Direct download URL
    pub url: String,
    /// Link expiry text, display only
    pub expire: String,
    /// SHA-1 text as listed by the mirror, display only
    pub sha1: String,
}

impl PackageEntry {
    /// Creates a new listing entry
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        expire: impl Into<String>,
        sha1: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            expire: expire.into(),
            sha1: sha1.into(),
        }
    }

    /// Returns true if the entry names a dependency package
    pub fn is_dependency(&self) -> bool {
        self.name.to_lowercase().ends_with(DEPENDENCY_SUFFIX)
    }

    /// Returns true if the entry names an application bundle
    pub fn is_bundle(&self) -> bool {
        self.name.to_lowercase().ends_with(BUNDLE_SUFFIX)
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (expires {})", self.name, self.expire)
    }
}

/// The two package categories the installer cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Redistributable runtime package required before the app can run
    Dependency,
    /// The primary installable bundle for the requested app
    Bundle,
}

impl PackageKind {
    /// Returns the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageKind::Dependency => "dependency",
            PackageKind::Bundle => "bundle",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> PackageEntry {
        PackageEntry::new(
            "Microsoft.VCLibs.x64.14.00.appx",
            "http://dl.example/vclibs",
            "2099-01-01",
            "abc123",
        )
    }

    #[test]
    fn test_package_entry_new() {
        let entry = sample_entry();
        assert_eq!(entry.name, "Microsoft.VCLibs.x64.14.00.appx");
        assert_eq!(entry.url, "http://dl.example/vclibs");
        assert_eq!(entry.expire, "2099-01-01");
        assert_eq!(entry.sha1, "abc123");
    }

    #[test]
    fn test_is_dependency() {
        assert!(sample_entry().is_dependency());
        assert!(!sample_entry().is_bundle());
    }

    #[test]
    fn test_is_bundle() {
        let entry = PackageEntry::new("App_1.0_neutral.Msixbundle", "http://x", "", "");
        assert!(entry.is_bundle());
        assert!(!entry.is_dependency());
    }

    #[test]
    fn test_suffix_check_is_case_insensitive() {
        let entry = PackageEntry::new("LIB.X64.APPX", "http://x", "", "");
        assert!(entry.is_dependency());
    }

    #[test]
    fn test_unrelated_suffix_is_neither() {
        let entry = PackageEntry::new("readme.txt", "http://x", "", "");
        assert!(!entry.is_dependency());
        assert!(!entry.is_bundle());
    }

    #[test]
    fn test_package_entry_display() {
        let display = format!("{}", sample_entry());
        assert_eq!(
            display,
            "Microsoft.VCLibs.x64.14.00.appx (expires 2099-01-01)"
        );
    }

    #[test]
    fn test_package_kind_display() {
        assert_eq!(format!("{}", PackageKind::Dependency), "dependency");
        assert_eq!(format!("{}", PackageKind::Bundle), "bundle");
    }

    #[test]
    fn test_serialize_entry() {
        let json = serde_json::to_string(&sample_entry()).unwrap();
        assert!(json.contains("\"name\":\"Microsoft.VCLibs.x64.14.00.appx\""));
        assert!(json.contains("\"sha1\":\"abc123\""));
    }
}
