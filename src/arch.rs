//! CPU architecture detection and dependency matching
//!
//! The mirror lists one dependency package per architecture; file names
//! carry the vendor label (`x64`, `x86`, `arm64`) somewhere in the name.

/// Maps a Rust target-arch identifier to the vendor label used in package
/// file names. Unrecognized architectures map to the empty string, which
/// makes the dependency filter match nothing.
pub fn arch_label(raw: &str) -> &'static str {
    match raw {
        "x86_64" => "x64",
        "x86" => "x86",
        "aarch64" => "arm64",
        _ => "",
    }
}

/// Returns the vendor label for the architecture this binary runs on.
pub fn detect_arch_label() -> &'static str {
    arch_label(std::env::consts::ARCH)
}

/// Dependency selection test: the lower-cased file name must contain the
/// label. An empty label never matches (`contains("")` would otherwise be
/// true for every name).
pub fn matches_arch(name: &str, label: &str) -> bool {
    !label.is_empty() && name.to_lowercase().contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arch_label_known() {
        assert_eq!(arch_label("x86_64"), "x64");
        assert_eq!(arch_label("x86"), "x86");
        assert_eq!(arch_label("aarch64"), "arm64");
    }

    #[test]
    fn test_arch_label_unknown() {
        assert_eq!(arch_label("riscv64"), "");
        assert_eq!(arch_label("powerpc64"), "");
        assert_eq!(arch_label(""), "");
    }

    #[test]
    fn test_arch_label_is_pure() {
        assert_eq!(arch_label("x86_64"), arch_label("x86_64"));
        assert_eq!(arch_label("sparc"), arch_label("sparc"));
    }

    #[test]
    fn test_detect_arch_label_is_valid() {
        let label = detect_arch_label();
        assert!(matches!(label, "x64" | "x86" | "arm64" | ""));
    }

    #[test]
    fn test_matches_arch_substring() {
        assert!(matches_arch("Microsoft.VCLibs.x64.14.00.appx", "x64"));
        assert!(matches_arch("MICROSOFT.VCLIBS.X64.APPX", "x64"));
        assert!(!matches_arch("Microsoft.VCLibs.arm64.14.00.appx", "x86"));
    }

    #[test]
    fn test_matches_arch_labels_never_cross_match() {
        assert!(!matches_arch("Lib.x64.appx", "x86"));
        assert!(!matches_arch("Lib.x86.appx", "x64"));
        assert!(!matches_arch("Lib.arm64.appx", "x64"));
    }

    #[test]
    fn test_matches_arch_empty_label_matches_nothing() {
        assert!(!matches_arch("Microsoft.VCLibs.x64.appx", ""));
        assert!(!matches_arch("", ""));
    }
}
