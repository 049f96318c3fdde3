//! Version extraction and comparison.

use std::cmp::Ordering;

use regex::Regex;

/// Number of dotted components compared (major.minor.patch).
const COMPONENTS: usize = 3;

/// Extract a dotted numeric version from `<name> <version> ...` output.
///
/// Only the second whitespace-separated token is considered, so
/// `rustc 1.88.0 (6b00bc388 2025-06-23)` yields `1.88.0` and
/// `rustc 1.90.0-nightly (abc 2025-07-01)` yields `1.90.0`.
pub fn extract_version(output: &str) -> Option<String> {
    let token = output.split_whitespace().nth(1)?;
    let re = Regex::new(r"^v?(\d+(?:\.\d+)*)").ok()?;
    re.captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Compare two dotted versions over major.minor.patch.
///
/// Missing components and components that are not plain numbers both count
/// as 0, so `"1.88"` equals `"1.88.0"` and `"1.88.x"` equals `"1.88.0"`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> [u64; COMPONENTS] {
        let mut parts = [0; COMPONENTS];
        for (slot, piece) in parts.iter_mut().zip(v.split('.')) {
            *slot = piece.parse().unwrap_or(0);
        }
        parts
    };

    parse(a).cmp(&parse(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_minor_is_greater() {
        assert_eq!(compare_versions("1.90.0", "1.88.0"), Ordering::Greater);
    }

    #[test]
    fn same_version_is_equal() {
        assert_eq!(compare_versions("1.88.0", "1.88.0"), Ordering::Equal);
    }

    #[test]
    fn minor_compares_numerically_not_lexically() {
        assert_eq!(compare_versions("1.2.0", "1.88.0"), Ordering::Less);
        assert_eq!(compare_versions("1.100.0", "1.88.0"), Ordering::Greater);
    }

    #[test]
    fn missing_components_count_as_zero() {
        assert_eq!(compare_versions("1.88", "1.88.0"), Ordering::Equal);
        assert_eq!(compare_versions("2", "1.99.99"), Ordering::Greater);
        assert_eq!(compare_versions("", "0.0.0"), Ordering::Equal);
    }

    #[test]
    fn non_numeric_components_count_as_zero() {
        assert_eq!(compare_versions("1.88.x", "1.88.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.89.0-beta", "1.89.0"), Ordering::Equal);
        assert_eq!(compare_versions("one.two.three", "0.0.0"), Ordering::Equal);
    }

    #[test]
    fn components_past_patch_are_ignored() {
        assert_eq!(compare_versions("1.88.0.9", "1.88.0"), Ordering::Equal);
    }

    #[test]
    fn extracts_stable_rustc_version() {
        let output = "rustc 1.88.0 (6b00bc388 2025-06-23)\n";
        assert_eq!(extract_version(output), Some("1.88.0".to_string()));
    }

    #[test]
    fn extracts_nightly_rustc_version() {
        let output = "rustc 1.90.0-nightly (abcdef012 2025-07-01)";
        assert_eq!(extract_version(output), Some("1.90.0".to_string()));
    }

    #[test]
    fn extracts_v_prefixed_version() {
        assert_eq!(extract_version("node v20.11.1"), Some("20.11.1".to_string()));
    }

    #[test]
    fn single_token_output_has_no_version() {
        assert_eq!(extract_version("1.88.0"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn non_numeric_second_token_has_no_version() {
        assert_eq!(extract_version("git version 2.45.0"), None);
    }
}
