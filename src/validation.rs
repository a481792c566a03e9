//! Diff-suppress predicates for resource attributes.

/// Suppresses a string attribute diff when the stored and incoming values
/// differ only by case.
///
/// `key` names the attribute being diffed; it is accepted for parity with
/// diff-suppress callback signatures and ignored. Returns true when the diff
/// should be suppressed.
pub fn diff_suppress_string_ignore_case(_key: &str, old: &str, new: &str) -> bool {
    old.to_lowercase() == new.to_lowercase()
}
