//! String utility functions for text processing

use rand::Rng;

/// Appends `_<random non-negative integer>` to a remark.
///
/// Nodes copied between subscriptions often share a remark; the suffix keeps
/// their display names apart. Not a uniqueness guarantee.
pub fn append_random_suffix(remark: &str) -> String {
    let suffix: u64 = rand::thread_rng().gen_range(0..=i64::MAX as u64);
    format!("{}_{}", remark, suffix)
}

/// Maps an empty string to `None`.
pub fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
