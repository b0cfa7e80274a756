use lazy_static::lazy_static;
use regex::Regex;

const VMESS_LINK_PREFIX: &str = "vmess://";

lazy_static! {
    static ref VMESS_PLAIN_REGEX: Regex = Regex::new(r"vmess://[A-Za-z0-9+/_\-]+").unwrap();
}

/// Pull every `vmess://` link out of free-form text.
///
/// Links are returned raw, in the order they appear. A link ends at the first
/// character outside the base64 alphabet, so the query part of
/// `vmess://...?remarks=..` links is not captured.
pub fn grep_vmess_links(text: &str) -> Vec<String> {
    let mut results = Vec::new();
    // The text before the first prefix is never part of a link.
    for fragment in text.split(VMESS_LINK_PREFIX).skip(1) {
        let candidate = format!("{}{}", VMESS_LINK_PREFIX, fragment);
        results.extend(
            VMESS_PLAIN_REGEX
                .find_iter(&candidate)
                .map(|m| m.as_str().to_string()),
        );
    }
    results
}
