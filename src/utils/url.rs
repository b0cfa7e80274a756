//! Query string helpers

use std::collections::HashMap;

use url::form_urlencoded;

/// True when every `%` in `s` starts a two hex digit escape.
fn has_valid_escapes(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// Parses a URL-encoded query string into a key/value map.
///
/// Never fails. A pair with a broken percent escape or a `;` is dropped and
/// the remaining pairs are kept. Pairs without `=` get an empty value and
/// `+` becomes a space. When a key repeats, the first value is kept.
///
/// # Examples
/// ```
/// use vmess_link::utils::url::parse_query;
///
/// let query = parse_query("remarks=My%20Node&path=%zz&tls=1&tls=0");
/// assert_eq!(query.get("remarks").map(String::as_str), Some("My Node"));
/// assert_eq!(query.get("path"), None);
/// assert_eq!(query.get("tls").map(String::as_str), Some("1"));
/// ```
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.split('&') {
        if pair.is_empty() || pair.contains(';') || !has_valid_escapes(pair) {
            continue;
        }
        if let Some((key, value)) = form_urlencoded::parse(pair.as_bytes()).next() {
            if key.is_empty() {
                continue;
            }
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
    params
}
