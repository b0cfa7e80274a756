use log::{debug, error, warn};

use crate::models::Vmess;
use crate::parser::error::ParseError;
use crate::parser::explodes::explode_vmess;
use crate::parser::grep::grep_vmess_links;

/// Greps `text` for vmess links and decodes every one of them.
///
/// Links that fail to decode are logged and skipped; the batch is never
/// aborted. Returned nodes keep the order their links had in `text`.
///
/// # Arguments
/// * `text` - Subscription body, web page dump, chat log, ...
///
/// # Returns
/// * The successfully decoded nodes
pub fn explode_vmess_text(text: &str) -> Vec<Vmess> {
    let links = grep_vmess_links(text);
    debug!("Found {} vmess link candidate(s)", links.len());

    let mut nodes = Vec::with_capacity(links.len());
    for link in &links {
        match explode_vmess(link) {
            Ok(node) => nodes.push(node),
            Err(err) => log_skipped_link(link, &err),
        }
    }
    nodes
}

fn log_skipped_link(link: &str, err: &ParseError) {
    match err {
        ParseError::NotThisFormat => debug!("Skipping '{}': {}", link, err),
        ParseError::MalformedPayload | ParseError::IncompletePayload => {
            warn!("Skipping '{}': {}", link, err)
        }
        ParseError::Json(_) => error!("Unexpected payload in '{}': {}", link, err),
    }
}
