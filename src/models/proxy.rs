//! Proxy model definitions
//!
//! Contains the fields shared by every proxy record and the trait through
//! which downstream tools identify and export records.

use serde::{Deserialize, Serialize};

/// Represents the type of a proxy.
///
/// Only vmess records are produced by this crate, but the tag is kept as an
/// enum so the serialized `type` field is always a known literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProxyType {
    #[default]
    #[serde(rename = "vmess")]
    VMess,
}

/// Common fields carried by every proxy record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProxyBase {
    pub name: String,
    pub server: String,
    /// Not range checked; links in the wild occasionally carry junk ports.
    pub port: u32,
    #[serde(rename = "type")]
    pub proxy_type: ProxyType,
    #[serde(default)]
    pub udp: bool,
}

/// Behaviour shared by all decoded proxy records.
pub trait ProxyNode {
    fn base(&self) -> &ProxyBase;

    /// Key used by downstream deduplication. Not stored on the record.
    fn identifier(&self) -> String;

    /// Compact JSON rendering of the record, or an empty string if the
    /// record cannot be serialized.
    fn to_json_string(&self) -> String;

    /// One line of a clash `proxies:` list.
    fn to_clash(&self) -> String {
        format!("- {}", self.to_json_string())
    }
}

/// Joins a host and port the way socket addresses are written, bracketing
/// IPv6 literals.
pub fn join_host_port(host: &str, port: u32) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
