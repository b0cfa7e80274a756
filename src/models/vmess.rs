use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::proxy::{join_host_port, ProxyBase, ProxyNode};

fn is_empty_option_string(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, str::is_empty)
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Options for the HTTP-disguised transport.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpOptions {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, Vec<String>>,
}

impl HttpOptions {
    pub fn is_empty(&self) -> bool {
        self.method.is_empty() && self.path.is_empty() && self.headers.is_empty()
    }
}

/// A decoded vmess node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Vmess {
    #[serde(flatten)]
    pub base: ProxyBase,
    pub uuid: String,
    #[serde(rename = "alterId", default)]
    pub alter_id: u32,
    pub cipher: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub tls: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network: String,
    #[serde(default, skip_serializing_if = "HttpOptions::is_empty")]
    pub http_opts: HttpOptions,
    #[serde(default, skip_serializing_if = "is_empty_option_string")]
    pub ws_path: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub ws_headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_cert_verify: bool,
    #[serde(
        rename = "servername",
        default,
        skip_serializing_if = "is_empty_option_string"
    )]
    pub server_name: Option<String>,
}

impl ProxyNode for Vmess {
    fn base(&self) -> &ProxyBase {
        &self.base
    }

    fn identifier(&self) -> String {
        join_host_port(&self.base.server, self.base.port) + &self.cipher
    }

    fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProxyType;

    fn sample() -> Vmess {
        Vmess {
            base: ProxyBase {
                name: "tokyo_42".to_string(),
                server: "jp.example.com".to_string(),
                port: 443,
                proxy_type: ProxyType::VMess,
                udp: false,
            },
            uuid: "b831381d-6324-4d53-ad4f-8cda48b30811".to_string(),
            alter_id: 0,
            cipher: "auto".to_string(),
            tls: true,
            network: "ws".to_string(),
            http_opts: HttpOptions::default(),
            ws_path: Some("/ray".to_string()),
            ws_headers: HashMap::from([("HOST".to_string(), "jp.example.com".to_string())]),
            skip_cert_verify: true,
            server_name: Some("jp.example.com".to_string()),
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(sample().identifier(), "jp.example.com:443auto");

        let mut v6 = sample();
        v6.base.server = "2001:db8::1".to_string();
        v6.cipher = "aes-128-gcm".to_string();
        assert_eq!(v6.identifier(), "[2001:db8::1]:443aes-128-gcm");
    }

    #[test]
    fn test_serialized_field_names() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json_string()).unwrap();
        assert_eq!(value["name"], "tokyo_42");
        assert_eq!(value["type"], "vmess");
        assert_eq!(value["udp"], false);
        assert_eq!(value["alterId"], 0);
        assert_eq!(value["ws-path"], "/ray");
        assert_eq!(value["ws-headers"]["HOST"], "jp.example.com");
        assert_eq!(value["skip-cert-verify"], true);
        assert_eq!(value["servername"], "jp.example.com");
        assert!(value.get("http-opts").is_none());
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let mut node = sample();
        node.tls = false;
        node.ws_path = Some(String::new());
        node.ws_headers.clear();
        node.server_name = None;

        let value: serde_json::Value = serde_json::from_str(&node.to_json_string()).unwrap();
        assert!(value.get("tls").is_none());
        assert!(value.get("ws-path").is_none());
        assert!(value.get("ws-headers").is_none());
        assert!(value.get("servername").is_none());
    }

    #[test]
    fn test_to_clash_line() {
        let node = sample();
        let line = node.to_clash();
        assert!(line.starts_with("- {"));
        assert_eq!(&line[2..], node.to_json_string());
    }

    #[test]
    fn test_read_back_exported_record() {
        let node = sample();
        let parsed: Vmess = serde_json::from_str(&node.to_json_string()).unwrap();
        assert_eq!(parsed, node);
    }
}
