pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main types for easier access
pub use models::{HttpOptions, ProxyBase, ProxyNode, ProxyType, Vmess};
pub use parser::{explode_vmess, explode_vmess_text, grep_vmess_links, ParseError};
pub use settings::{OutputFormat, Settings};
