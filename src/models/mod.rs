//! Core data models for the application
//!
//! This module contains the records produced by the link decoder,
//! separated from the logic that builds them.
//!
//! # Usage
//!
//! ```rust
//! use vmess_link::models::{ProxyNode, Vmess};
//!
//! let mut node = Vmess::default();
//! node.base.server = "example.com".to_string();
//! node.base.port = 443;
//! node.cipher = "auto".to_string();
//! assert_eq!(node.identifier(), "example.com:443auto");
//! ```

mod proxy;
mod vmess;

pub use proxy::*;
pub use vmess::*;
