pub mod base64;
pub mod string;
pub mod url;

// Re-export common utilities
pub use self::base64::{base64_decode_permissive, base64_encode};
pub use self::string::{append_random_suffix, non_empty};
pub use self::url::parse_query;
