pub mod error;
pub mod explodes;
pub mod grep;
pub mod subparser;

pub use error::ParseError;
pub use explodes::explode_vmess;
pub use grep::grep_vmess_links;
pub use subparser::explode_vmess_text;
