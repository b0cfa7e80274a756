pub mod vmess;

pub use vmess::explode_vmess;
