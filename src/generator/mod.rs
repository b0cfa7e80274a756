pub mod output;

pub use output::{render_links, render_nodes};
