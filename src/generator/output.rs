use crate::models::{ProxyNode, Vmess};
use crate::settings::OutputFormat;

/// Render decoded nodes in the requested format.
///
/// `Links` has nothing to render from decoded nodes; callers print the raw
/// links themselves, so an empty string is returned.
pub fn render_nodes(nodes: &[Vmess], format: OutputFormat) -> Result<String, serde_yaml::Error> {
    let output = match format {
        OutputFormat::Clash => join_lines(nodes.iter().map(|node| node.to_clash())),
        OutputFormat::Json => join_lines(nodes.iter().map(|node| node.to_json_string())),
        OutputFormat::Yaml => {
            if nodes.is_empty() {
                String::new()
            } else {
                serde_yaml::to_string(nodes)?
            }
        }
        OutputFormat::Links => String::new(),
    };
    Ok(output)
}

/// One link per line.
pub fn render_links(links: &[String]) -> String {
    join_lines(links.iter().cloned())
}

fn join_lines<I: Iterator<Item = String>>(lines: I) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output
}
