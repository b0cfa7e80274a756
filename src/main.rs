use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use vmess_link::generator::{render_links, render_nodes};
use vmess_link::{explode_vmess_text, grep_vmess_links, OutputFormat, Settings};

/// Grep vmess:// links out of text and decode them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to scan for links (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Output format: clash, json, yaml or links
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref().unwrap_or(""))
        .context("Failed to load settings")?;

    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or(&settings.common.log_level));

    let format = args.format.unwrap_or(settings.common.output_format);

    let text = match &args.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let rendered = if format == OutputFormat::Links {
        let links = grep_vmess_links(&text);
        info!("Found {} vmess link(s)", links.len());
        render_links(&links)
    } else {
        let nodes = explode_vmess_text(&text);
        info!("Decoded {} vmess node(s)", nodes.len());
        render_nodes(&nodes, format).context("Failed to render nodes")?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write {}", path))?;
            info!("Successfully wrote nodes to {}", path);
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write stdout")?,
    }

    Ok(())
}
