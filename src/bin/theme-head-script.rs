//! Print the pre-paint theme script for embedding in page templates.
//!
//! The static site generator calls this once per build and pastes the output
//! into `<head>`, ahead of any stylesheet.

use std::path::PathBuf;

use clap::Parser;
use site_client::config::{ConfigError, SiteConfig};
use site_client::theme::{head_script, head_script_tag};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "theme-head-script", about = "Emit the inline pre-paint theme script")]
struct Cli {
    /// JSON site config (same shape as `data-site-config`). Defaults when absent.
    #[arg(long, env = "SITE_CONFIG")]
    config: Option<PathBuf>,

    /// Emit bare JavaScript instead of a `<script>` element.
    #[arg(long)]
    bare: bool,
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: path.clone(), source })?;
            SiteConfig::from_json(&raw)?
        }
        None => SiteConfig::default(),
    };
    Ok(if cli.bare { head_script(&config.theme) } else { head_script_tag(&config.theme) })
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(script) => println!("{script}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
