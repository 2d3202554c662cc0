//! Command-line interface for the site.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::export::export_site;
use crate::server;

/// Garage Cowboy website - serve or export the site.
#[derive(Parser)]
#[command(name = "garage-cowboy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the site over HTTP.
    Serve {
        /// Address to listen on (default: SITE_ADDR or 0.0.0.0:8000)
        #[arg(short, long)]
        addr: Option<SocketAddr>,

        /// Directory with the content documents (default: builtin content)
        #[arg(short, long)]
        content_dir: Option<PathBuf>,

        /// Directory served for paths that are not pages (default: STATIC_DIR or static/)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },

    /// Render every page to static HTML files.
    Render {
        /// Existing directory to write the pages into
        output: PathBuf,

        /// Directory with the content documents (default: builtin content)
        #[arg(short, long)]
        content_dir: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::from_env()?;

    match cli.command {
        Commands::Serve {
            addr,
            content_dir,
            static_dir,
        } => {
            let config = apply_overrides(config, addr, content_dir, static_dir);
            server::serve(&config).await
        }
        Commands::Render {
            output,
            content_dir,
        } => {
            let config = apply_overrides(config, None, content_dir, None);
            render_command(&config, &output)
        }
    }
}

fn apply_overrides(
    mut config: SiteConfig,
    addr: Option<SocketAddr>,
    content_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> SiteConfig {
    if let Some(addr) = addr {
        config = config.with_addr(addr);
    }
    if let Some(dir) = content_dir {
        config = config.with_content_dir(dir);
    }
    if let Some(dir) = static_dir {
        config = config.with_static_dir(dir);
    }
    config
}

fn render_command(config: &SiteConfig, output: &std::path::Path) -> Result<()> {
    let registry = config.load_registry()?;

    println!(
        "{} {} content into {}",
        style("Rendering").bold(),
        style(registry.origin()).cyan(),
        style(output.display()).green()
    );

    let written = export_site(&registry, output)?;

    println!();
    for path in &written {
        println!("  {}", path.display());
    }
    println!(
        "{} {} pages",
        style("Wrote").green().bold(),
        written.len()
    );

    Ok(())
}
