use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use skills_list::cli;

#[derive(Parser)]
#[command(name = "skills-list", version)]
#[command(about = "Render a sortable skills list as HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the skills list once, optionally after replaying sort clicks
    Render {
        /// Skills JSON location: relative path or http(s) URL (default: db/skills.json)
        #[arg(long)]
        source: Option<String>,

        /// Output HTML file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Path to config file (defaults to ./skills-list.toml or ~/.config/skills-list/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Sort attribute to apply as a button click, repeatable ("name" or "level")
        #[arg(long = "sort")]
        sorts: Vec<String>,
    },

    /// Render, then treat each stdin line as a sort button click
    Interactive {
        /// Skills JSON location: relative path or http(s) URL (default: db/skills.json)
        #[arg(long)]
        source: Option<String>,

        /// Output HTML file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            source,
            output,
            config,
            sorts,
        } => {
            cli::render::run(source, output, config, sorts).await?;
        }
        Commands::Interactive {
            source,
            output,
            config,
        } => {
            cli::interactive::run(source, output, config).await?;
        }
    }

    Ok(())
}
