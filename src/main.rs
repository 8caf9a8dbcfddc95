//! CLI entry point for cms-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cms_blog::config::Mode;

#[derive(Parser)]
#[command(name = "cms-blog")]
#[command(version)]
#[command(about = "Adapts headless CMS blog content for a static site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Hide drafts, as a production build does
    #[arg(short, long, global = true)]
    production: bool,

    /// Read content from a JSON fixture instead of the CMS API
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, list, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post as JSON
    Show {
        /// Post id
        id: String,
    },

    /// Write adapted posts, tags and categories as JSON files
    Export {
        /// Output directory, relative to the base directory
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_blog=debug,info"
    } else {
        "cms_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Commands::Version = cli.command {
        println!("cms-blog version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut app = cms_blog::CmsBlog::new(&base_dir)?;
    if cli.production {
        app.config.mode = Mode::Production;
    }
    tracing::debug!("Running in {:?} mode", app.config.mode);

    let client = app.client(cli.fixture.as_deref())?;
    let source = app.source(client);

    match cli.command {
        Commands::List { r#type } => {
            cms_blog::commands::list::run(&app, &source, &r#type).await?;
        }

        Commands::Show { id } => {
            cms_blog::commands::show::run(&source, &id).await?;
        }

        Commands::Export { out } => {
            let out_dir = if out.is_absolute() {
                out
            } else {
                base_dir.join(out)
            };
            tracing::info!("Exporting content to {:?}", out_dir);
            cms_blog::commands::export::run(&app, &source, &out_dir).await?;
            println!("Exported successfully!");
        }

        Commands::Version => unreachable!("handled above"),
    }

    Ok(())
}
