//! CLI entry point for blogpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogpost")]
#[command(version)]
#[command(about = "Load Markdown/MDX blog posts and render post listings", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post (file name without extension)
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the post list as HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a date the way the post list shows it
    Date {
        /// Date string, e.g. 2024-01-15
        value: String,

        /// Append how long ago the date was
        #[arg(short, long)]
        relative: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogpost=debug,info"
    } else {
        "blogpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { json } => {
            let blog = blogpost::Blog::new(&base_dir)?;
            blogpost::commands::list::run(&blog, json)?;
        }

        Commands::Show { slug, json } => {
            let blog = blogpost::Blog::new(&base_dir)?;
            blogpost::commands::show::run(&blog, &slug, json)?;
        }

        Commands::Render { output } => {
            let blog = blogpost::Blog::new(&base_dir)?;
            tracing::debug!("Rendering post list from {:?}", blog.posts_dir());
            blogpost::commands::render::run(&blog, output.as_deref())?;
        }

        Commands::Date { value, relative } => {
            println!("{}", blogpost::format_date(&value, relative));
        }

        Commands::Version => {
            println!("blogpost version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
