use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blogsync")]
#[command(about = "Resolve stable slugs for blog posts from an external content platform")]
#[command(version)]
pub struct Cli {
    /// Content source: a JSON file path or an http(s) URL (overrides BLOGSYNC_SOURCE)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List resolved posts, newest first
    List {
        /// Print posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug (or source id)
    Show {
        /// Slug as it would appear in a request path
        slug: String,

        /// Print the post as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized slug for some text
    Slugify {
        /// Text to normalize
        text: String,
    },
}
