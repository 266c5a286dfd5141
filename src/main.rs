use anyhow::Context;
use clap::Parser;

use blogsync::cli::{Cli, Commands};
use blogsync::config::Config;
use blogsync::domain::Post;
use blogsync::errors::BlogError;
use blogsync::resolver::{normalize, Resolver};
use blogsync::services::BlogService;
use blogsync::sources::SourceRegistry;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("BLOGSYNC_LOG")
        .unwrap_or_else(|_| EnvFilter::new("blogsync=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Slugify is pure and needs no configuration
    if let Commands::Slugify { text } = &cli.command {
        println!("{}", normalize(text));
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let location = match cli.source {
        Some(ref source) => source.clone(),
        None => config.require_source()?.to_string(),
    };

    let resolver = Resolver::new(config.resolver_settings()?);
    let registry = SourceRegistry::new(config.api_token.clone());
    let source = registry
        .find_source(&location)
        .ok_or_else(|| BlogError::UnsupportedSource(location.clone()))?;

    let service = BlogService::new(source, location.as_str(), resolver);

    match cli.command {
        Commands::List { json } => cmd_list(&service, json),
        Commands::Show { slug, json } => cmd_show(&service, &slug, json),
        Commands::Slugify { .. } => Ok(()),
    }
}

fn cmd_list<S: blogsync::sources::ContentSource>(
    service: &BlogService<S>,
    json: bool,
) -> anyhow::Result<()> {
    let posts = service.list_posts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    println!("Posts:\n");
    for post in &posts {
        println!("  {} [{}]", post.title, post.slug);
        println!(
            "    By {} | {} | {} min read",
            post.author,
            post.published.as_deref().unwrap_or("undated"),
            post.read_time_minutes
        );
        println!();
    }

    println!("{} posts.", posts.len());
    Ok(())
}

fn cmd_show<S: blogsync::sources::ContentSource>(
    service: &BlogService<S>,
    slug: &str,
    json: bool,
) -> anyhow::Result<()> {
    let post = service.find_post(slug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print_post(&post);
    }

    Ok(())
}

fn print_post(post: &Post) {
    println!("{}", post.title);
    println!("  Slug: {}", post.slug);
    println!("  Author: {}", post.author);
    if let Some(ref image) = post.author_image {
        println!("  Author image: {}", image);
    }
    if let Some(ref published) = post.published {
        println!("  Published: {}", published);
    }
    println!("  Read time: {} min", post.read_time_minutes);
    if let Some(ref thumbnail) = post.thumbnail {
        println!("  Thumbnail: {}", thumbnail);
    }
    if let Some(ref summary) = post.summary {
        println!("\n{}", summary);
    }
}
