use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_catalog::api::state::AppState;
use blog_catalog::config::AppConfig;
use blog_catalog::content::ArticleStore;
use blog_catalog::tools::load_tools;
use blog_catalog::{catalog, models::ArticleMeta};

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(about = "Content catalog and search API for a markdown blog")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Content directory (overrides config)
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Path to tools.yaml (overrides config)
    #[arg(long)]
    tools_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the catalog listing, most recent first
    List {
        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Search the catalog
    Search {
        /// Query matched against title, summary, author and tags
        query: String,
    },

    /// Validate tools.yaml (schema + id collisions); exits non-zero on failure
    ValidateTools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(config);
            let app = blog_catalog::api::build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::List { page, page_size } => {
            let store = ArticleStore::new(&config.content_dir);
            let mut metas = store.load()?;
            catalog::sort_by_recency(&mut metas);

            let page_size = page_size.unwrap_or(config.catalog.page_size);
            let window = catalog::paginate(metas, page, page_size);

            println!(
                "Page {}/{} ({} articles total)",
                window.current_page,
                window.total_pages.max(1),
                window.total_count
            );
            for meta in &window.items {
                print_meta(meta);
            }
        }
        Commands::Search { query } => {
            let store = ArticleStore::new(&config.content_dir);
            let metas = store.load()?;
            let mut hits = catalog::search(&metas, &query);
            catalog::sort_by_recency(&mut hits);

            if hits.is_empty() {
                println!("No articles match {:?}", query);
            } else {
                println!("{} article(s) match {:?}:", hits.len(), query);
                for meta in &hits {
                    print_meta(meta);
                }
            }
        }
        Commands::ValidateTools => match load_tools(&config.tools_path) {
            Ok(tools) => {
                println!("tools.yaml OK: {} entries, no id collisions", tools.len());
            }
            Err(e) => {
                eprintln!("tools.yaml validation failed:\n{}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Load the config file when present, fall back to defaults otherwise,
/// then apply CLI overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = if cli.config.exists() {
        AppConfig::from_file(&cli.config)?
    } else {
        AppConfig::default()
    };

    if let Some(ref dir) = cli.content_dir {
        config.content_dir = dir.clone();
    }
    if let Some(ref path) = cli.tools_path {
        config.tools_path = path.clone();
    }
    config.validate()?;
    Ok(config)
}

fn print_meta(meta: &ArticleMeta) {
    println!(
        "  {}  {:<30}  {}",
        meta.frontmatter.upload_at, meta.slug, meta.frontmatter.title
    );
}
