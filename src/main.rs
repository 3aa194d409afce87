//! rqlens - a terminal viewer for SPARQL query results.

use rqlens::cli::{Cli, ViewChoice};
use rqlens::config::Config;
use rqlens::error::{Result, RqlensError};
use rqlens::results::{FileSource, ResultSource};
use rqlens::tui::{self, App, Tab};
use rqlens::{headless, logging, queries};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Headless mode logs to stderr; the TUI logs to a file so the
    // terminal display stays intact.
    let headless = std::env::args().any(|a| a == "--headless");
    if headless {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let view = cli.parse_view().map_err(RqlensError::config)?;

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let queries_dir = cli
        .queries_dir
        .clone()
        .unwrap_or_else(|| config.queries.dir.clone());

    // Load every result file up front, one tab each.
    let mut tabs = Vec::new();
    for path in &cli.results {
        let source = FileSource::new(path);
        info!("Loading results from: {}", source.name());
        let result = source.load().await?;
        tabs.push((source.name().to_string(), result));
    }

    if cli.headless {
        for (name, result) in &tabs {
            let rendered = match view {
                ViewChoice::Auto => headless::render(name, result, None),
                ViewChoice::Adapter(adapter) => headless::render(name, result, Some(adapter)),
                ViewChoice::Table => headless::render_table(name, result),
            };
            print!("{rendered}");
        }
        return Ok(());
    }

    // Example queries are optional; a missing directory just empties the
    // sidebar list.
    let query_names = match queries::list_queries(&queries_dir).await {
        Ok(names) => names,
        Err(e) => {
            warn!("No example queries available: {e}");
            Vec::new()
        }
    };

    let tabs: Vec<Tab> = tabs
        .into_iter()
        .map(|(name, result)| Tab::new(name, result, view, &config))
        .collect();
    let app = App::new(tabs, query_names, &config);

    tui::run(app, queries_dir, config.queries.default.clone()).await
}
