//! oeis CLI: search the OEIS, render entries to HTML, MCP server.
//!
//! Usage:
//!   oeis search <query> [--first]
//!   oeis show <id> [--out dir]
//!   oeis browse <query> [--out dir]
//!   oeis render-line <text>
//!   oeis scan <file>
//!   oeis mcp

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use oeis_view::config::OeisConfig;
use oeis_view::provider::{CachedSequenceProvider, SequenceProvider};
use oeis_view::render::PageRenderer;
use oeis_view::scan::{find_number_lists, find_sequence_ids};
use oeis_view::sequence::SequenceId;
use oeis_view::view::{
    navigation_channel, SearchController, SearchItem, SearchOutcome, SequenceViewController,
    ViewHost, ViewResult,
};
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oeis", version, about = "Browse the On-Line Encyclopedia of Integer Sequences")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search by terms (e.g. 1,2,3,5,8) or text and list the hits
    Search {
        query: String,
        /// Only print the best match
        #[arg(long)]
        first: bool,
    },
    /// Render one sequence as HTML
    Show {
        /// Sequence ID, e.g. A000045
        id: String,
        /// Write <id>.html into this directory instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Search, pick a result, then follow cross-references by ID
    Browse {
        query: String,
        /// Directory for rendered pages
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Rewrite one line of section text and print the HTML
    RenderLine { text: String },
    /// List sequence IDs and term lists found in a file
    Scan { file: PathBuf },
    /// Start the MCP (Model Context Protocol) server on stdio
    Mcp,
}

// ---------------------------------------------------------------------------
// TerminalHost
// ---------------------------------------------------------------------------

/// Pick lists on stdout, pages written to `<out>/<id>.html`
struct TerminalHost {
    out: PathBuf,
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl TerminalHost {
    fn new(out: PathBuf) -> Self {
        Self {
            out,
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    fn page_path(&self, id: &SequenceId) -> PathBuf {
        self.out.join(format!("{}.html", id))
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    async fn prompt(&self, text: &str) -> Option<String> {
        print!("{}", text);
        std::io::stdout().flush().ok();
        let mut input = self.input.lock().await;
        match input.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_string()),
            _ => None,
        }
    }
}

#[async_trait]
impl ViewHost for TerminalHost {
    async fn pick(&self, title: &str, items: &[SearchItem]) -> Option<usize> {
        println!("{}", title);
        for (i, item) in items.iter().enumerate() {
            println!("{:>3}. {}  {}", i + 1, item.label, item.description);
            println!("     {}", item.detail);
        }
        let answer = self.prompt("Choose a sequence (blank to cancel): ").await?;
        answer.parse::<usize>().ok()?.checked_sub(1)
    }

    async fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    async fn open_view(&self, id: &SequenceId, html: String) -> ViewResult<()> {
        tokio::fs::create_dir_all(&self.out).await?;
        let path = self.page_path(id);
        tokio::fs::write(&path, html).await?;
        println!("Wrote {}", path.display());
        Ok(())
    }

    async fn reveal_view(&self, id: &SequenceId) -> ViewResult<()> {
        println!("Already open: {}", self.page_path(id).display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn block_on<F: Future<Output = i32>>(future: F) -> i32 {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(future),
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            1
        }
    }
}

fn open_provider(config: &OeisConfig) -> Result<Arc<CachedSequenceProvider>, String> {
    CachedSequenceProvider::from_config(config)
        .map(Arc::new)
        .map_err(|e| format!("Failed to create OEIS client: {}", e))
}

async fn cmd_search(provider: &CachedSequenceProvider, query: &str, first: bool) -> i32 {
    let records = match provider.search(query).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if records.is_empty() {
        println!("No sequences found for {}.", query);
        return 0;
    }
    let shown = if first { 1 } else { records.len() };
    for record in records.iter().take(shown) {
        println!("{}  {}", record.id, record.name);
        println!("         {}", record.leading_terms(12).join(","));
    }
    0
}

async fn cmd_show(
    provider: Arc<CachedSequenceProvider>,
    renderer: PageRenderer,
    raw_id: &str,
    out: Option<PathBuf>,
) -> i32 {
    let id = match SequenceId::parse(raw_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let Some(out) = out else {
        return match provider.get_sequence(&id).await {
            Ok(record) => {
                println!("{}", renderer.render(&record, &Default::default()));
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    };

    let views = SequenceViewController::new(provider, Arc::new(TerminalHost::new(out)))
        .with_renderer(renderer);
    match views.show(&id).await {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_browse(
    provider: Arc<CachedSequenceProvider>,
    renderer: PageRenderer,
    query: &str,
    out: PathBuf,
) -> i32 {
    let host = Arc::new(TerminalHost::new(out));
    let views = Arc::new(
        SequenceViewController::new(provider, Arc::clone(&host)).with_renderer(renderer),
    );

    let search = SearchController::new(Arc::clone(&views));
    match search.execute_search(query).await {
        Ok(SearchOutcome::Shown(_)) => {}
        Ok(SearchOutcome::Blank) => {
            eprintln!("Error: empty query");
            return 1;
        }
        Ok(_) => return 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    let (navigator, requests) = navigation_channel();
    let navigation = {
        let views = Arc::clone(&views);
        tokio::spawn(async move { views.run_navigation(requests).await })
    };

    while let Some(line) = host.prompt("Follow sequence (A######, blank to quit): ").await {
        if line.is_empty() {
            break;
        }
        if !navigator.handle_message(&line) {
            eprintln!("Warning: {:?} is not a sequence ID", line);
        }
    }
    drop(navigator);

    match navigation.await {
        Ok(_) => {
            println!("Opened {} page(s)", views.open_views().len());
            0
        }
        Err(e) => {
            eprintln!("Error: navigation task failed: {}", e);
            1
        }
    }
}

fn cmd_render_line(renderer: &PageRenderer, text: &str) -> i32 {
    println!("{}", renderer.sections().render_line(text));
    0
}

fn cmd_scan(config: &OeisConfig, path: &Path) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", path.display(), e);
            return 1;
        }
    };

    if config.enable_code_lens {
        for m in find_sequence_ids(&text) {
            println!("{}:{}:{}: {}", path.display(), m.line + 1, m.column + 1, m.id);
        }
    }
    for (line_no, line) in text.lines().enumerate() {
        for m in find_number_lists(line) {
            let column = line[..m.start].chars().count();
            println!(
                "{}:{}:{}: search {}",
                path.display(),
                line_no + 1,
                column + 1,
                m.query()
            );
        }
    }
    0
}

/// `RUST_LOG` directives when set and valid, otherwise `info`
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match OeisConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let renderer = PageRenderer::from_config(&config);

    let code = match cli.command {
        Commands::Mcp => oeis_view::mcp::run_mcp_server(config),
        Commands::RenderLine { text } => cmd_render_line(&renderer, &text),
        Commands::Scan { file } => cmd_scan(&config, &file),
        Commands::Search { query, first } => match open_provider(&config) {
            Ok(provider) => block_on(cmd_search(&provider, &query, first)),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Show { id, out } => match open_provider(&config) {
            Ok(provider) => block_on(cmd_show(provider, renderer, &id, out)),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Browse { query, out } => match open_provider(&config) {
            Ok(provider) => block_on(cmd_browse(provider, renderer, &query, out)),
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("oeis_view=verbose")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn log_filter_honours_global_level() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
