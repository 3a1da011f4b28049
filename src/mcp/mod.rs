//! MCP server for OEIS lookups: search, rendered pages, and link
//! rewriting via the Model Context Protocol.
//!
//! Tools: 2 lookup + 2 text + 2 cache = 6 total.

pub mod params;

use params::*;
use crate::config::OeisConfig;
use crate::provider::{CachedSequenceProvider, SearchBackend, SequenceProvider};
use crate::render::{PageAssets, PageRenderer};
use crate::scan::find_sequence_ids;
use crate::sequence::SequenceId;
use crate::view::SearchItem;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ok_text(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn err_text(msg: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg)]))
}

fn to_tool_result(result: Result<String, String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => ok_text(text),
        Err(msg) => err_text(msg),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn parse_id(raw: &str) -> Result<SequenceId, String> {
    SequenceId::parse(raw).map_err(|e| e.to_string())
}

/// Search and summarize each hit as a pick-list row
pub async fn search_summary<P: SequenceProvider>(
    provider: &P,
    query: &str,
) -> Result<String, String> {
    let query = query.trim();
    if query.is_empty() {
        return Err("query must not be empty".into());
    }
    let records = provider.search(query).await.map_err(|e| e.to_string())?;
    let items: Vec<SearchItem> = records.iter().map(SearchItem::from).collect();
    to_json(&items)
}

/// Full HTML page for one sequence
pub async fn sequence_page<P: SequenceProvider>(
    provider: &P,
    renderer: &PageRenderer,
    raw_id: &str,
) -> Result<String, String> {
    let id = parse_id(raw_id)?;
    let record = provider.get_sequence(&id).await.map_err(|e| e.to_string())?;
    Ok(renderer.render(&record, &PageAssets::Inline))
}

/// Sequence IDs in the order they appear, with positions
pub fn scan_summary(text: &str) -> Result<String, String> {
    to_json(&find_sequence_ids(text))
}

/// IDs and names of every cached sequence
pub fn cached_summary<B: SearchBackend>(provider: &CachedSequenceProvider<B>) -> Result<String, String> {
    let items: Vec<SearchItem> = provider.cached().iter().map(SearchItem::from).collect();
    to_json(&items)
}

pub fn forget_summary<B: SearchBackend>(
    provider: &CachedSequenceProvider<B>,
    raw_id: &str,
) -> Result<String, String> {
    let id = parse_id(raw_id)?;
    to_json(&serde_json::json!({ "id": id, "forgotten": provider.forget(&id) }))
}

// ---------------------------------------------------------------------------
// OeisMcpServer
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct OeisMcpServer {
    provider: Arc<CachedSequenceProvider>,
    renderer: Arc<PageRenderer>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl OeisMcpServer {
    pub fn new(provider: Arc<CachedSequenceProvider>, renderer: PageRenderer) -> Self {
        Self {
            provider,
            renderer: Arc::new(renderer),
            tool_router: Self::tool_router(),
        }
    }

    // ── Lookup tools ────────────────────────────────────────────────────

    #[tool(description = "Search the OEIS by terms or text; returns ID, name and leading terms per hit")]
    async fn search_sequences(
        &self,
        Parameters(p): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(search_summary(self.provider.as_ref(), &p.query).await)
    }

    #[tool(description = "Render a sequence as a self-contained HTML page with linked cross-references")]
    async fn show_sequence(
        &self,
        Parameters(p): Parameters<SequenceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(sequence_page(self.provider.as_ref(), &self.renderer, &p.id).await)
    }

    // ── Text tools ──────────────────────────────────────────────────────

    #[tool(description = "Rewrite one line of section text: escape markup, link sequence IDs and _Author Names_")]
    fn render_line(
        &self,
        Parameters(p): Parameters<RenderLineParams>,
    ) -> Result<CallToolResult, McpError> {
        ok_text(self.renderer.sections().rewriter().rewrite(&p.line))
    }

    #[tool(description = "Find sequence IDs (A followed by six digits) in text, with 0-based line and column")]
    fn find_sequence_ids(
        &self,
        Parameters(p): Parameters<ScanTextParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(scan_summary(&p.text))
    }

    // ── Cache tools ─────────────────────────────────────────────────────

    #[tool(description = "List sequences fetched during this session")]
    fn list_cached(&self) -> Result<CallToolResult, McpError> {
        to_tool_result(cached_summary(self.provider.as_ref()))
    }

    #[tool(description = "Drop a sequence from the session cache so the next lookup refetches it")]
    fn forget_sequence(
        &self,
        Parameters(p): Parameters<SequenceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        to_tool_result(forget_summary(self.provider.as_ref(), &p.id))
    }
}

#[tool_handler]
impl ServerHandler for OeisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "OEIS MCP server: search integer sequences, render entries as HTML, link cross-references"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run_mcp_server(config: OeisConfig) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async {
        let provider = match CachedSequenceProvider::from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("failed to create OEIS client: {}", e);
                return 1;
            }
        };

        let server = OeisMcpServer::new(Arc::new(provider), PageRenderer::from_config(&config));

        info!("oeis mcp server starting on stdio (endpoint {})", config.search_url());

        let service = match server.serve(rmcp::transport::stdio()).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("failed to start MCP server: {}", e);
                return 1;
            }
        };

        if let Err(e) = service.waiting().await {
            eprintln!("MCP server error: {}", e);
            return 1;
        }

        0
    })
}
