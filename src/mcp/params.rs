//! MCP tool parameter structs with schemars-derived JSON schemas.

use schemars::JsonSchema;
use serde::Deserialize;

// ── Search params ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(
        description = "OEIS query: comma-separated terms such as '1,2,3,5,8', free text, or 'id:A000045'"
    )]
    pub query: String,
}

// ── Sequence params ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SequenceIdParams {
    #[schemars(description = "Sequence ID, 'A' followed by six digits (e.g. A000045)")]
    pub id: String,
}

// ── Text params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RenderLineParams {
    #[schemars(description = "One line of OEIS section text")]
    pub line: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ScanTextParams {
    #[schemars(description = "Text to scan for sequence IDs")]
    pub text: String,
}
