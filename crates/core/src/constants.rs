//! Constants used throughout the notes core crate.

use std::time::Duration;

/// Default root of the Notion HTTP API.
pub const DEFAULT_NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent in the `Notion-Version` header on every call.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Name of the header carrying [`NOTION_VERSION`].
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Timeout for a single outbound Notion call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of characters of a note included in the "sending" log line.
pub const LOG_PREVIEW_CHARS: usize = 50;

/// Environment variable holding the Notion integration token.
pub const NOTION_TOKEN_ENV: &str = "NOTION_TOKEN";

/// Environment variable holding the raw target page identifier.
pub const NOTION_PAGE_ID_ENV: &str = "NOTION_PAGE_ID";
