use notes_block_id::BlockIdError;

/// Failure of a single outbound Notion call.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("Notion API did not respond in time")]
    Timeout,
    #[error("unable to connect to Notion API: {0}")]
    Connect(reqwest::Error),
    #[error("Notion API returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("Notion request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for NotionError {
    fn from(err: reqwest::Error) -> Self {
        // A connect timeout reports both; it is a timeout.
        if err.is_timeout() {
            NotionError::Timeout
        } else if err.is_connect() {
            NotionError::Connect(err)
        } else {
            NotionError::Request(err)
        }
    }
}

pub type NotionResult<T> = std::result::Result<T, NotionError>;

/// Failure of a note submission, from validation through the outbound call.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("{0}")]
    Config(String),
    #[error("Content cannot be empty")]
    EmptyContent,
    #[error("invalid page id: {0}")]
    InvalidPageId(#[from] BlockIdError),
    #[error(transparent)]
    Notion(#[from] NotionError),
}

pub type WriteResult<T> = std::result::Result<T, WriteError>;
