//! # Notes Core
//!
//! Core logic for writing notes to a Notion page.
//!
//! This crate contains:
//! - Startup configuration and its validation ([`NotesConfig`])
//! - Request bodies for Notion's block-children endpoint ([`blocks`])
//! - A minimal Notion client ([`NotionClient`])
//! - The note submission pipeline ([`NoteService`])
//!
//! **No API concerns**: HTTP routing, content negotiation, flash messages and page rendering
//! belong in `api-rest`; shared response types live in `api-shared`.

pub mod blocks;
pub mod config;
pub mod constants;
pub mod error;
pub mod notes;
pub mod notion;

pub use config::{ConfigStatus, NotesConfig};
pub use error::{NotionError, NotionResult, WriteError, WriteResult};
pub use notes::NoteService;
pub use notion::NotionClient;

pub use notes_block_id::{BlockId, BlockIdError};
