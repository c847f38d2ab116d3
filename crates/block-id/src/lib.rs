//! Notion block identifier utilities.
//!
//! Notion page and block identifiers are commonly copied out of page URLs as a *raw* form:
//! **32 characters with no hyphens**. The block-children endpoint expects the *hyphenated* form
//! instead, grouped `8-4-4-4-12`.
//!
//! This crate provides a small wrapper type ([`BlockId`]) that holds the hyphenated form once
//! constructed.
//!
//! ## Raw form
//! - Length: 32 characters
//! - Example: `2020b70967ed803ba28fdc5ed49984a0`
//!
//! ## Hyphenated form
//! - Length: 36 characters
//! - Example: `2020b709-67ed-803b-a28f-dc5ed49984a0`
//!
//! Notes:
//! - Only the length is checked. Characters are not required to be hexadecimal and case is
//!   preserved, so any 32-character string is re-segmented as-is.
//! - Input that is already hyphenated (36 characters) is rejected.

mod block_id;

pub use block_id::{BlockId, HYPHENATED_LEN, RAW_LEN};

/// Error type for block identifier operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockIdError {
    /// The raw identifier does not have exactly [`RAW_LEN`] characters.
    #[error("invalid block id length: {actual}, expected {}", RAW_LEN)]
    InvalidLength { actual: usize },
}

/// Result type for block identifier operations.
pub type BlockIdResult<T> = Result<T, BlockIdError>;
